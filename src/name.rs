//! Name-based UUIDs (version 3 and version 5)

use crate::Uuid;
use md5::Md5;
use sha1::{digest, Digest, Sha1};

/// Generates a UUIDv3 object from a namespace ID and a name using MD5.
///
/// The result is a pure function of `(namespace, name)`: the same inputs produce the same UUID
/// at any time and in any process. The name is hashed byte-exactly (UTF-8 for `&str`).
///
/// # Errors
///
/// Returns [`InvalidNameError`] if `name` is empty.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{uuid3, NAMESPACE_DNS};
///
/// let uuid = uuid3(NAMESPACE_DNS, "python.org")?;
/// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// # Ok::<(), rfc4122::InvalidNameError>(())
/// ```
pub fn uuid3(namespace: Uuid, name: impl AsRef<[u8]>) -> Result<Uuid, InvalidNameError> {
    let digest = hash_name::<Md5>(namespace, name.as_ref())?;
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Ok(Uuid::stamp(bytes, 3))
}

/// Generates a UUIDv5 object from a namespace ID and a name using SHA-1.
///
/// Only the leading 16 bytes of the 20-byte digest are used.
///
/// # Errors
///
/// Returns [`InvalidNameError`] if `name` is empty.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{uuid5, NAMESPACE_DNS};
///
/// let uuid = uuid5(NAMESPACE_DNS, "python.org")?;
/// assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// # Ok::<(), rfc4122::InvalidNameError>(())
/// ```
pub fn uuid5(namespace: Uuid, name: impl AsRef<[u8]>) -> Result<Uuid, InvalidNameError> {
    let digest = hash_name::<Sha1>(namespace, name.as_ref())?;
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest[..16]);
    Ok(Uuid::stamp(bytes, 5))
}

/// Hashes the 16 namespace bytes followed by the name.
fn hash_name<D: Digest>(
    namespace: Uuid,
    name: &[u8],
) -> Result<digest::Output<D>, InvalidNameError> {
    if name.is_empty() {
        return Err(InvalidNameError {});
    }
    Ok(D::new()
        .chain_update(namespace.as_bytes())
        .chain_update(name)
        .finalize())
}

/// Error generating a name-based UUID from an empty name.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("name must not be empty")]
pub struct InvalidNameError {}
