//! UUIDv4-related functionality

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use crate::Uuid;
use rand::random;

/// Generates a UUIDv4 object.
///
/// This function draws 16 bytes from the thread-local cryptographically secure random number
/// generator and touches no shared state, so concurrent callers never wait on each other.
///
/// # Examples
///
/// ```rust
/// use rfc4122::uuid4;
///
/// let uuid = uuid4();
/// println!("{uuid}"); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// ```
pub fn uuid4() -> Uuid {
    Uuid::stamp(random(), 4)
}
