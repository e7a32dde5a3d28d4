//! Predefined namespace IDs for name-based UUIDs
//!
//! Any [`Uuid`] can serve as a namespace for [`uuid3`](crate::uuid3) and
//! [`uuid5`](crate::uuid5); the constants below are the ones registered in RFC 4122 Appendix C.

use crate::Uuid;

/// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_DNS: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_URL: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Namespace for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_OID: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Namespace for X.500 DNs in DER or a text output format (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_X500: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

#[cfg(test)]
mod tests {
    use super::*;

    /// Encodes registered namespaces as in RFC 4122
    #[test]
    fn encodes_registered_namespaces_as_in_rfc_4122() {
        let cases = [
            (NAMESPACE_DNS, "6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            (NAMESPACE_URL, "6ba7b811-9dad-11d1-80b4-00c04fd430c8"),
            (NAMESPACE_OID, "6ba7b812-9dad-11d1-80b4-00c04fd430c8"),
            (NAMESPACE_X500, "6ba7b814-9dad-11d1-80b4-00c04fd430c8"),
        ];

        for (ns, text) in cases {
            assert_eq!(&ns.encode() as &str, text);
            assert_eq!(ns.version(), 1);
        }
    }
}
