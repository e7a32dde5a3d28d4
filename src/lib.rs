//! An implementation of RFC 4122 UUID versions 1, 3, 4, and 5
//!
//! ```rust
//! use rfc4122::{uuid1, uuid4, uuid5, NAMESPACE_DNS};
//!
//! let uuid = uuid1();
//! println!("{uuid}"); // e.g., "d1723894-5fe7-11e7-907b-a6006ad3dba0"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid4();
//! println!("{uuid}"); // e.g., "0f2a8ca7-7ca0-4f43-b71a-d9cb041b890a"
//!
//! let uuid = uuid5(NAMESPACE_DNS, "python.org")?;
//! assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
//!
//! let parsed = rfc4122::parse("886313e1-3b8a-5372-9b90-0c9aee199e5d").unwrap();
//! assert_eq!(parsed, uuid);
//! assert_eq!(parsed.version(), 5);
//! # Ok::<(), rfc4122::InvalidNameError>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|clk_seq_hi |clock_seq_low  |         node (0-1)            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                         node (2-5)                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field is set at `0001`, `0011`, `0100`, or `0101` for version 1, 3, 4, and 5
//!   respectively.
//! - The 2-bit `var` field is set at `10`.
//! - In version 1, the 60-bit timestamp (100-nanosecond intervals since 1582-10-15T00:00:00Z) is
//!   split into `time_low` (bits 0-31), `time_mid` (bits 32-47), and `time_hi` (bits 48-59); the
//!   14-bit clock sequence follows the variant bits; and `node` carries a random 47-bit node ID
//!   with the multicast bit set.
//! - In version 3 and 5, every field other than `ver` and `var` carries the leading bytes of the
//!   MD5 or SHA-1 hash of the namespace ID followed by the name.
//! - In version 4, every field other than `ver` and `var` is filled with a cryptographically
//!   strong random number.
//!
//! # Generation state
//!
//! Only version 1 generation is stateful. [`V1Generator`] owns the last timestamp, the clock
//! sequence, and the node ID, and increments the clock sequence whenever the clock does not
//! advance, so that rapid successive calls and clock rollbacks never yield duplicates. [`uuid1`]
//! shares one such generator process-wide behind a mutex; applications that prefer explicit
//! ownership can construct their own generator and share it by `Arc<Mutex<_>>`.
//!
//! # Crate features
//!
//! - `global_gen` (default): enables [`uuid1`] and [`uuid4`] backed by the operating system's
//!   random number generator. Implies `std`.
//! - `std`: integrates with the standard library (system clock, `String`, and
//!   `std::error::Error`). Without it, this crate is `no_std`.
//! - `serde`: enables serialization and deserialization of [`Uuid`] by `serde`.
//! - `uuid`: enables conversion from and to `uuid::Uuid`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{parse, ParseError, Uuid, Variant};

mod namespace;
pub use namespace::{NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};

mod name;
pub use name::{uuid3, uuid5, InvalidNameError};

pub mod generator;
pub use generator::V1Generator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::uuid1;

mod v4;
#[cfg(feature = "global_gen")]
pub use v4::uuid4;
