//! An implementation of RFC 4122 UUID versions 3, 4, and 5
//!
//! ```rust
//! use rfc4122::{uuid3, uuid4, uuid5, Uuid};
//!
//! let uuid = uuid4();
//! println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = uuid3(&Uuid::NAMESPACE_DNS, b"www.example.com");
//! assert_eq!(uuid.to_string(), "5df41881-3aed-3515-88a7-2f4a814cf09e");
//!
//! let uuid = uuid5(&Uuid::NAMESPACE_DNS, b"www.example.com");
//! assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! This library produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |      time_hi          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var| clk_seq_hi|  clk_seq_low  |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field is set at `0011` (version 3), `0100` (version 4), or `0101` (version
//!   5).
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 122 bits are filled with a cryptographically strong random number (version 4)
//!   or with the leading bits of the MD5 (version 3) or SHA-1 (version 5) digest of the namespace
//!   UUID followed by the name.
//!
//! Every generator funnels its raw material through [`Uuid::finalize`], which is the only place
//! where the `ver` and `var` fields are written.
//!
//! # Pluggable providers
//!
//! The random number generator and the hash functions are consumed through the [`RandSource`],
//! [`Md5Source`], and [`Sha1Source`] traits. Errors reported by a provider are returned unchanged
//! from the `generate` methods of [`V4Generator`], [`V3Generator`], and [`V5Generator`].
//!
//! ```rust
//! use rfc4122::{Uuid, V4Generator, V5Generator};
//!
//! let mut g = V4Generator::with_rand08(rand::rngs::OsRng);
//! println!("{}", g.generate()?);
//!
//! let mut g = V5Generator::with_rustcrypto();
//! println!("{}", g.generate(&Uuid::NAMESPACE_URL, b"https://example.com/").unwrap());
//! # Ok::<(), rand::Error>(())
//! ```
//!
//! # Crate features
//!
//! Default features:
//!
//! - `std` enables, among others, the conversion into `String` and the iterator implementation of
//!   [`V4Generator`].
//! - `default_gen` (implies `std`) enables the [`uuid4()`] function backed by the thread-local
//!   random number generator of `rand`.
//!
//! Optional features:
//!
//! - `serde` enables serialization of [`Uuid`] through `serde`.
//! - `uuid` enables the conversion from [`Uuid`] into `uuid::Uuid`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{Uuid, Variant};

pub mod generator;
pub use generator::{RandSource, V4Generator};

pub mod name;
pub use name::{Md5Source, Sha1Source, V3Generator, V5Generator};

mod entry;
#[cfg(feature = "default_gen")]
pub use entry::uuid4;
pub use entry::{uuid3, uuid5};
