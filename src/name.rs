//! Name-based UUID generators (versions 3 and 5) and the hash function interfaces.
//!
//! Both generators hash the 16-byte namespace UUID followed by the name, and then pack the first
//! 16 bytes of the digest with [`Uuid::finalize`]. The message is handed to the hash source as a
//! list of parts so that no intermediate buffer is needed.

use crate::Uuid;

pub mod with_rustcrypto;

const MD5_LEN: usize = 16;
const SHA1_LEN: usize = 20;

/// A trait that defines the MD5 digest interface for [`V3Generator`].
pub trait Md5Source {
    /// The digest type; must hold exactly 16 bytes.
    type Output: AsRef<[u8]>;

    /// The error reported when the digest cannot be computed.
    type Error;

    /// Computes the MD5 digest of the concatenation of `parts`.
    fn md5(&mut self, parts: &[&[u8]]) -> Result<Self::Output, Self::Error>;
}

/// A trait that defines the SHA-1 digest interface for [`V5Generator`].
pub trait Sha1Source {
    /// The digest type; must hold exactly 20 bytes.
    type Output: AsRef<[u8]>;

    /// The error reported when the digest cannot be computed.
    type Error;

    /// Computes the SHA-1 digest of the concatenation of `parts`.
    fn sha1(&mut self, parts: &[&[u8]]) -> Result<Self::Output, Self::Error>;
}

/// Represents a UUIDv3 generator backed by an [`Md5Source`].
///
/// # Examples
///
/// ```rust
/// use rfc4122::{Uuid, V3Generator};
///
/// let mut g = V3Generator::with_rustcrypto();
/// let uuid = g.generate(&Uuid::NAMESPACE_DNS, b"www.example.com").unwrap();
/// assert_eq!(uuid.to_string(), "5df41881-3aed-3515-88a7-2f4a814cf09e");
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V3Generator<H> {
    hasher: H,
}

impl<H: Md5Source> V3Generator<H> {
    /// Creates a generator instance.
    pub const fn new(hasher: H) -> Self {
        Self { hasher }
    }

    /// Generates the UUIDv3 object for `name` within `namespace`.
    ///
    /// The result is a pure function of the two arguments. A failure of the hash source is
    /// returned unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the hash source returns a digest other than 16 bytes long.
    pub fn generate(&mut self, namespace: &Uuid, name: &[u8]) -> Result<Uuid, H::Error> {
        let digest = self.hasher.md5(&[&namespace.as_bytes()[..], name])?;
        let digest = digest.as_ref();
        assert_eq!(
            digest.len(),
            MD5_LEN,
            "MD5 source must return a 16-byte digest"
        );
        Ok(Uuid::finalize_slice(digest, 3))
    }
}

/// Represents a UUIDv5 generator backed by a [`Sha1Source`].
///
/// Only the first 16 of the 20 digest bytes end up in the UUID.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{Uuid, V5Generator};
///
/// let mut g = V5Generator::with_rustcrypto();
/// let uuid = g.generate(&Uuid::NAMESPACE_DNS, b"www.example.com").unwrap();
/// assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V5Generator<H> {
    hasher: H,
}

impl<H: Sha1Source> V5Generator<H> {
    /// Creates a generator instance.
    pub const fn new(hasher: H) -> Self {
        Self { hasher }
    }

    /// Generates the UUIDv5 object for `name` within `namespace`.
    ///
    /// The result is a pure function of the two arguments. A failure of the hash source is
    /// returned unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the hash source returns a digest other than 20 bytes long.
    pub fn generate(&mut self, namespace: &Uuid, name: &[u8]) -> Result<Uuid, H::Error> {
        let digest = self.hasher.sha1(&[&namespace.as_bytes()[..], name])?;
        let digest = digest.as_ref();
        assert_eq!(
            digest.len(),
            SHA1_LEN,
            "SHA-1 source must return a 20-byte digest"
        );
        Ok(Uuid::finalize_slice(&digest[..16], 5))
    }
}
