//! Integration with the RustCrypto `md-5` and `sha1` crates.

use super::{Md5Source, Sha1Source, V3Generator, V5Generator};
use core::convert::Infallible;
use md5::Digest as _;

/// An [`Md5Source`] backed by [`md5::Md5`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Md5;

impl Md5Source for Md5 {
    type Output = md5::digest::Output<md5::Md5>;
    type Error = Infallible;

    fn md5(&mut self, parts: &[&[u8]]) -> Result<Self::Output, Self::Error> {
        let mut hasher = md5::Md5::new();
        for part in parts {
            hasher.update(part);
        }
        Ok(hasher.finalize())
    }
}

/// A [`Sha1Source`] backed by [`sha1::Sha1`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Sha1;

impl Sha1Source for Sha1 {
    type Output = sha1::digest::Output<sha1::Sha1>;
    type Error = Infallible;

    fn sha1(&mut self, parts: &[&[u8]]) -> Result<Self::Output, Self::Error> {
        let mut hasher = sha1::Sha1::new();
        for part in parts {
            hasher.update(part);
        }
        Ok(hasher.finalize())
    }
}

impl V3Generator<Md5> {
    /// Creates a generator object that computes digests with the `md-5` crate.
    pub const fn with_rustcrypto() -> Self {
        Self::new(Md5)
    }
}

impl V5Generator<Sha1> {
    /// Creates a generator object that computes digests with the `sha1` crate.
    pub const fn with_rustcrypto() -> Self {
        Self::new(Sha1)
    }
}
