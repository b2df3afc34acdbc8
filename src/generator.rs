//! UUIDv4 generator and the random source interface.

use crate::Uuid;

pub mod with_rand08;


/// A trait that defines the random number generator interface for [`V4Generator`].
///
/// Implementations are expected to be cryptographically secure; the uniqueness of UUIDv4 relies
/// entirely on the quality of the bytes supplied here.
pub trait RandSource {
    /// The error reported when the source cannot produce random bytes.
    type Error;

    /// Fills `dest` entirely with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Self::Error>;
}

/// Represents a UUIDv4 generator that draws 16 random bytes from a [`RandSource`] for each UUID.
///
/// The generator keeps no state other than the random source, so independent instances can be
/// used from different threads without coordination.
///
/// # Examples
///
/// ```rust
/// use rfc4122::V4Generator;
///
/// let mut g = V4Generator::with_rand08(rand::rngs::OsRng);
/// let uuid = g.generate()?;
/// assert_eq!(uuid.version(), Some(4));
/// # Ok::<(), rand::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V4Generator<R> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RandSource> V4Generator<R> {
    /// Creates a generator instance.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUIDv4 object.
    ///
    /// A failure of the random source is returned unchanged and no UUID is produced.
    pub fn generate(&mut self) -> Result<Uuid, R::Error> {
        let mut bytes = [0u8; 16];
        self.rng.fill_bytes(&mut bytes)?;
        Ok(Uuid::finalize(bytes, 4))
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv4 object for each call of
/// `next()`.
///
/// # Panics
///
/// `next()` panics if the random source reports an error.
///
/// # Examples
///
/// ```rust
/// use rfc4122::V4Generator;
///
/// V4Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: RandSource> Iterator for V4Generator<R>
where
    R::Error: std::fmt::Debug,
{
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(
            self.generate()
                .expect("rfc4122: random source failed to produce bytes"),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl<R: RandSource> std::iter::FusedIterator for V4Generator<R> where R::Error: std::fmt::Debug {}
