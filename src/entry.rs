//! Default generators and entry point functions

use crate::{Uuid, V3Generator, V5Generator};

/// Generates a UUIDv4 object.
///
/// This function employs the thread-local random number generator of `rand`, a CSPRNG seeded by
/// the operating system. On Unix, this function forces the generator to reseed when the process
/// ID changes (i.e. upon process forks) to prevent collisions across processes.
///
/// # Panics
///
/// Panics if the random number generator fails to produce bytes.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = rfc4122::uuid4().to_string();
/// ```
#[cfg(feature = "default_gen")]
#[cfg_attr(docsrs, doc(cfg(feature = "default_gen")))]
pub fn uuid4() -> Uuid {
    unix_fork_safety::reseed_thread_rng_upon_pid_change();

    crate::V4Generator::with_rand08(rand::thread_rng())
        .generate()
        .expect("rfc4122: could not obtain random bytes")
}

/// Generates a UUIDv3 object from `namespace` and `name` using the MD5 implementation of the
/// `md-5` crate.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{uuid3, Uuid};
///
/// let uuid = uuid3(&Uuid::NIL, b"test");
/// assert_eq!(uuid.to_string(), "96e17d7a-ac89-38cf-95e1-bf5098da34e1");
/// ```
pub fn uuid3(namespace: &Uuid, name: &[u8]) -> Uuid {
    match V3Generator::with_rustcrypto().generate(namespace, name) {
        Ok(uuid) => uuid,
        Err(never) => match never {},
    }
}

/// Generates a UUIDv5 object from `namespace` and `name` using the SHA-1 implementation of the
/// `sha1` crate.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{uuid5, Uuid};
///
/// let uuid = uuid5(&Uuid::NAMESPACE_DNS, b"www.example.com");
/// assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
/// ```
pub fn uuid5(namespace: &Uuid, name: &[u8]) -> Uuid {
    match V5Generator::with_rustcrypto().generate(namespace, name) {
        Ok(uuid) => uuid,
        Err(never) => match never {},
    }
}

#[cfg(all(feature = "default_gen", unix))]
mod unix_fork_safety {
    use std::{cell::Cell, process};

    thread_local! {
        static PID: Cell<u32> = Cell::new(process::id());
    }

    /// Reseeds ThreadRng immediately when the process ID changes (i.e. upon process forks).
    pub fn reseed_thread_rng_upon_pid_change() {
        PID.with(|last_pid| {
            let pid = process::id();
            if pid != last_pid.replace(pid) {
                // As of rand v0.8.5 and rand_chacha v0.3.1, up to 63 `u32` values have to be used
                // before reseeding after a fork.
                // See https://github.com/rust-random/rand/pull/1317
                let _: [[u32; 32]; 2] = rand::random();
            }
        })
    }
}

#[cfg(all(feature = "default_gen", not(unix)))]
mod unix_fork_safety {
    pub const fn reseed_thread_rng_upon_pid_change() {}
}
