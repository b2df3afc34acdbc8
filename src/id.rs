#[cfg(not(feature = "std"))]
use core as std;

use fstr::FStr;
use std::fmt;

/// Represents a Universally Unique IDentifier.
///
/// Values are only produced by [`Uuid::finalize`] (and the generators built on it), so every
/// instance other than the well-known constants carries the RFC 4122 variant bits and a version
/// tag.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Name space ID for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_DNS: Self = Self([
        0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space ID for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_URL: Self = Self([
        0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space ID for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_OID: Self = Self([
        0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Name space ID for X.500 DNs (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
    pub const NAMESPACE_X500: Self = Self([
        0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30,
        0xc8,
    ]);

    /// Packs 16 raw bytes and a 4-bit version tag into a UUID.
    ///
    /// The top nibble of byte 6 is replaced by `version` and the top two bits of byte 8 are
    /// replaced by the RFC 4122 variant `10`. The remaining 122 bits are taken verbatim from
    /// `raw`.
    ///
    /// # Panics
    ///
    /// Panics if `version` is not a 4-bit value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let uuid = Uuid::finalize([0xff; 16], 4);
    /// assert_eq!(uuid.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    /// ```
    pub const fn finalize(raw: [u8; 16], version: u8) -> Self {
        assert!(version < 0x10, "`version` must be a 4-bit value");

        let mut bytes = raw;
        bytes[6] = (raw[6] & 0x0f) | (version << 4);
        bytes[8] = (raw[8] & 0x3f) | 0x80;
        Self(bytes)
    }

    /// Packs a byte slice and a 4-bit version tag into a UUID.
    ///
    /// This is the slice counterpart of [`Uuid::finalize`] for raw material whose length is only
    /// known at run time, such as digest outputs.
    ///
    /// # Panics
    ///
    /// Panics if `raw` is not exactly 16 bytes long or if `version` is not a 4-bit value.
    pub fn finalize_slice(raw: &[u8], version: u8) -> Self {
        match <[u8; 16]>::try_from(raw) {
            Ok(bytes) => Self::finalize(bytes, version),
            Err(_) => panic!(
                "raw UUID material must be exactly 16 bytes, got {}",
                raw.len()
            ),
        }
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns the 16-byte binary layout: `time_low`, `time_mid`, `time_hi_and_version`,
    /// `clock_seq_hi_and_reserved`, `clock_seq_low`, and `node` in this order.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns the `time_low` field (bytes 0-3).
    pub const fn time_low(&self) -> [u8; 4] {
        [self.0[0], self.0[1], self.0[2], self.0[3]]
    }

    /// Returns the `time_mid` field (bytes 4-5).
    pub const fn time_mid(&self) -> [u8; 2] {
        [self.0[4], self.0[5]]
    }

    /// Returns the `time_hi_and_version` field (bytes 6-7).
    pub const fn time_hi_and_version(&self) -> [u8; 2] {
        [self.0[6], self.0[7]]
    }

    /// Returns the `clock_seq_hi_and_reserved` field (byte 8).
    pub const fn clock_seq_hi_and_reserved(&self) -> u8 {
        self.0[8]
    }

    /// Returns the `clock_seq_low` field (byte 9).
    pub const fn clock_seq_low(&self) -> u8 {
        self.0[9]
    }

    /// Returns the `node` field (bytes 10-15).
    pub const fn node(&self) -> [u8; 6] {
        [
            self.0[10], self.0[11], self.0[12], self.0[13], self.0[14], self.0[15],
        ]
    }

    /// Reports the variant field value of the UUID or, if appropriate, "Nil" or "Max".
    ///
    /// For convenience, this method reports [`Variant::VarNil`] or [`Variant::VarMax`] if `self`
    /// represents the Nil or Max UUID, although the Nil and Max UUIDs are technically subsumed
    /// under the variants `0b0` and `0b111`, respectively.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0b0000..=0b0111 => {
                if u128::from_be_bytes(self.0) == 0 {
                    Variant::VarNil
                } else {
                    Variant::Var0
                }
            }
            0b1000..=0b1011 => Variant::Var10,
            0b1100..=0b1101 => Variant::Var110,
            _ => {
                if u128::from_be_bytes(self.0) == u128::MAX {
                    Variant::VarMax
                } else {
                    Variant::VarReserved
                }
            }
        }
    }

    /// Returns the version field value of the UUID or `None` if `self` does not have the variant
    /// field value of `0b10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated string
    /// type that can be dereferenced as `str`.
    ///
    /// Hex digits are always lowercase. This method is primarily for `no_std` environments where
    /// heap-allocated string types are not readily available. Use the [`fmt::Display`] trait
    /// usually to get the canonical string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let x = Uuid::NAMESPACE_DNS.encode();
    /// assert_eq!(&x as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", x), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut r = 0;
        let mut w = 0;
        while r < 16 {
            let e = self.0[r] as usize;
            buffer[w] = DIGITS[e >> 4];
            buffer[w + 1] = DIGITS[e & 15];
            if r == 3 || r == 5 || r == 7 || r == 9 {
                buffer[w + 2] = b'-';
                w += 1;
            }
            r += 1;
            w += 2;
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: `buffer` holds hex digits and hyphens only
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

/// The reserved variants of UUIDs.
///
/// See [RFC 4122 §4.1.1](https://www.rfc-editor.org/rfc/rfc4122#section-4.1.1).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Variant {
    /// Nil UUID (00000000-0000-0000-0000-000000000000).
    VarNil,

    /// The variant field value of `0b0`, reserved for NCS backward compatibility.
    Var0,

    /// The variant field value of `0b10`, specified by RFC 4122.
    Var10,

    /// The variant field value of `0b110`, reserved for Microsoft backward compatibility.
    Var110,

    /// The variant field value of `0b111`, reserved for future definition.
    VarReserved,

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff).
    VarMax,
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::Uuid;

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::Uuid;
    use serde::Serializer;

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_ser_tokens, Configure, Token};

        /// Serializes prepared cases correctly
        #[test]
        fn serializes_prepared_cases_correctly() {
            let cases = [
                (
                    Uuid::NAMESPACE_DNS,
                    "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
                    &[
                        107, 167, 184, 16, 157, 173, 17, 209, 128, 180, 0, 192, 79, 212, 48, 200,
                    ],
                ),
                (
                    Uuid::finalize([0u8; 16], 3),
                    "00000000-0000-3000-8000-000000000000",
                    &[0, 0, 0, 0, 0, 0, 48, 0, 128, 0, 0, 0, 0, 0, 0, 0],
                ),
                (
                    Uuid::finalize([0xffu8; 16], 5),
                    "ffffffff-ffff-5fff-bfff-ffffffffffff",
                    &[
                        255, 255, 255, 255, 255, 255, 95, 255, 191, 255, 255, 255, 255, 255, 255,
                        255,
                    ],
                ),
            ];

            for (e, text, bytes) in cases {
                assert_ser_tokens(&e.readable(), &[Token::Str(text)]);
                assert_ser_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Uuid, Variant};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [(([u8; 16], u8), &'static str)] {
        &[
            (([0x00; 16], 4), "00000000-0000-4000-8000-000000000000"),
            (([0xff; 16], 4), "ffffffff-ffff-4fff-bfff-ffffffffffff"),
            (([0x00; 16], 3), "00000000-0000-3000-8000-000000000000"),
            (([0xff; 16], 5), "ffffffff-ffff-5fff-bfff-ffffffffffff"),
            (([0x00; 16], 0), "00000000-0000-0000-8000-000000000000"),
            (([0xff; 16], 15), "ffffffff-ffff-ffff-bfff-ffffffffffff"),
            (
                (
                    [
                        0x96, 0xe1, 0x7d, 0x7a, 0xac, 0x89, 0x18, 0xcf, 0x55, 0xe1, 0xbf, 0x50,
                        0x98, 0xda, 0x34, 0xe1,
                    ],
                    3,
                ),
                "96e17d7a-ac89-38cf-95e1-bf5098da34e1",
            ),
            (
                (
                    [
                        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef, 0xfe, 0xdc, 0xba, 0x98,
                        0x76, 0x54, 0x32, 0x10,
                    ],
                    4,
                ),
                "01234567-89ab-4def-bedc-ba9876543210",
            ),
        ]
    }

    /// Encodes prepared cases correctly
    #[test]
    fn encodes_prepared_cases_correctly() {
        for ((raw, version), text) in prepare_cases() {
            let e = Uuid::finalize(*raw, *version);
            assert_eq!(&e.encode() as &str, *text);
            #[cfg(feature = "std")]
            assert_eq!(&e.to_string(), text);
            #[cfg(feature = "std")]
            assert_eq!(&String::from(e), text);
            #[cfg(feature = "uuid")]
            assert_eq!(&uuid::Uuid::from(e).to_string(), text);
        }
    }

    /// Overwrites version and variant bits only
    #[test]
    fn overwrites_version_and_variant_bits_only() {
        use rand::RngCore;

        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let mut raw = [0u8; 16];
            rng.fill_bytes(&mut raw);
            for version in [3, 4, 5] {
                let bytes = Uuid::finalize(raw, version).to_bytes();
                for i in (0..6).chain(7..8).chain(9..16) {
                    assert_eq!(bytes[i], raw[i], "byte {}", i);
                }
                assert_eq!(bytes[6] >> 4, version);
                assert_eq!(bytes[6] & 0x0f, raw[6] & 0x0f);
                assert_eq!(bytes[8] >> 6, 0b10);
                assert_eq!(bytes[8] & 0x3f, raw[8] & 0x3f);
            }
        }
    }

    /// Accepts slices of exactly 16 bytes
    #[test]
    fn accepts_slices_of_exactly_16_bytes() {
        for ((raw, version), _) in prepare_cases() {
            assert_eq!(
                Uuid::finalize_slice(&raw[..], *version),
                Uuid::finalize(*raw, *version)
            );
        }
    }

    /// Rejects short raw material
    #[test]
    #[should_panic(expected = "exactly 16 bytes")]
    fn rejects_short_raw_material() {
        Uuid::finalize_slice(&[0u8; 15], 4);
    }

    /// Rejects long raw material
    #[test]
    #[should_panic(expected = "exactly 16 bytes")]
    fn rejects_long_raw_material() {
        Uuid::finalize_slice(&[0u8; 20], 5);
    }

    /// Rejects version tags wider than four bits
    #[test]
    #[should_panic(expected = "4-bit value")]
    fn rejects_version_tags_wider_than_four_bits() {
        Uuid::finalize([0u8; 16], 0x10);
    }

    /// Exposes fields at fixed offsets
    #[test]
    fn exposes_fields_at_fixed_offsets() {
        let e = Uuid::NAMESPACE_DNS;
        assert_eq!(e.time_low(), [0x6b, 0xa7, 0xb8, 0x10]);
        assert_eq!(e.time_mid(), [0x9d, 0xad]);
        assert_eq!(e.time_hi_and_version(), [0x11, 0xd1]);
        assert_eq!(e.clock_seq_hi_and_reserved(), 0x80);
        assert_eq!(e.clock_seq_low(), 0xb4);
        assert_eq!(e.node(), [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8]);

        for ((raw, version), _) in prepare_cases() {
            let e = Uuid::finalize(*raw, *version);
            let mut joined = [0u8; 16];
            joined[0..4].copy_from_slice(&e.time_low());
            joined[4..6].copy_from_slice(&e.time_mid());
            joined[6..8].copy_from_slice(&e.time_hi_and_version());
            joined[8] = e.clock_seq_hi_and_reserved();
            joined[9] = e.clock_seq_low();
            joined[10..16].copy_from_slice(&e.node());
            assert_eq!(joined, e.to_bytes());
            assert_eq!(&joined, e.as_bytes());
            assert_eq!(joined, <[u8; 16]>::from(e));
            assert_eq!(u128::from_be_bytes(joined), u128::from(e));
        }
    }

    /// Encodes identically on repeated calls
    #[test]
    fn encodes_identically_on_repeated_calls() {
        for ((raw, version), _) in prepare_cases() {
            let e = Uuid::finalize(*raw, *version);
            assert_eq!(&e.encode() as &str, &e.encode() as &str);
        }
    }

    /// Returns Nil UUID and RFC name space IDs
    #[test]
    fn returns_nil_uuid_and_rfc_name_space_ids() {
        let cases = [
            (Uuid::NIL, "00000000-0000-0000-0000-000000000000"),
            (Uuid::NAMESPACE_DNS, "6ba7b810-9dad-11d1-80b4-00c04fd430c8"),
            (Uuid::NAMESPACE_URL, "6ba7b811-9dad-11d1-80b4-00c04fd430c8"),
            (Uuid::NAMESPACE_OID, "6ba7b812-9dad-11d1-80b4-00c04fd430c8"),
            (Uuid::NAMESPACE_X500, "6ba7b814-9dad-11d1-80b4-00c04fd430c8"),
        ];

        for (e, text) in cases {
            assert_eq!(&e.encode() as &str, text);
        }
    }

    /// Reports variant and version
    #[test]
    fn reports_variant_and_version() {
        assert_eq!(Uuid::NIL.variant(), Variant::VarNil);
        assert_eq!(Uuid::NIL.version(), None);
        assert_eq!(Uuid::NAMESPACE_DNS.variant(), Variant::Var10);
        assert_eq!(Uuid::NAMESPACE_DNS.version(), Some(1));

        for ((raw, version), _) in prepare_cases() {
            let e = Uuid::finalize(*raw, *version);
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(*version));
        }
    }
}
