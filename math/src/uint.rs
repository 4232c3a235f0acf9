#[doc(hidden)]
pub use faster_hex;

#[macro_export]
macro_rules! construct_uint {
    ($name:ident, $n_words:literal $(, $derive_trait:ty)*) => {
        /// Little-endian large integer type
        #[derive(Copy, Clone, PartialEq, Eq, Hash, Debug$(, $derive_trait )*)]
        pub struct $name(pub [u64; $n_words]);
        #[allow(unused)]
        impl $name {
            pub const ZERO: Self = $name([0; $n_words]);
            pub const MAX: Self = $name([u64::MAX; $n_words]);
            pub const BITS: u32 = $n_words * u64::BITS;
            pub const BYTES: usize = $n_words * core::mem::size_of::<u64>();
            pub const LIMBS: usize = $n_words;

            #[inline]
            pub const fn from_u64(n: u64) -> Self {
                let mut ret = Self::ZERO;
                ret.0[0] = n;
                ret
            }

            #[inline]
            pub fn as_u64(self) -> u64 {
                self.0[0]
            }

            #[inline(always)]
            pub fn is_zero(self) -> bool {
                self.0.iter().all(|&a| a == 0)
            }

            /// Return the least number of bits needed to represent the number
            #[inline(always)]
            pub fn bits(&self) -> u32 {
                for (i, &word) in self.0.iter().enumerate().rev() {
                    if word != 0 {
                        return u64::BITS * (i as u32 + 1) - word.leading_zeros();
                    }
                }
                0
            }

            #[inline]
            pub fn overflowing_shl(self, mut s: u32) -> (Self, bool) {
                let overflows = s >= Self::BITS;
                s %= Self::BITS;
                let mut ret = [0u64; $n_words];
                let left_words = (s / 64) as usize;
                let left_shifts = s % 64;

                for i in left_words..$n_words {
                    ret[i] = self.0[i - left_words] << left_shifts;
                }
                if left_shifts > 0 {
                    let left_over = 64 - left_shifts;
                    for i in left_words + 1..$n_words {
                        ret[i] |= self.0[i - 1 - left_words] >> left_over;
                    }
                }
                (Self(ret), overflows)
            }

            #[inline]
            pub fn wrapping_shl(self, s: u32) -> Self {
                self.overflowing_shl(s).0
            }

            #[inline]
            pub fn overflowing_shr(self, mut s: u32) -> (Self, bool) {
                let overflows = s >= Self::BITS;
                s %= Self::BITS;
                let mut ret = [0u64; Self::LIMBS];
                let right_words = (s / 64) as usize;
                let right_shifts = s % 64;

                for i in right_words..Self::LIMBS {
                    ret[i - right_words] = self.0[i] >> right_shifts;
                }
                if right_shifts > 0 {
                    let left_over = 64 - right_shifts;
                    for i in right_words + 1..Self::LIMBS {
                        ret[i - right_words - 1] |= self.0[i] << left_over;
                    }
                }
                (Self(ret), overflows)
            }

            /// Creates big integer value from a byte array using
            /// little-endian encoding
            #[inline(always)]
            pub const fn from_le_bytes(bytes: [u8; Self::BYTES]) -> Self {
                let mut out = [0u64; $n_words];
                let mut i = 0;
                while i < $n_words {
                    let mut word = 0u64;
                    let mut j = 8;
                    while j > 0 {
                        j -= 1;
                        word = (word << 8) | bytes[i * 8 + j] as u64;
                    }
                    out[i] = word;
                    i += 1;
                }
                Self(out)
            }

            /// Creates big integer value from a byte array using
            /// big-endian encoding. Usable in constant expressions.
            #[inline(always)]
            pub const fn from_be_bytes(bytes: [u8; Self::BYTES]) -> Self {
                let mut out = [0u64; $n_words];
                let mut i = 0;
                while i < $n_words {
                    let mut word = 0u64;
                    let mut j = 0;
                    while j < 8 {
                        word = (word << 8) | bytes[i * 8 + j] as u64;
                        j += 1;
                    }
                    out[$n_words - 1 - i] = word;
                    i += 1;
                }
                Self(out)
            }

            /// Converts the Uint into a little endian byte array
            #[inline(always)]
            pub fn to_le_bytes(self) -> [u8; Self::BYTES] {
                let mut out = [0u8; Self::BYTES];
                out.chunks_exact_mut(8).zip(self.0).for_each(|(bytes, word)| bytes.copy_from_slice(&word.to_le_bytes()));
                out
            }

            /// Converts the Uint into a big endian byte array
            #[inline(always)]
            pub fn to_be_bytes(self) -> [u8; Self::BYTES] {
                let mut out = [0u8; Self::BYTES];
                out.chunks_exact_mut(8)
                    .zip(self.0.into_iter().rev())
                    .for_each(|(bytes, word)| bytes.copy_from_slice(&word.to_be_bytes()));
                out
            }

            /// Converts a hex string of at most Self::BYTES*2 digits, interpreted as big endian, into a Uint.
            /// Shorter strings are left-padded with zeros.
            #[inline]
            pub fn from_hex(hex: &str) -> Result<Self, $crate::uint::faster_hex::Error> {
                let hex = hex.strip_prefix("0x").unwrap_or(hex);
                if hex.len() > Self::BYTES * 2 {
                    return Err($crate::uint::faster_hex::Error::InvalidLength(hex.len()));
                }
                let mut out = [0u8; Self::BYTES];
                let mut input = [b'0'; Self::BYTES * 2];
                let start = input.len() - hex.len();
                input[start..].copy_from_slice(hex.as_bytes());
                $crate::uint::faster_hex::hex_decode(&input, &mut out)?;
                Ok(Self::from_be_bytes(out))
            }
        }

        impl PartialOrd for $name {
            #[inline]
            fn partial_cmp(&self, other: &$name) -> Option<core::cmp::Ordering> {
                Some(self.cmp(&other))
            }
        }

        impl Ord for $name {
            #[inline]
            fn cmp(&self, other: &$name) -> core::cmp::Ordering {
                // Limbs are little-endian, so compare from the most significant one down
                Iterator::cmp(self.0.iter().rev(), other.0.iter().rev())
            }
        }

        impl core::ops::Shl<u32> for $name {
            type Output = $name;

            #[inline]
            #[track_caller]
            fn shl(self, shift: u32) -> $name {
                let (res, carry) = self.overflowing_shl(shift);
                debug_assert!(!carry, "attempt to shift left with overflow");
                res
            }
        }

        impl core::ops::Shr<u32> for $name {
            type Output = $name;

            #[inline]
            #[track_caller]
            fn shr(self, shift: u32) -> $name {
                let (res, carry) = self.overflowing_shr(shift);
                debug_assert!(!carry, "attempt to shift right with overflow");
                res
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::ZERO
            }
        }

        impl From<u64> for $name {
            #[inline]
            fn from(x: u64) -> Self {
                Self::from_u64(x)
            }
        }

        impl core::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                core::fmt::LowerHex::fmt(self, f)
            }
        }

        impl core::fmt::LowerHex for $name {
            #[inline]
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                let mut hex = [0u8; Self::BYTES * 2];
                let bytes = self.to_be_bytes();
                let encoded = $crate::uint::faster_hex::hex_encode(&bytes, &mut hex).map_err(|_| core::fmt::Error)?;
                let first_non_zero = encoded.bytes().position(|x| x != b'0').unwrap_or(encoded.len() - 1);
                f.pad_integral(true, "0x", &encoded[first_non_zero..])
            }
        }
    };
}

#[cfg(test)]
mod tests {
    construct_uint!(Uint128, 2);

    #[test]
    fn test_matches_native_u128() {
        let samples = [0u128, 1, 0xffff, u64::MAX as u128, (u64::MAX as u128) + 1, 0x0123_4567_89ab_cdef_fedc_ba98_7654_3210, u128::MAX];
        for &native in samples.iter() {
            let mine = Uint128::from_le_bytes(native.to_le_bytes());
            assert_eq!(mine, Uint128::from_be_bytes(native.to_be_bytes()));
            assert_eq!(mine.to_le_bytes(), native.to_le_bytes());
            assert_eq!(mine.to_be_bytes(), native.to_be_bytes());
            assert_eq!(mine.bits(), u128::BITS - native.leading_zeros());
            assert_eq!(format!("{mine:x}"), format!("{native:x}"));
            assert_eq!(format!("{mine:#034x}"), format!("{native:#034x}"));
            assert_eq!(mine.to_string(), format!("{native:x}"));
            assert_eq!(Uint128::from_hex(&format!("{native:x}")).unwrap(), mine);
            for shift in [0u32, 1, 7, 63, 64, 65, 127] {
                assert_eq!(mine.wrapping_shl(shift).to_le_bytes(), (native << shift).to_le_bytes());
                assert_eq!(mine.overflowing_shr(shift).0.to_le_bytes(), (native >> shift).to_le_bytes());
            }
        }
    }

    #[test]
    fn test_ordering_uses_most_significant_limb() {
        let low = Uint128([u64::MAX, 0]);
        let high = Uint128([0, 1]);
        assert!(low < high);
        assert_eq!(Uint128::ZERO.cmp(&Uint128::default()), core::cmp::Ordering::Equal);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Uint128::from_hex(&"f".repeat(33)).is_err());
        assert!(Uint128::from_hex("zz").is_err());
        assert_eq!(Uint128::from_hex("0x10").unwrap(), Uint128::from_u64(16));
    }
}
