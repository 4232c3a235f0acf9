pub mod uint;

construct_uint!(Uint256, 4);

impl Uint256 {
    /// Decodes the compact ("nBits") difficulty representation into a full target.
    /// The encoding is a base-256 float: the top byte is the length in bytes, the
    /// low 23 bits the mantissa and bit 23 the sign. Returns `None` for negative
    /// encodings and for encodings whose value does not fit in 256 bits.
    #[inline]
    pub fn try_from_compact_target_bits(bits: u32) -> Option<Self> {
        let size = bits >> 24;
        let word = bits & 0x007fffff;
        if word == 0 {
            return Some(Uint256::ZERO);
        }
        let negative = bits & 0x00800000 != 0;
        let overflow = size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32);
        if negative || overflow {
            return None;
        }
        if size <= 3 {
            Some(Uint256::from_u64((word >> (8 * (3 - size))) as u64))
        } else {
            Some(Uint256::from_u64(word as u64) << (8 * (size - 3)))
        }
    }

    /// Like [`Self::try_from_compact_target_bits`], with invalid encodings decoding to zero,
    /// a target no hash can meet.
    #[inline]
    pub fn from_compact_target_bits(bits: u32) -> Self {
        Self::try_from_compact_target_bits(bits).unwrap_or(Uint256::ZERO)
    }

    /// Encodes the target into its compact ("nBits") representation.
    #[inline]
    pub fn compact_target_bits(self) -> u32 {
        let mut size = self.bits().div_ceil(8);
        let mut compact = if size <= 3 { (self.as_u64() << (8 * (3 - size))) as u32 } else { (self >> (8 * (size - 3))).as_u64() as u32 };

        if (compact & 0x00800000) != 0 {
            compact >>= 8;
            size += 1;
        }
        compact | (size << 24)
    }
}

impl From<npscoin_hashes::Hash> for Uint256 {
    fn from(hash: npscoin_hashes::Hash) -> Self {
        Uint256::from_le_bytes(hash.as_bytes())
    }
}

impl From<Uint256> for npscoin_hashes::Hash {
    fn from(value: Uint256) -> Self {
        npscoin_hashes::Hash::from_bytes(value.to_le_bytes())
    }
}
