pub mod consensus {
    //!
    //! A module for constants which directly impact consensus.
    //!

    /// The number of base units (duffs) in one coin
    pub const COIN: u64 = 100_000_000;

    /// Size of a serialized legacy block header in bytes
    pub const BLOCK_HEADER_SIZE: usize = 80;

    /// Sequence value which leaves an input unconstrained by relative lock time
    pub const SEQUENCE_FINAL: u32 = u32::MAX;

    /// Output index marking the null (coinbase) outpoint
    pub const NULL_OUTPOINT_INDEX: u32 = u32::MAX;
}

pub mod versionbits {
    //!
    //! Version bits signalling layout (BIP9).
    //!

    /// Number of bits usable for signalling within a block version
    pub const VERSIONBITS_NUM_BITS: u8 = 29;

    /// The top bits a versionbits block version must carry
    pub const VERSIONBITS_TOP_BITS: i32 = 0x20000000;

    /// Mask over the top bits of a version, used to recognize versionbits blocks
    pub const VERSIONBITS_TOP_MASK: i32 = 0xE0000000u32 as i32;
}
