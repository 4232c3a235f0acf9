use crate::hashing;
use npscoin_hashes::{Hash, Hasher};
use npscoin_math::Uint256;

/// A legacy 80-byte block header.
///
/// The header commitment hash is network specific and is supplied by the caller
/// through [`Hasher`], see [`Header::hash`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Header {
    pub version: i32,
    pub hash_prev_block: Hash,
    pub hash_merkle_root: Hash,
    /// Timestamp in seconds
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl Header {
    pub fn new(version: i32, hash_prev_block: Hash, hash_merkle_root: Hash, time: u32, bits: u32, nonce: u32) -> Self {
        Self { version, hash_prev_block, hash_merkle_root, time, bits, nonce }
    }

    /// Hashes the 80-byte serialization with the header commitment hasher `H`
    pub fn hash<H: Hasher>(&self) -> Hash {
        hashing::header::hash::<H>(self)
    }

    /// The target a header hash must not exceed, decoded from `bits`. `None` if
    /// `bits` is negative or overflows.
    pub fn target(&self) -> Option<Uint256> {
        Uint256::try_from_compact_target_bits(self.bits)
    }

    /// Whether `hash` satisfies the target claimed by the header
    pub fn meets_target(&self, hash: Hash) -> bool {
        self.target().is_some_and(|target| Uint256::from(hash) <= target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use npscoin_hashes::{TransactionHash, ZERO_HASH};
    use std::str::FromStr;

    #[test]
    fn test_hash_follows_fields() {
        let mut header = Header::new(1, ZERO_HASH, ZERO_HASH, 1, 0x207fffff, 0);
        let hash = header.hash::<TransactionHash>();
        header.nonce += 1;
        assert_ne!(hash, header.hash::<TransactionHash>());
        header.nonce -= 1;
        assert_eq!(hash, header.hash::<TransactionHash>());
    }

    #[test]
    fn test_target() {
        let header = Header::new(1, ZERO_HASH, ZERO_HASH, 1, 0x1e0ffff0, 0);
        assert_eq!(header.target(), Some(Uint256::from_hex(&format!("0ffff0{}", "0".repeat(54))).unwrap()));

        let within = Hash::from_str("00000b72cc1c26003ab8060e62a8eb98684c275d1cd989a2c9af3f9676a3f621").unwrap();
        let above = Hash::from_str("00001000cc1c26003ab8060e62a8eb98684c275d1cd989a2c9af3f9676a3f621").unwrap();
        assert!(header.meets_target(within));
        assert!(!header.meets_target(above));

        let overflowing = Header { bits: 0x23000001, ..header };
        assert_eq!(overflowing.target(), None);
        assert!(!overflowing.meets_target(ZERO_HASH));
    }
}
