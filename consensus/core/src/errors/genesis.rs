use npscoin_hashes::Hash;
use thiserror::Error;

/// The genesis block built from its inputs does not match the hard-coded commitments.
/// This means the binary is internally inconsistent and must not run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenesisError {
    #[error("genesis block hash mismatch: expected {expected}, computed {computed}")]
    HashMismatch { expected: Hash, computed: Hash },

    #[error("genesis merkle root mismatch: expected {expected}, computed {computed}")]
    MerkleRootMismatch { expected: Hash, computed: Hash },

    #[error("genesis bits {0:#010x} do not encode a valid target")]
    InvalidBits(u32),

    #[error("genesis block hash {hash} does not meet the target of bits {bits:#010x}")]
    HashAboveTarget { hash: Hash, bits: u32 },
}

pub type GenesisResult<T> = std::result::Result<T, GenesisError>;
