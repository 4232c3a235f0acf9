use crate::errors::config::{ConfigError, ConfigResult};
use npscoin_hashes::Hash;

/// A hard-coded block anchor. A chain with a different block at `height` is invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint {
    pub height: u64,
    pub hash: Hash,
}

impl Checkpoint {
    pub const fn new(height: u64, hash: Hash) -> Self {
        Self { height, hash }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheckpointData {
    /// Ordered by strictly increasing height, starting with the genesis block
    pub checkpoints: &'static [Checkpoint],
    /// UNIX timestamp of the last checkpoint block
    pub last_checkpoint_time: u64,
    /// Total number of transactions between genesis and the last checkpoint
    pub total_transactions: u64,
    /// Estimated number of transactions per day after the last checkpoint. Only used
    /// to estimate sync progress
    pub transactions_per_day: f64,
}

impl CheckpointData {
    /// Returns the expected hash at `height`, if a checkpoint exists there
    pub fn lookup(&self, height: u64) -> Option<Hash> {
        self.checkpoints.binary_search_by_key(&height, |checkpoint| checkpoint.height).ok().map(|i| self.checkpoints[i].hash)
    }

    /// Returns `false` only when a checkpoint exists at `height` and disagrees with `hash`
    pub fn check(&self, height: u64, hash: Hash) -> bool {
        self.lookup(height).is_none_or(|expected| expected == hash)
    }

    pub fn last_checkpoint(&self) -> Option<&Checkpoint> {
        self.checkpoints.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Checkpoint> {
        self.checkpoints.iter()
    }

    pub fn validate(&self, genesis_hash: Hash) -> ConfigResult<()> {
        let first = self.checkpoints.first().ok_or(ConfigError::EmptyCheckpoints)?;
        if first.height != 0 {
            return Err(ConfigError::MissingGenesisCheckpoint(first.height));
        }
        if first.hash != genesis_hash {
            return Err(ConfigError::GenesisCheckpointMismatch { expected: genesis_hash, found: first.hash });
        }
        for pair in self.checkpoints.windows(2) {
            if pair[1].height <= pair[0].height {
                return Err(ConfigError::CheckpointsNotIncreasing { previous: pair[0].height, height: pair[1].height });
            }
        }
        Ok(())
    }
}
