use super::genesis::GenesisError;
use crate::config::deployments::DeploymentId;
use npscoin_hashes::Hash;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Configuration: --logdir and --nologfiles cannot be used together")]
    MixedLogDirAndNoLogFiles,

    #[error("Configuration: only one of --testnet, --regtest and --chain can be used")]
    MixedNetworkFlags,

    #[error(transparent)]
    Genesis(#[from] GenesisError),

    #[error("genesis bits {0:#010x} do not encode a valid target")]
    InvalidGenesisBits(u32),

    #[error("genesis bits {0:#010x} encode a target above the proof of work limit")]
    GenesisTargetAbovePowLimit(u32),

    #[error("rule change activation threshold {threshold} exceeds the miner confirmation window {window}")]
    ThresholdExceedsWindow { threshold: u32, window: u32 },

    #[error("deployment {deployment} uses bit {bit} outside of the versionbits signalling range")]
    InvalidDeploymentBit { deployment: DeploymentId, bit: u8 },

    #[error("deployments {first} and {second} both signal on bit {bit}")]
    DuplicateDeploymentBit { bit: u8, first: DeploymentId, second: DeploymentId },

    #[error("deployment {deployment} start time {start_time} is not before its timeout {timeout}")]
    InvalidDeploymentWindow { deployment: DeploymentId, start_time: i64, timeout: i64 },

    #[error("deployment {deployment} threshold {threshold} exceeds its window {window}")]
    DeploymentThresholdExceedsWindow { deployment: DeploymentId, threshold: u32, window: u32 },

    #[error("checkpoint table is empty")]
    EmptyCheckpoints,

    #[error("checkpoint table must start at height 0, found {0}")]
    MissingGenesisCheckpoint(u64),

    #[error("checkpoint at height 0 is {found}, expected the genesis hash {expected}")]
    GenesisCheckpointMismatch { expected: Hash, found: Hash },

    #[error("checkpoint heights must strictly increase: {height} follows {previous}")]
    CheckpointsNotIncreasing { previous: u64, height: u64 },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
