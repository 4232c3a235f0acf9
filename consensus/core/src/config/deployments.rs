//! Soft-fork deployments signalled through block version bits (BIP9).
//!
//! Each network assigns every known deployment a bit, a signalling start time and a
//! timeout. The activation state machine itself lives with block validation; this
//! module only carries the per-network schedule and checks it for consistency.

use super::constants::versionbits::{VERSIONBITS_NUM_BITS, VERSIONBITS_TOP_BITS, VERSIONBITS_TOP_MASK};
use crate::errors::config::{ConfigError, ConfigResult};
use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeploymentId {
    TestDummy,
    /// Deployment of BIP68, BIP112, and BIP113
    Csv,
    /// Deployment of DIP0001 (larger blocks, lower fees)
    Dip0001,
}

impl DeploymentId {
    pub const COUNT: usize = 3;

    pub const fn name(&self) -> &'static str {
        match self {
            DeploymentId::TestDummy => "testdummy",
            DeploymentId::Csv => "csv",
            DeploymentId::Dip0001 => "dip0001",
        }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        static DEPLOYMENT_IDS: [DeploymentId; DeploymentId::COUNT] = [DeploymentId::TestDummy, DeploymentId::Csv, DeploymentId::Dip0001];
        DEPLOYMENT_IDS.iter().copied()
    }
}

impl Display for DeploymentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Start time meaning "signalling since the beginning of the chain"
pub const ALWAYS_ACTIVE_START: i64 = 0;

/// Timeout far enough in the future to never be reached
pub const NO_TIMEOUT: i64 = 999_999_999_999;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deployment {
    /// Bit position to select the particular bit in the block version
    pub bit: u8,
    /// Start MedianTime for version bits miner confirmation. Can be a date in the past
    pub start_time: i64,
    /// Timeout/expiry MedianTime for the deployment attempt
    pub timeout: i64,
    /// The number of past blocks (including the block under consideration) to be taken into account
    /// for locking in a fork. Falls back to the network's miner confirmation window when absent
    pub window_size: Option<u32>,
    /// A number of blocks, in the range of 1..window_size, which must signal for a fork in order
    /// to lock it in. Falls back to the network's rule change activation threshold when absent
    pub threshold: Option<u32>,
}

impl Deployment {
    pub const fn new(bit: u8, start_time: i64, timeout: i64) -> Self {
        Self { bit, start_time, timeout, window_size: None, threshold: None }
    }

    pub const fn with_window(self, window_size: u32, threshold: u32) -> Self {
        Self { window_size: Some(window_size), threshold: Some(threshold), ..self }
    }

    /// A deployment which may signal from genesis on and never times out
    pub const fn always_active(bit: u8) -> Self {
        Self::new(bit, ALWAYS_ACTIVE_START, NO_TIMEOUT)
    }

    /// A deployment scheduled to start only once the timeout sentinel is reached
    pub const fn never_active(bit: u8) -> Self {
        Self::new(bit, NO_TIMEOUT, NO_TIMEOUT)
    }

    pub fn is_always_active(&self) -> bool {
        self.start_time == ALWAYS_ACTIVE_START && self.timeout == NO_TIMEOUT
    }

    pub fn is_never_active(&self) -> bool {
        self.start_time == NO_TIMEOUT && self.timeout == NO_TIMEOUT
    }

    /// The version bit this deployment signals on
    pub fn mask(&self) -> u32 {
        1u32 << self.bit
    }

    /// Whether a block with this version signals for the deployment
    pub fn is_signalled_by(&self, version: i32) -> bool {
        (version & VERSIONBITS_TOP_MASK) == VERSIONBITS_TOP_BITS && (version as u32 & self.mask()) != 0
    }

    pub fn effective_window(&self, default_window: u32) -> u32 {
        self.window_size.unwrap_or(default_window)
    }

    pub fn effective_threshold(&self, default_threshold: u32) -> u32 {
        self.threshold.unwrap_or(default_threshold)
    }
}

/// Deployment schedule of a network, indexed by [`DeploymentId`]. `None` marks a
/// deployment which is not deployed on the network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeploymentTable([Option<Deployment>; DeploymentId::COUNT]);

impl DeploymentTable {
    pub const fn new(test_dummy: Option<Deployment>, csv: Option<Deployment>, dip0001: Option<Deployment>) -> Self {
        Self([test_dummy, csv, dip0001])
    }

    pub fn get(&self, id: DeploymentId) -> Option<&Deployment> {
        self.0[id as usize].as_ref()
    }

    /// Iterates the deployments of the network, skipping undeployed ones
    pub fn iter(&self) -> impl Iterator<Item = (DeploymentId, &Deployment)> {
        DeploymentId::iter().filter_map(|id| self.get(id).map(|deployment| (id, deployment)))
    }

    pub fn validate(&self, default_window: u32, default_threshold: u32) -> ConfigResult<()> {
        let mut bit_owners: [Option<DeploymentId>; VERSIONBITS_NUM_BITS as usize] = [None; VERSIONBITS_NUM_BITS as usize];
        for (id, deployment) in self.iter() {
            if deployment.bit >= VERSIONBITS_NUM_BITS {
                return Err(ConfigError::InvalidDeploymentBit { deployment: id, bit: deployment.bit });
            }
            if let Some(first) = bit_owners[deployment.bit as usize].replace(id) {
                return Err(ConfigError::DuplicateDeploymentBit { bit: deployment.bit, first, second: id });
            }
            if !deployment.is_never_active() && deployment.start_time >= deployment.timeout {
                return Err(ConfigError::InvalidDeploymentWindow {
                    deployment: id,
                    start_time: deployment.start_time,
                    timeout: deployment.timeout,
                });
            }
            let window = deployment.effective_window(default_window);
            let threshold = deployment.effective_threshold(default_threshold);
            if threshold > window {
                return Err(ConfigError::DeploymentThresholdExceedsWindow { deployment: id, threshold, window });
            }
        }
        Ok(())
    }
}
