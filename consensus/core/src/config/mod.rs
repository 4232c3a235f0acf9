pub mod checkpoints;
pub mod constants;
pub mod deployments;
pub mod genesis;
pub mod params;
pub mod registry;

use crate::{block::Block, errors::config::ConfigResult, network::NetworkType};
use npscoin_core::debug;
use npscoin_hashes::{Hash, Hasher};
use params::Params;
use std::ops::Deref;

/// Verified parameters of a network: the literal [`Params`] plus the genesis block built
/// from them, checked against the hard-coded genesis commitments. NOTE: this struct can be
/// implicitly de-refed into `Params`
#[derive(Clone, Debug)]
pub struct Config {
    /// Consensus params
    pub params: Params,
    /// The genesis block as built on this node
    pub genesis_block: Block,
}

impl Config {
    /// Builds and verifies the parameters of `net`
    pub fn build(net: NetworkType) -> ConfigResult<Self> {
        Self::new(Params::from(net))
    }

    pub fn new(params: Params) -> ConfigResult<Self> {
        let genesis_block = params.genesis.build_verified()?;
        debug!("Verified {} genesis block {} (merkle root {})", params.net, params.genesis.hash, genesis_block.header.hash_merkle_root);
        params.validate(params.genesis.hash)?;
        Ok(Self { params, genesis_block })
    }

    /// The recorded hash of the genesis block
    pub fn genesis_hash(&self) -> Hash {
        self.params.genesis.hash
    }

    /// Checks the genesis header against the recorded hash with the network's
    /// header commitment hasher `H`
    pub fn verify_genesis_hash<H: Hasher>(&self) -> ConfigResult<()> {
        Ok(self.params.genesis.verify_hash::<H>(&self.genesis_block)?)
    }
}

impl AsRef<Params> for Config {
    fn as_ref(&self) -> &Params {
        &self.params
    }
}

impl Deref for Config {
    type Target = Params;

    fn deref(&self) -> &Self::Target {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{config::ConfigError, genesis::GenesisError};
    use npscoin_hashes::TransactionHash;
    use params::{MAINNET_PARAMS, REGTEST_PARAMS};

    #[test]
    fn test_build_all_networks() {
        for net in NetworkType::iter() {
            let config = Config::build(net).unwrap();
            assert_eq!(config.net, net);
            assert_eq!(config.genesis_hash(), config.genesis.hash);
            assert_eq!(config.checkpoints.lookup(0), Some(config.genesis_hash()));
        }
    }

    #[test]
    fn test_corrupted_genesis_is_rejected() {
        let mut params = MAINNET_PARAMS;
        params.genesis.reward += 1;
        assert!(matches!(Config::new(params), Err(ConfigError::Genesis(GenesisError::MerkleRootMismatch { .. }))));

        let mut params = MAINNET_PARAMS;
        params.genesis.bits = 0x1d00ffff;
        assert!(matches!(Config::new(params), Err(ConfigError::Genesis(GenesisError::HashAboveTarget { .. }))));

        // The genesis block verifies but its target exceeds the lowered limit
        let mut params = REGTEST_PARAMS;
        params.pow_limit = MAINNET_PARAMS.pow_limit;
        assert_eq!(Config::new(params).unwrap_err(), ConfigError::GenesisTargetAbovePowLimit(0x207fffff));
    }

    #[test]
    fn test_verify_genesis_hash() {
        let config = Config::build(NetworkType::Regtest).unwrap();
        assert!(matches!(config.verify_genesis_hash::<TransactionHash>(), Err(ConfigError::Genesis(GenesisError::HashMismatch { .. }))));
        assert_eq!(config.genesis_hash(), REGTEST_PARAMS.genesis.hash);
    }
}
