//! The process-wide set of network parameters and the selection of the active one.
//!
//! [`ParamsRegistry`] builds and verifies the parameters of every known network once.
//! Exactly one network can then be selected: the first selection wins, selecting the
//! same network again is a no-op and selecting a different one fails. Readers never
//! block, and the selected [`Config`] is immutable.

use super::Config;
use crate::{
    errors::registry::{RegistryError, RegistryResult},
    network::NetworkType,
};
use npscoin_core::info;
use once_cell::sync::OnceCell;

pub struct ParamsRegistry {
    /// Indexed by [`NetworkType::index`]
    configs: Vec<Config>,
    selected: OnceCell<NetworkType>,
}

impl ParamsRegistry {
    /// Builds the parameters of all networks, verifying every genesis block. Any
    /// failure means the binary is inconsistent and must not run.
    pub fn new() -> RegistryResult<Self> {
        let configs = NetworkType::iter()
            .map(|net| Config::build(net).map_err(|err| RegistryError::Config(net, err)))
            .collect::<RegistryResult<Vec<_>>>()?;
        Ok(Self { configs, selected: OnceCell::new() })
    }

    pub fn get(&self, net: NetworkType) -> &Config {
        &self.configs[net.index()]
    }

    /// Looks up the parameters of a network by its configuration name
    pub fn lookup(&self, name: &str) -> RegistryResult<&Config> {
        Ok(self.get(name.parse()?))
    }

    /// Designates `net` as the network of this process
    pub fn select(&self, net: NetworkType) -> RegistryResult<&Config> {
        let current = *self.selected.get_or_init(|| {
            info!("Using {} network parameters", net);
            net
        });
        if current != net {
            return Err(RegistryError::AlreadySelected { current, requested: net });
        }
        Ok(self.get(net))
    }

    pub fn select_by_name(&self, name: &str) -> RegistryResult<&Config> {
        self.select(name.parse()?)
    }

    pub fn selected(&self) -> Option<NetworkType> {
        self.selected.get().copied()
    }

    /// Returns the parameters of the selected network
    pub fn current(&self) -> RegistryResult<&Config> {
        self.selected().map(|net| self.get(net)).ok_or(RegistryError::NotSelected)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Config> {
        self.configs.iter()
    }
}

static REGISTRY: OnceCell<ParamsRegistry> = OnceCell::new();

/// Builds the process-wide registry on first use and returns it
pub fn init_registry() -> RegistryResult<&'static ParamsRegistry> {
    REGISTRY.get_or_try_init(ParamsRegistry::new)
}

/// Selects the network of the process by its configuration name
pub fn select_params(name: &str) -> RegistryResult<&'static Config> {
    init_registry()?.select_by_name(name)
}

/// Returns the parameters of the network selected for the process
pub fn params() -> RegistryResult<&'static Config> {
    REGISTRY.get().ok_or(RegistryError::NotSelected)?.current()
}
