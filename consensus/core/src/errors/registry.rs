use super::config::ConfigError;
use crate::network::{NetworkType, NetworkTypeError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    #[error("Unknown chain: {0}")]
    UnknownNetwork(String),

    #[error("network parameters were requested before a network was selected")]
    NotSelected,

    #[error("network {current} is already selected, cannot switch to {requested}")]
    AlreadySelected { current: NetworkType, requested: NetworkType },

    #[error("{0} network parameters: {1}")]
    Config(NetworkType, #[source] ConfigError),
}

impl From<NetworkTypeError> for RegistryError {
    fn from(err: NetworkTypeError) -> Self {
        match err {
            NetworkTypeError::InvalidNetworkType(name) => RegistryError::UnknownNetwork(name),
        }
    }
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
