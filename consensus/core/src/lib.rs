pub mod block;
pub mod config;
pub mod errors;
pub mod hashing;
pub mod header;
pub mod merkle;
pub mod network;
pub mod script;
pub mod tx;

pub use config::{
    Config,
    registry::{ParamsRegistry, init_registry, params, select_params},
};
