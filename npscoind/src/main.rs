extern crate npscoin_consensus_core;
extern crate npscoin_core;

use std::process::exit;

use npscoin_consensus_core::{errors::registry::RegistryError, init_registry, network::NetworkType};
use npscoin_core::{error, info};
use npscoind_lib::{
    args::parse_args,
    daemon::{Runtime, validate_args},
};

pub fn main() {
    let args = parse_args();

    let network_name = match validate_args(&args) {
        Ok(name) => name,
        Err(err) => {
            eprintln!("{err}");
            exit(1);
        }
    };
    let net = match network_name.parse::<NetworkType>() {
        Ok(net) => net,
        Err(err) => {
            eprintln!("{}", RegistryError::from(err));
            exit(1);
        }
    };

    let runtime = Runtime::from_args(&args, net);
    if let Some(log_dir) = runtime.log_dir() {
        info!("Logging to {}", log_dir.display());
    }

    let registry = match init_registry() {
        Ok(registry) => registry,
        Err(err) => {
            error!("{err}");
            exit(1);
        }
    };
    let config = match registry.select(net) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}");
            exit(1);
        }
    };

    let prefixes = net.base58_prefixes();
    info!("NPSCoin node v{} on the {} network", env!("CARGO_PKG_VERSION"), net);
    info!("Genesis block {} (merkle root {})", config.genesis_hash(), config.genesis_block.header.hash_merkle_root);
    info!("Message start {}, default port {}", faster_hex::hex_string(&net.magic()), net.default_p2p_port());
    info!(
        "Base58 prefixes: pubkey {}, script {}, secret {}",
        prefixes.pubkey_address, prefixes.script_address, prefixes.secret_key
    );
    if let Some(last) = config.checkpoints.last_checkpoint() {
        info!("{} checkpoints, last at height {} ({})", config.checkpoints.checkpoints.len(), last.height, last.hash);
    }
    for (id, deployment) in config.deployments.iter() {
        info!("Deployment {} on bit {}, start {}, timeout {}", id, deployment.bit, deployment.start_time, deployment.timeout);
    }
}
