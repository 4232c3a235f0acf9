use std::path::PathBuf;

use npscoin_consensus_core::{
    errors::config::{ConfigError, ConfigResult},
    network::NetworkType,
};

use crate::args::Args;

const DEFAULT_LOG_DIR: &str = "logs";

fn get_home_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    return dirs::data_local_dir().unwrap_or_default();
    #[cfg(not(target_os = "windows"))]
    return dirs::home_dir().unwrap_or_default();
}

/// Get the default application directory.
pub fn get_app_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    return get_home_dir().join("NPSCoin");
    #[cfg(not(target_os = "windows"))]
    return get_home_dir().join(".npscoin");
}

fn expand_home(path: &str) -> String {
    path.replace('~', &get_home_dir().to_string_lossy())
}

/// Checks that the supplied arguments do not contradict each other and returns
/// the configuration name of the requested network.
pub fn validate_args(args: &Args) -> ConfigResult<String> {
    if args.logdir.is_some() && args.no_log_files {
        return Err(ConfigError::MixedLogDirAndNoLogFiles);
    }
    args.network_name()
}

/// Get the application directory from the supplied [`Args`].
pub fn get_app_dir_from_args(args: &Args) -> PathBuf {
    match args.appdir.as_deref().map(expand_home) {
        Some(app_dir) if !app_dir.is_empty() => PathBuf::from(app_dir),
        _ => get_app_dir(),
    }
}

/// Get the log directory from the supplied [`Args`]. Returns `None` when file logging is disabled.
pub fn get_log_dir(args: &Args, net: NetworkType) -> Option<PathBuf> {
    if args.no_log_files {
        return None;
    }

    // Logs directory is usually under the application directory, unless otherwise specified
    let log_dir = args.logdir.as_deref().map(expand_home).unwrap_or_default();
    if log_dir.is_empty() { Some(get_app_dir_from_args(args).join(net.name()).join(DEFAULT_LOG_DIR)) } else { Some(PathBuf::from(log_dir)) }
}

/// Runtime configuration struct for the application.
#[derive(Default)]
pub struct Runtime {
    log_dir: Option<PathBuf>,
}

impl Runtime {
    pub fn from_args(args: &Args, net: NetworkType) -> Self {
        // Configure the panic behavior
        npscoin_core::panic::configure_panic();

        let log_dir = get_log_dir(args, net);

        // Initialize the logger
        if let Err(err) = npscoin_core::log::init_logger(log_dir.as_deref(), &args.log_level) {
            eprintln!("Failed to initialize the logger: {err}");
        }

        Self { log_dir }
    }

    pub fn log_dir(&self) -> Option<&PathBuf> {
        self.log_dir.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args() {
        assert_eq!(validate_args(&Args::default()), Ok("main".to_string()));

        let args = Args { logdir: Some("/tmp/logs".into()), no_log_files: true, ..Default::default() };
        assert_eq!(validate_args(&args), Err(ConfigError::MixedLogDirAndNoLogFiles));

        let args = Args { testnet: true, chain: Some("test".into()), ..Default::default() };
        assert_eq!(validate_args(&args), Err(ConfigError::MixedNetworkFlags));
    }

    #[test]
    fn test_log_dir() {
        let app_dir = tempfile::tempdir().unwrap();
        let app_dir_str = app_dir.path().to_str().unwrap().to_string();

        let args = Args { appdir: Some(app_dir_str.clone()), ..Default::default() };
        assert_eq!(get_app_dir_from_args(&args), app_dir.path());
        assert_eq!(get_log_dir(&args, NetworkType::Testnet), Some(app_dir.path().join("test").join(DEFAULT_LOG_DIR)));
        assert_eq!(get_log_dir(&args, NetworkType::Regtest), Some(app_dir.path().join("regtest").join(DEFAULT_LOG_DIR)));

        let args = Args { appdir: Some(app_dir_str), logdir: Some("/var/log/npscoin".into()), ..Default::default() };
        assert_eq!(get_log_dir(&args, NetworkType::Mainnet), Some(PathBuf::from("/var/log/npscoin")));

        let args = Args { no_log_files: true, ..Default::default() };
        assert_eq!(get_log_dir(&args, NetworkType::Mainnet), None);

        assert_eq!(get_app_dir_from_args(&Args::default()), get_app_dir());
        assert_eq!(get_app_dir_from_args(&Args { appdir: Some(String::new()), ..Default::default() }), get_app_dir());
    }
}
