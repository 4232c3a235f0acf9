use clap::{Arg, Command, arg, parser::ValueSource::DefaultValue};
use npscoin_consensus_core::errors::config::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::{ffi::OsString, fs};
use toml::from_str;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Args {
    // NOTE: it is best if property names match config file fields
    pub appdir: Option<String>,
    pub logdir: Option<String>,
    #[serde(rename = "nologfiles")]
    pub no_log_files: bool,
    #[serde(rename = "loglevel")]
    pub log_level: String,
    pub testnet: bool,
    pub regtest: bool,
    /// Network selected by its configuration name
    pub chain: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self { appdir: None, logdir: None, no_log_files: false, log_level: "INFO".into(), testnet: false, regtest: false, chain: None }
    }
}

impl Args {
    /// The configuration name of the network to run on. Mainnet unless a flag says otherwise.
    pub fn network_name(&self) -> ConfigResult<String> {
        match (self.testnet, self.regtest, &self.chain) {
            (false, false, None) => Ok("main".to_string()),
            (true, false, None) => Ok("test".to_string()),
            (false, true, None) => Ok("regtest".to_string()),
            (false, false, Some(chain)) => Ok(chain.clone()),
            _ => Err(ConfigError::MixedNetworkFlags),
        }
    }

    pub fn parse<I, T>(itr: I) -> Result<Args, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let m: clap::ArgMatches = cli().try_get_matches_from(itr)?;
        let mut defaults: Args = Default::default();

        if let Some(config_file) = m.get_one::<String>("configfile") {
            let config_str = fs::read_to_string(config_file)?;
            defaults = from_str(&config_str).map_err(|toml_error| {
                clap::Error::raw(
                    clap::error::ErrorKind::ValueValidation,
                    format!("failed parsing config file, reason: {}", toml_error.message()),
                )
            })?;
        }

        let args = Args {
            appdir: m.get_one::<String>("appdir").cloned().or(defaults.appdir),
            logdir: m.get_one::<String>("logdir").cloned().or(defaults.logdir),
            no_log_files: arg_match_unwrap_or::<bool>(&m, "nologfiles", defaults.no_log_files),
            log_level: arg_match_unwrap_or::<String>(&m, "log_level", defaults.log_level),
            testnet: arg_match_unwrap_or::<bool>(&m, "testnet", defaults.testnet),
            regtest: arg_match_unwrap_or::<bool>(&m, "regtest", defaults.regtest),
            chain: m.get_one::<String>("chain").cloned().or(defaults.chain),
        };

        Ok(args)
    }
}

pub fn cli() -> Command {
    Command::new("npscoind")
        .about(format!("{} v{}", env!("CARGO_PKG_DESCRIPTION"), env!("CARGO_PKG_VERSION")))
        .version(env!("CARGO_PKG_VERSION"))
        .arg(arg!(-C --configfile <CONFIG_FILE> "Path of config file."))
        .arg(arg!(-b --appdir <DATA_DIR> "Directory to store data."))
        .arg(arg!(--logdir <LOG_DIR> "Directory to log output."))
        .arg(arg!(--nologfiles "Disable logging to files."))
        .arg(
            Arg::new("log_level")
                .short('d')
                .long("loglevel")
                .env("NPSCOIND_LOG_LEVEL")
                .value_name("LEVEL")
                .default_value("info")
                .require_equals(true)
                .help("Logging level for all subsystems {off, error, warn, info, debug, trace}\n-- You may also specify <subsystem>=<level>,<subsystem2>=<level>,... to set the log level for individual subsystems.".to_string()),
        )
        .arg(arg!(--testnet "Use the test network"))
        .arg(arg!(--regtest "Use the regression test network"))
        .arg(
            Arg::new("chain")
                .long("chain")
                .env("NPSCOIND_CHAIN")
                .value_name("NAME")
                .require_equals(true)
                .help("Use the network with the given name {main, test, regtest}"),
        )
}

pub fn parse_args() -> Args {
    match Args::parse(std::env::args_os()) {
        Ok(args) => args,
        Err(err) => {
            println!("{err}");
            std::process::exit(1);
        }
    }
}

fn arg_match_unwrap_or<T: Clone + Send + Sync + 'static>(m: &clap::ArgMatches, arg_id: &str, default: T) -> T {
    m.get_one::<T>(arg_id).cloned().filter(|_| m.value_source(arg_id) != Some(DefaultValue)).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_network_flags() {
        let args = Args::parse(["npscoind"]).unwrap();
        assert_eq!(args, Args::default());
        assert_eq!(args.network_name(), Ok("main".to_string()));

        let args = Args::parse(["npscoind", "--testnet"]).unwrap();
        assert_eq!(args.network_name(), Ok("test".to_string()));

        let args = Args::parse(["npscoind", "--regtest", "--loglevel=debug"]).unwrap();
        assert_eq!(args.network_name(), Ok("regtest".to_string()));
        assert_eq!(args.log_level, "debug");

        // The raw name is passed through, the registry decides whether it is known
        let args = Args::parse(["npscoind", "--chain=bogus"]).unwrap();
        assert_eq!(args.network_name(), Ok("bogus".to_string()));

        let args = Args::parse(["npscoind", "--testnet", "--regtest"]).unwrap();
        assert_eq!(args.network_name(), Err(ConfigError::MixedNetworkFlags));
        let args = Args::parse(["npscoind", "--regtest", "--chain=regtest"]).unwrap();
        assert_eq!(args.network_name(), Err(ConfigError::MixedNetworkFlags));
    }

    #[test]
    fn test_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "chain = \"test\"\nnologfiles = true\nloglevel = \"warn\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let args = Args::parse(["npscoind", "-C", path.as_str()]).unwrap();
        assert_eq!(args.chain.as_deref(), Some("test"));
        assert!(args.no_log_files);
        assert_eq!(args.log_level, "warn");

        // Command line arguments take precedence over the file
        let args = Args::parse(["npscoind", "-C", path.as_str(), "--loglevel=trace", "--chain=regtest"]).unwrap();
        assert_eq!(args.log_level, "trace");
        assert_eq!(args.chain.as_deref(), Some("regtest"));

        let mut bad = tempfile::NamedTempFile::new().unwrap();
        writeln!(bad, "unknown-field = 1").unwrap();
        let bad_path = bad.path().to_str().unwrap().to_string();
        assert!(Args::parse(["npscoind", "-C", bad_path.as_str()]).is_err());
    }
}
