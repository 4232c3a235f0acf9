//!
//! Logger initialization. Console output is always enabled; when a log
//! directory is supplied, two size-rolled files are written as well, one
//! carrying everything and one restricted to warnings and errors.
//!

use log::LevelFilter;
use log4rs::{Config, config::Root};
use std::path::Path;
use thiserror::Error;

mod appender;
pub mod consts;
mod logger;

use appender::AppenderSpec;
use consts::{DEFAULT_LOGGER_ENV, ERR_LOG_FILE_NAME, LOG_FILE_NAME};
use logger::Builder;

const CONSOLE_APPENDER: &str = "stdout";
const LOG_FILE_APPENDER: &str = "log_file";
const ERR_LOG_FILE_APPENDER: &str = "err_log_file";

#[derive(Clone, Debug, Error)]
pub enum LogError {
    #[error("Logger spec parsing error: {0}")]
    ParseLoggerSpecError(String),

    #[error("log directory path is not valid UTF-8: {0}")]
    InvalidLogDir(String),

    #[error("failed to build appender '{0}': {1}")]
    AppenderError(&'static str, String),

    #[error("invalid logger configuration: {0}")]
    ConfigError(String),

    #[error("a global logger is already installed")]
    AlreadyInitialized,
}

fn build_config(log_dir: Option<&Path>, filters: &str) -> Result<Config, LogError> {
    let mut builder = Builder::new();
    let mut appenders = vec![AppenderSpec::console(CONSOLE_APPENDER, None)];
    if let Some(log_dir) = log_dir {
        appenders.push(AppenderSpec::roller(LOG_FILE_APPENDER, None, log_dir, LOG_FILE_NAME)?);
        appenders.push(AppenderSpec::roller(ERR_LOG_FILE_APPENDER, Some(LevelFilter::Warn), log_dir, ERR_LOG_FILE_NAME)?);
    }
    let names = appenders.iter().map(|x| x.name).collect::<Vec<_>>();
    let loggers = builder.appenders(names.iter().copied()).parse_env(DEFAULT_LOGGER_ENV).parse_expression(filters).build();
    for rejected in builder.rejected() {
        eprintln!("Ignoring invalid logging spec: {rejected}");
    }

    Config::builder()
        .appenders(appenders.iter_mut().filter_map(|x| x.appender()))
        .loggers(loggers.items())
        .build(Root::builder().appenders(names).build(loggers.root_level()))
        .map_err(|err| LogError::ConfigError(err.to_string()))
}

/// Installs the global logger. `filters` uses the same syntax as the `RUST_LOG`
/// environment variable, which is also honored (and overridden by `filters`).
pub fn init_logger(log_dir: Option<&Path>, filters: &str) -> Result<(), LogError> {
    let config = build_config(log_dir, filters)?;
    log4rs::init_config(config).map(|_| ()).map_err(|_| LogError::AlreadyInitialized)
}

/// Console-only logger for tests. Repeated calls are ignored.
pub fn try_init_logger(filters: &str) {
    let _ = init_logger(None, filters);
}
