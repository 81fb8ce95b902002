#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Shared command-line plumbing for `download-audio` and `check-keys`

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use voxline_config::{ConfigError, ConfigSource};
use voxline_telemetry::LogFormat;

/// Options common to both utilities
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Path to the configuration source
    #[arg(short, long, default_value = voxline_config::DEFAULT_CONFIG_PATH, env = "VOXLINE_CONFIG")]
    pub config: PathBuf,

    /// Log filter, overridden by `RUST_LOG`
    #[arg(long, default_value = "info", env = "VOXLINE_LOG")]
    pub log: String,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormatArg::Text, env = "VOXLINE_LOG_FORMAT")]
    pub log_format: LogFormatArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Text => Self::Text,
            LogFormatArg::Json => Self::Json,
        }
    }
}

impl CommonArgs {
    pub fn init_logging(&self) -> anyhow::Result<()> {
        voxline_telemetry::init(&self.log, self.log_format.into())
    }

    /// Read the configuration source, logging the cause on failure
    pub fn load_source(&self) -> Result<ConfigSource, ConfigError> {
        ConfigSource::load(&self.config).inspect_err(|e| {
            tracing::error!(config_path = %self.config.display(), "{e}");
        })
    }
}

/// Log a configuration error; the caller exits with a failure status
/// without printing it again
pub fn report_config_error(error: &ConfigError) {
    tracing::error!("{error}");
}
