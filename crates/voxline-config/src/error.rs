use std::path::PathBuf;

/// Errors produced while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration source could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `{{ env.VAR }}` placeholder could not be expanded
    #[error("config variable expansion failed for `{key}`: {message}")]
    Expansion {
        /// Key whose value held the placeholder
        key: String,
        /// Expansion failure
        message: String,
    },

    /// One or more required keys are absent or empty
    #[error("missing configuration: {}", missing.join(", "))]
    MissingConfiguration {
        /// Names of every absent key, in declaration order
        missing: Vec<&'static str>,
    },
}
