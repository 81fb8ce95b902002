use std::path::Path;

use crate::{ConfigError, ConfigSource};

/// Configuration source read when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "env.js";

impl ConfigSource {
    /// Load and tokenize a configuration source from disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::parse(&raw))
    }
}
