use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::{ConfigError, env::expand_env};

/// Named string constants extracted from a configuration source
///
/// Entries keep the order in which they appear. When a key is assigned more
/// than once, the first assignment wins. A value whose placeholder could not
/// be expanded is kept with its failure and only reported when a caller
/// requires that key.
#[derive(Debug, Default, Clone)]
pub struct ConfigSource {
    entries: IndexMap<String, Result<String, String>>,
}

impl ConfigSource {
    /// Tokenize a configuration source into key/value entries
    ///
    /// Finds every `KEY: "value"` or `KEY = 'value'` assignment, wherever it
    /// sits on a line, so one-line objects and keys following an opening `{`
    /// are picked up. Any quote style works, an `export ` prefix and a quoted
    /// key are tolerated, and a key only matches at an identifier boundary.
    /// Lines starting with `//`, `/*`, `*` or `#` are comments.
    pub fn parse(raw: &str) -> Self {
        fn re() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            // Group 1: key; groups 2-4: value in double, single or backtick quotes
            RE.get_or_init(|| {
                Regex::new(
                    r#"(?:^|[^A-Za-z0-9_])(?:export\s+)?["']?([A-Za-z_][A-Za-z0-9_]*)["']?\s*[:=]\s*(?:"([^"]*)"|'([^']*)'|`([^`]*)`)"#,
                )
                .expect("must be valid regex")
            })
        }

        let mut entries = IndexMap::new();

        for line in raw.lines().filter(|line| !is_comment(line)) {
            for captures in re().captures_iter(line) {
                let Some(key) = captures.get(1).map(|m| m.as_str()) else {
                    continue;
                };

                let value = captures
                    .get(2)
                    .or_else(|| captures.get(3))
                    .or_else(|| captures.get(4))
                    .map_or("", |m| m.as_str());

                if entries.contains_key(key) {
                    tracing::debug!(key, "ignoring repeated config key");
                    continue;
                }

                let value = expand_env(value);
                if let Err(message) = &value {
                    tracing::debug!(key, "unexpanded config value: {message}");
                }

                entries.insert(key.to_owned(), value);
            }
        }

        tracing::debug!(entries = entries.len(), "parsed configuration source");

        Self { entries }
    }

    /// Value for `key`, treating empty or unexpandable values as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .get(key)
            .and_then(|value| value.as_deref().ok())
            .filter(|v| !v.trim().is_empty())
    }

    /// Whether `key` has a non-empty value
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Presence of each key, in the given order
    pub fn presence<'k>(&self, keys: &[&'k str]) -> Vec<(&'k str, bool)> {
        keys.iter().map(|key| (*key, self.contains(key))).collect()
    }

    /// Fail if any of `keys` is missing or holds a placeholder that could
    /// not be expanded
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Expansion`] for the first unexpandable key,
    /// otherwise [`ConfigError::MissingConfiguration`] listing every absent key
    pub fn ensure_present(&self, keys: &[&'static str]) -> Result<(), ConfigError> {
        if let Some(err) = keys.iter().find_map(|key| self.expansion_error(key)) {
            return Err(err);
        }

        let missing: Vec<&'static str> = keys.iter().copied().filter(|key| !self.contains(key)).collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::MissingConfiguration { missing })
        }
    }

    /// Value for a required key
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Expansion`] if the value could not be expanded,
    /// or [`ConfigError::MissingConfiguration`] naming `key` if absent
    pub fn require(&self, key: &'static str) -> Result<&str, ConfigError> {
        if let Some(err) = self.expansion_error(key) {
            return Err(err);
        }

        self.get(key)
            .ok_or_else(|| ConfigError::MissingConfiguration { missing: vec![key] })
    }

    fn expansion_error(&self, key: &str) -> Option<ConfigError> {
        match self.entries.get(key)? {
            Ok(_) => None,
            Err(message) => Some(ConfigError::Expansion {
                key: key.to_owned(),
                message: message.clone(),
            }),
        }
    }
}

fn is_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*') || trimmed.starts_with('#')
}
