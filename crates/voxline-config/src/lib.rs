#![allow(clippy::must_use_candidate)]

//! Configuration for the voxline utilities
//!
//! The configuration source is a loosely formatted text file (a JS object,
//! a dotenv file, or TOML all work) that defines named string constants.
//! [`ConfigSource`] tokenizes it into key/value entries and the credential
//! records in [`credentials`] declare which keys they require.

pub mod credentials;
mod env;
mod error;
mod loader;
mod source;

pub use credentials::{Credentials, TtsCredentials, VoiceOverrides};
pub use error::ConfigError;
pub use loader::DEFAULT_CONFIG_PATH;
pub use source::ConfigSource;
