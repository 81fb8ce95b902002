#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Pre-scripted dialogue lines and the cached audio downloader

mod downloader;
mod error;
mod script;

pub use downloader::{DEFAULT_OUTPUT_DIR, DownloadReport, Downloader};
pub use error::{DialogueError, ItemError};
pub use script::{DialogueItem, SCRIPT, validate};
