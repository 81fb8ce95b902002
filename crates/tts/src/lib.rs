#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod types;

pub use error::{Result, TtsError};
pub use provider::{TtsProvider, minimax::MiniMaxProvider};
pub use types::{AUDIO_EXTENSION, DEFAULT_MODEL, DEFAULT_VOICE_ID, SpeechRequest, SpeechResponse, VoiceSetting};
