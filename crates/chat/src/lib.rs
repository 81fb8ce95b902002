#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Zhipu (GLM) chat completions client
//!
//! Requests are authenticated with a short-lived signed assertion derived
//! from the configured `id.secret` key pair; see [`token`].

mod client;
mod error;
pub mod token;
mod types;

pub use client::{DEFAULT_CHAT_MODEL, ZhipuClient};
pub use error::{ChatError, Result};
pub use token::{InvalidKeyFormat, SignedAssertion};
pub use types::{ChatMessage, ChatRequest, ChatResponse, Choice};
