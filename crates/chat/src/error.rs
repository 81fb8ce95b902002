use crate::token::InvalidKeyFormat;

/// Chat-specific result type
pub type Result<T> = std::result::Result<T, ChatError>;

/// Errors from the chat client
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The key pair could not be turned into a signed assertion
    #[error(transparent)]
    InvalidKeyFormat(#[from] InvalidKeyFormat),

    /// HTTP transport error
    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// Server answered with something other than `200 OK`
    #[error("chat API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Failed to parse response
    #[error("failed to parse response: {0}")]
    ParseError(String),
}
