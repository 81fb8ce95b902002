/// TTS-specific result type
pub type Result<T> = std::result::Result<T, TtsError>;

/// Errors from a TTS provider
#[derive(Debug, thiserror::Error)]
pub enum TtsError {
    /// The provider answered with a non-zero status code in the response body
    #[error("provider error ({status_code}): {message}")]
    ProviderError {
        /// Status code from `base_resp`
        status_code: i64,
        /// Status message from `base_resp`
        message: String,
    },

    /// The provider rejected the credentials
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The provider returned a non-success HTTP status
    #[error("provider API error ({status}): {message}")]
    ProviderApiError {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Transport failure while talking to the provider
    #[error("network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The response body was malformed or carried no usable audio
    #[error("failed to parse response: {0}")]
    ParseError(String),
}
