pub mod minimax;

use async_trait::async_trait;

use crate::types::{SpeechRequest, SpeechResponse};

/// Trait for TTS provider implementations
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Synthesize text to speech
    async fn synthesize(&self, request: &SpeechRequest) -> crate::error::Result<SpeechResponse>;

    /// Check that the provider accepts a request, without requiring audio back
    async fn verify(&self, request: &SpeechRequest) -> crate::error::Result<()> {
        self.synthesize(request).await.map(|_| ())
    }

    /// Get the provider name
    fn name(&self) -> &str;
}
