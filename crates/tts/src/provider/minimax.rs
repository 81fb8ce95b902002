use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{
    error::TtsError,
    http_client::http_client,
    types::{SpeechRequest, SpeechResponse, VoiceSetting},
};

use super::TtsProvider;

const DEFAULT_MINIMAX_API_URL: &str = "https://api.minimax.chat";

/// `MiniMax` T2A v2 provider
pub struct MiniMaxProvider {
    client: Client,
    base_url: String,
    group_id: String,
    api_key: SecretString,
}

impl MiniMaxProvider {
    pub fn new(group_id: String, api_key: SecretString, base_url: Option<String>) -> Self {
        let client = http_client();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_MINIMAX_API_URL.to_string());

        Self {
            client,
            base_url,
            group_id,
            api_key,
        }
    }

    /// Send a synthesis request and check both the HTTP and the embedded status
    async fn send(&self, request: &SpeechRequest) -> crate::error::Result<T2aResponse> {
        let url = format!("{}/v1/t2a_v2", self.base_url.trim_end_matches('/'));

        tracing::debug!(
            "MiniMax TTS request: model={}, voice={}, input_len={}",
            request.model,
            request.voice.voice_id,
            request.text.len(),
        );

        let body = T2aRequest {
            model: &request.model,
            text: &request.text,
            stream: false,
            voice_setting: &request.voice,
        };

        let response = self
            .client
            .post(&url)
            .query(&[("GroupId", self.group_id.as_str())])
            .header("Authorization", format!("Bearer {}", self.api_key.expose_secret()))
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!("MiniMax request failed: {e}"))?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::error!("MiniMax API error ({status}): {text}");

            return Err(match status.as_u16() {
                401 => TtsError::AuthenticationFailed(text),
                _ => TtsError::ProviderApiError {
                    status: status.as_u16(),
                    message: text,
                },
            });
        }

        let parsed: T2aResponse = serde_json::from_str(&text)
            .map_err(|e| TtsError::ParseError(format!("invalid MiniMax response body: {e}")))?;

        if let Some(base) = &parsed.base_resp
            && base.status_code != 0
        {
            return Err(TtsError::ProviderError {
                status_code: base.status_code,
                message: base.status_msg.clone(),
            });
        }

        Ok(parsed)
    }
}

#[derive(serde::Serialize)]
struct T2aRequest<'a> {
    model: &'a str,
    text: &'a str,
    stream: bool,
    voice_setting: &'a VoiceSetting,
}

#[derive(Debug, Deserialize)]
struct T2aResponse {
    #[serde(default)]
    base_resp: Option<BaseResp>,
    #[serde(default)]
    data: Option<T2aData>,
}

#[derive(Debug, Deserialize)]
struct BaseResp {
    status_code: i64,
    #[serde(default)]
    status_msg: String,
}

#[derive(Debug, Deserialize)]
struct T2aData {
    #[serde(default)]
    audio: Option<String>,
}

#[async_trait]
impl TtsProvider for MiniMaxProvider {
    async fn synthesize(&self, request: &SpeechRequest) -> crate::error::Result<SpeechResponse> {
        let response = self.send(request).await?;

        let encoded = response
            .data
            .and_then(|data| data.audio)
            .filter(|audio| !audio.is_empty())
            .ok_or_else(|| TtsError::ParseError("no audio data in response".to_string()))?;

        let audio =
            hex::decode(&encoded).map_err(|e| TtsError::ParseError(format!("audio is not valid hex: {e}")))?;

        tracing::debug!("MiniMax TTS synthesis complete, {} bytes", audio.len());

        Ok(SpeechResponse { audio })
    }

    async fn verify(&self, request: &SpeechRequest) -> crate::error::Result<()> {
        self.send(request).await.map(|_| ())
    }

    fn name(&self) -> &str {
        "minimax"
    }
}
