use std::time::Duration;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};

use crate::{
    error::ChatError,
    token,
    types::{ChatRequest, ChatResponse},
};

const DEFAULT_ZHIPU_API_URL: &str = "https://open.bigmodel.cn";

/// Model used for credential probes
pub const DEFAULT_CHAT_MODEL: &str = "glm-4-flash";

/// Async HTTP client for the Zhipu chat completions API
pub struct ZhipuClient {
    http: reqwest::Client,
    base_url: String,
    key_pair: SecretString,
    token_ttl: Duration,
}

impl ZhipuClient {
    /// Create a new Zhipu client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub fn new(key_pair: SecretString, base_url: Option<String>) -> crate::Result<Self> {
        let http = reqwest::Client::builder().timeout(Duration::from_secs(120)).build()?;

        Ok(Self {
            http,
            base_url: base_url.unwrap_or_else(|| DEFAULT_ZHIPU_API_URL.to_string()),
            key_pair,
            token_ttl: token::DEFAULT_TTL,
        })
    }

    /// Send a chat completion request
    ///
    /// POST `/api/paas/v4/chat/completions`
    ///
    /// A fresh assertion is signed for every call. Success requires `200 OK`
    /// and a body with at least one choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the key pair is malformed, the request fails, the
    /// server answers with another status, or the body cannot be parsed
    pub async fn complete(&self, request: &ChatRequest) -> crate::Result<ChatResponse> {
        let token = token::sign(self.key_pair.expose_secret(), self.token_ttl)?;
        let url = format!("{}/api/paas/v4/chat/completions", self.base_url.trim_end_matches('/'));

        tracing::debug!(
            "Zhipu chat request: model={}, messages={}",
            request.model,
            request.messages.len()
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(token.as_str())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            tracing::error!("Zhipu API error ({status}): {body}");

            return Err(ChatError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| ChatError::ParseError(format!("invalid chat response: {e}")))?;

        if parsed.choices.is_empty() {
            return Err(ChatError::ParseError("response contained no choices".to_string()));
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header_exists, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    use super::*;
    use crate::{ChatMessage, DEFAULT_CHAT_MODEL};

    fn client(base_url: &str, key_pair: &str) -> ZhipuClient {
        ZhipuClient::new(SecretString::from(key_pair.to_owned()), Some(base_url.to_string())).unwrap()
    }

    fn hello() -> ChatRequest {
        ChatRequest {
            model: DEFAULT_CHAT_MODEL.to_owned(),
            messages: vec![ChatMessage::user("Hello")],
        }
    }

    #[tokio::test]
    async fn complete_returns_first_choice() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/paas/v4/chat/completions"))
            .and(header_exists("authorization"))
            .and(body_json(json!({
                "model": "glm-4-flash",
                "messages": [{ "role": "user", "content": "Hello" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "你好！" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server.uri(), "abc.def").complete(&hello()).await.unwrap();

        assert_eq!(response.first_content(), Some("你好！"));
    }

    #[tokio::test]
    async fn bearer_is_a_fresh_signed_assertion() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "ok" } }]
            })))
            .mount(&server)
            .await;

        client(&server.uri(), "abc.def").complete(&hello()).await.unwrap();

        let requests: Vec<Request> = server.received_requests().await.unwrap();
        let authorization = requests[0].headers.get("authorization").unwrap().to_str().unwrap();
        let token = authorization.strip_prefix("Bearer ").unwrap();

        assert_eq!(token.split('.').count(), 3);
    }

    #[tokio::test]
    async fn malformed_key_pair_never_reaches_the_network() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client(&server.uri(), "malformed-no-dot").complete(&hello()).await.unwrap_err();

        assert!(matches!(err, ChatError::InvalidKeyFormat(_)));
    }

    #[tokio::test]
    async fn unauthorized_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("{\"error\":{\"code\":\"1000\"}}"))
            .mount(&server)
            .await;

        let err = client(&server.uri(), "abc.def").complete(&hello()).await.unwrap_err();

        assert!(matches!(err, ChatError::Api { status: 401, .. }));
    }

    #[tokio::test]
    async fn empty_choices_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let err = client(&server.uri(), "abc.def").complete(&hello()).await.unwrap_err();

        assert!(matches!(err, ChatError::ParseError(_)));
    }

    #[tokio::test]
    async fn non_json_body_is_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client(&server.uri(), "abc.def").complete(&hello()).await.unwrap_err();

        assert!(matches!(err, ChatError::ParseError(_)));
    }
}
