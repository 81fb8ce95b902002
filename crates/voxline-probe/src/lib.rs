#![allow(clippy::must_use_candidate)]

//! One-shot credential probes for the chat and TTS providers

use std::fmt;

use chat::{ChatMessage, ChatRequest, DEFAULT_CHAT_MODEL, ZhipuClient};
use tts::{SpeechRequest, TtsProvider};

/// Prompt and text used by both probes
const PROBE_TEXT: &str = "Hello";

/// Provider a probe talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeTarget {
    Chat,
    Tts,
}

impl fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chat => f.write_str("Zhipu AI"),
            Self::Tts => f.write_str("MiniMax TTS"),
        }
    }
}

/// Result of a single probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Credentials accepted; `detail` holds the chat reply when there is one
    Passed { detail: Option<String> },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub target: ProbeTarget,
    pub outcome: ProbeOutcome,
}

impl ProbeReport {
    pub const fn passed(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Passed { .. })
    }

    fn log(&self) {
        match &self.outcome {
            ProbeOutcome::Passed { detail } => tracing::info!(
                provider = %self.target,
                response = detail.as_deref().unwrap_or_default(),
                "connection succeeded"
            ),
            ProbeOutcome::Failed { reason } => {
                tracing::error!(provider = %self.target, reason = %reason, "connection failed");
            }
        }
    }
}

/// Issues one minimal request per provider and reports pass or fail
///
/// Probes run one after the other and are never retried. A failing probe
/// does not affect the other.
pub struct CredentialChecker {
    chat: ZhipuClient,
    tts: Box<dyn TtsProvider>,
}

impl CredentialChecker {
    pub fn new(chat: ZhipuClient, tts: Box<dyn TtsProvider>) -> Self {
        Self { chat, tts }
    }

    /// Run the chat probe, then the TTS probe
    pub async fn run(&self) -> Vec<ProbeReport> {
        let reports = vec![self.probe_chat().await, self.probe_tts().await];

        let failed = reports.iter().filter(|report| !report.passed()).count();
        tracing::info!(probes = reports.len(), failed, "credential check finished");

        reports
    }

    /// Sign a fresh assertion and request one chat completion
    pub async fn probe_chat(&self) -> ProbeReport {
        tracing::info!(provider = %ProbeTarget::Chat, "testing");

        let request = ChatRequest {
            model: DEFAULT_CHAT_MODEL.to_owned(),
            messages: vec![ChatMessage::user(PROBE_TEXT)],
        };

        let outcome = match self.chat.complete(&request).await {
            Ok(response) => ProbeOutcome::Passed {
                detail: response.first_content().map(str::to_owned),
            },
            Err(e) => ProbeOutcome::Failed { reason: e.to_string() },
        };

        let report = ProbeReport {
            target: ProbeTarget::Chat,
            outcome,
        };
        report.log();
        report
    }

    /// Request one short synthesis and check the embedded status
    pub async fn probe_tts(&self) -> ProbeReport {
        tracing::info!(provider = %ProbeTarget::Tts, "testing");

        let outcome = match self.tts.verify(&SpeechRequest::new(PROBE_TEXT)).await {
            Ok(()) => ProbeOutcome::Passed { detail: None },
            Err(e) => ProbeOutcome::Failed { reason: e.to_string() },
        };

        let report = ProbeReport {
            target: ProbeTarget::Tts,
            outcome,
        };
        report.log();
        report
    }
}

/// Whether every probe passed
pub fn all_passed(reports: &[ProbeReport]) -> bool {
    reports.iter().all(ProbeReport::passed)
}
