use std::path::{Path, PathBuf};

use tts::{AUDIO_EXTENSION, DEFAULT_MODEL, SpeechRequest, TtsProvider, VoiceSetting};

use crate::{DialogueError, DialogueItem, ItemError, script};

/// Directory the audio files are written to when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "assets/audio";

/// Outcome of a download run, by item id
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub downloaded: Vec<&'static str>,
    /// Items whose file already existed
    pub skipped: Vec<&'static str>,
    pub failed: Vec<&'static str>,
}

enum Outcome {
    Downloaded,
    Skipped,
}

/// Sequential downloader that caches synthesized lines on disk
///
/// A file at the target path is the only cache signal: it is never
/// overwritten or checked for staleness, even if the text or voice changed.
pub struct Downloader {
    provider: Box<dyn TtsProvider>,
    model: String,
    voice: VoiceSetting,
}

impl Downloader {
    pub fn new(provider: Box<dyn TtsProvider>) -> Self {
        Self {
            provider,
            model: DEFAULT_MODEL.to_owned(),
            voice: VoiceSetting::default(),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice.voice_id = voice_id.into();
        self
    }

    /// Path the audio for `item` is cached at
    pub fn target_path(output_dir: &Path, item: &DialogueItem) -> PathBuf {
        output_dir.join(format!("{}.{AUDIO_EXTENSION}", item.id))
    }

    /// Download every item in order, skipping those already on disk
    ///
    /// Per-item failures are logged and recorded in the report; they never
    /// abort the run and are not retried.
    ///
    /// # Errors
    ///
    /// Returns an error if the items are invalid or the output directory
    /// cannot be created. Nothing is requested in either case.
    pub async fn run_all(&self, items: &[DialogueItem], output_dir: &Path) -> Result<DownloadReport, DialogueError> {
        script::validate(items)?;

        std::fs::create_dir_all(output_dir).map_err(|source| DialogueError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        tracing::info!(
            items = items.len(),
            output_dir = %output_dir.display(),
            provider = self.provider.name(),
            "starting audio download"
        );

        let mut report = DownloadReport::default();

        for item in items {
            tracing::info!(id = item.id, "processing: {}...", item.preview());

            match self.download(item, output_dir).await {
                Ok(Outcome::Downloaded) => report.downloaded.push(item.id),
                Ok(Outcome::Skipped) => report.skipped.push(item.id),
                Err(e) => {
                    tracing::error!(id = item.id, error = %e, "failed to download");
                    report.failed.push(item.id);
                }
            }
        }

        tracing::info!(
            downloaded = report.downloaded.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "all downloads complete"
        );

        Ok(report)
    }

    async fn download(&self, item: &DialogueItem, output_dir: &Path) -> Result<Outcome, ItemError> {
        let path = Self::target_path(output_dir, item);

        if path.is_file() {
            tracing::info!(id = item.id, path = %path.display(), "file exists, skipping");
            return Ok(Outcome::Skipped);
        }

        let request = SpeechRequest {
            model: self.model.clone(),
            text: item.text.to_owned(),
            voice: self.voice.clone(),
        };

        let response = self.provider.synthesize(&request).await?;

        std::fs::write(&path, &response.audio).map_err(|source| ItemError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(id = item.id, path = %path.display(), bytes = response.audio.len(), "downloaded");

        Ok(Outcome::Downloaded)
    }
}
