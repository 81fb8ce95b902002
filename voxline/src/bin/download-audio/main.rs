#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::process::ExitCode;

use args::Args;
use clap::Parser;
use tts::MiniMaxProvider;
use voxline_config::{TtsCredentials, VoiceOverrides};
use voxline_dialogue::{Downloader, SCRIPT};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    args.common.init_logging()?;

    let Ok(source) = args.common.load_source() else {
        return Ok(ExitCode::FAILURE);
    };
    let Ok(credentials) = TtsCredentials::from_source(&source).inspect_err(voxline::report_config_error) else {
        return Ok(ExitCode::FAILURE);
    };
    let overrides = VoiceOverrides::from_source(&source);

    tracing::info!(
        config_path = %args.common.config.display(),
        output_dir = %args.output_dir.display(),
        "starting download-audio"
    );

    let provider = MiniMaxProvider::new(credentials.group_id, credentials.api_key, args.tts_base_url);

    let mut downloader = Downloader::new(Box::new(provider));
    if let Some(model) = overrides.model {
        downloader = downloader.with_model(model);
    }
    if let Some(voice_id) = overrides.voice_id {
        downloader = downloader.with_voice_id(voice_id);
    }

    let report = downloader.run_all(&SCRIPT, &args.output_dir).await?;

    if !report.failed.is_empty() {
        tracing::warn!(failed = ?report.failed, "some lines failed; re-run to retry them");
    }

    Ok(ExitCode::SUCCESS)
}
