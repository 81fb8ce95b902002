#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::process::ExitCode;

use args::Args;
use chat::ZhipuClient;
use clap::Parser;
use tts::MiniMaxProvider;
use voxline_config::{Credentials, credentials::ALL_REQUIRED};
use voxline_probe::CredentialChecker;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    args.common.init_logging()?;

    let Ok(source) = args.common.load_source() else {
        return Ok(ExitCode::FAILURE);
    };

    tracing::info!(config_path = %args.common.config.display(), "checking keys");
    for (key, found) in source.presence(&ALL_REQUIRED) {
        tracing::info!(key, status = if found { "found" } else { "missing" });
    }

    let Ok(credentials) = Credentials::from_source(&source).inspect_err(voxline::report_config_error) else {
        return Ok(ExitCode::FAILURE);
    };

    let chat = ZhipuClient::new(credentials.chat_key_pair, args.chat_base_url)?;
    let tts = MiniMaxProvider::new(credentials.tts.group_id, credentials.tts.api_key, args.tts_base_url);

    let reports = CredentialChecker::new(chat, Box::new(tts)).run().await;

    if args.strict && !voxline_probe::all_passed(&reports) {
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
