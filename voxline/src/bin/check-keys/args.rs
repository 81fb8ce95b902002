use clap::Parser;
use voxline::CommonArgs;

/// Verify the MiniMax and Zhipu credentials with one request each
#[derive(Debug, Parser)]
#[command(name = "check-keys", about = "Probe the configured TTS and chat credentials")]
pub struct Args {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Exit with a non-zero status when any probe fails
    #[arg(long, env = "VOXLINE_STRICT")]
    pub strict: bool,

    /// Override the MiniMax API base URL
    #[arg(long, env = "VOXLINE_TTS_BASE_URL", hide = true)]
    pub tts_base_url: Option<String>,

    /// Override the Zhipu API base URL
    #[arg(long, env = "VOXLINE_CHAT_BASE_URL", hide = true)]
    pub chat_base_url: Option<String>,
}
