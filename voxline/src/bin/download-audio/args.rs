use std::path::PathBuf;

use clap::Parser;
use voxline::CommonArgs;

/// Download the scripted dialogue lines as MiniMax TTS audio
#[derive(Debug, Parser)]
#[command(name = "download-audio", about = "Synthesize and cache the scripted dialogue audio")]
pub struct Args {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Directory the `<id>.mp3` files are written to
    #[arg(short, long, default_value = voxline_dialogue::DEFAULT_OUTPUT_DIR, env = "VOXLINE_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Override the MiniMax API base URL
    #[arg(long, env = "VOXLINE_TTS_BASE_URL", hide = true)]
    pub tts_base_url: Option<String>,
}
