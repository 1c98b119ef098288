//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Replay a pointer event script and render the canvas to SVG.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "drawpad", about = "Replay a pointer event script and render it to SVG")]
pub struct CliArgs {
    /// JSON event script to replay.
    pub script: PathBuf,

    /// JSON configuration file. Defaults apply when absent.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output file. The SVG goes to stdout when absent.
    #[arg(long)]
    pub out: Option<PathBuf>,
}
