//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "subito")]
#[command(about = "Convert speech recognition results to SRT subtitles")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate an SRT file from a recognition response
    Cap(crate::cap::Args),

    /// Summarize the contents of a recognition response
    Inspect(crate::inspect::Args),
}

/// Shared caption rendering flags.
#[derive(clap::Args, Clone, Debug)]
pub struct CaptionConfig {
    /// Print a preview of the generated subtitles to stdout
    #[arg(long)]
    pub preview: bool,

    /// Time each caption by its first word only instead of the full utterance
    #[arg(long)]
    pub first_word_timing: bool,

    /// Font color wrapped around each caption line
    #[arg(long, default_value = subito_core::srt::DEFAULT_FONT_COLOR)]
    pub font_color: String,
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Cap(args) => crate::cap::execute(args.try_into()?),
        Commands::Inspect(args) => crate::inspect::execute(args.try_into()?),
    }
}
