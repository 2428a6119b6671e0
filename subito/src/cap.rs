//! Cap subcommand - generate an SRT file from a recognition response.

use crate::cli::CaptionConfig;
use color_eyre::Section;
use eyre::{Context, Result, eyre};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use subito_core::srt::{self, CaptionOptions, Subtitle};
use subito_core::types::RecognitionResult;

/// CLI arguments for SRT generation.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to recognition response JSON file
    pub path: PathBuf,

    /// Output SRT path (default: same as input with .srt extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub caption_config: CaptionConfig,
}

/// Resolved configuration for SRT generation.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub preview: bool,
    pub options: CaptionOptions,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        if !args.path.exists() {
            return Err(
                eyre!("response file not found: {:?}", args.path.display())
                    .suggestion("export the recognition response as JSON first"),
            );
        }

        Ok(Self {
            options: (&args.caption_config).into(),
            preview: args.caption_config.preview,
            path: args.path,
            output: args.output,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    // Resolve output path
    let output = config
        .output
        .unwrap_or_else(|| config.path.with_extension("srt"));

    tracing::info!(
        input = ?config.path.display(),
        output = ?output.display(),
        "generating captions"
    );

    let subtitles = subtitles_from_response_file(&config.path, &config.options)?;

    tracing::info!(entries = subtitles.len(), path = ?output.display(), "write srt file");

    write_srt_file(&subtitles, &output)
        .wrap_err_with(|| format!("failed to write srt: {:?}", output.display()))?;

    // Display preview to stdout
    if config.preview {
        print!("{}", srt::preview_subtitles(&subtitles, 3, 3));
    }

    Ok(())
}

/// Load a recognition response and assemble captions from it.
fn subtitles_from_response_file(path: &Path, options: &CaptionOptions) -> Result<Vec<Subtitle>> {
    let s = Instant::now();

    let file = File::open(path)
        .wrap_err_with(|| format!("failed to open response: {:?}", path.display()))?;
    let result = RecognitionResult::from_reader(BufReader::new(file))
        .wrap_err_with(|| format!("failed to decode response: {:?}", path.display()))?;

    let d = s.elapsed();
    tracing::info!(
        segments = result.segments.len(),
        duration = %format_secs(d.as_secs_f32()),
        "response loaded"
    );

    let subtitles = srt::assemble(&result, options).wrap_err("caption assembly failed")?;

    Ok(subtitles)
}

/// Write subtitles to the output path; the handle closes on every exit path.
fn write_srt_file(subtitles: &[Subtitle], path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    srt::write_document(subtitles, &mut writer)?;
    writer.flush()
}

/// Format seconds as a string with two decimal places.
fn format_secs(secs: f32) -> String {
    format!("{:.2}s", secs)
}
