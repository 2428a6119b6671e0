//! Inspect subcommand - summarize a recognition response.

use color_eyre::Section;
use eyre::{Context, Result, eyre};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use subito_core::timestamp::SrtTimestamp;
use subito_core::types::{RecognitionResult, TimeOffset};

/// CLI arguments for response inspection.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to recognition response JSON file
    pub path: PathBuf,
}

/// Resolved configuration for response inspection.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
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

        Ok(Self { path: args.path })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let file = File::open(&config.path)
        .wrap_err_with(|| format!("failed to open response: {:?}", config.path.display()))?;
    let result = RecognitionResult::from_reader(BufReader::new(file))
        .wrap_err_with(|| format!("failed to decode response: {:?}", config.path.display()))?;

    let mut alternatives = 0usize;
    let mut wordless = 0usize;
    let mut words = 0usize;
    let mut last_end: Option<TimeOffset> = None;

    for alternative in result.segments.iter().flat_map(|s| s.alternatives.iter()) {
        alternatives += 1;

        match alternative.words.last() {
            Some(last) => {
                words += alternative.words.len();
                last_end = Some(last.end_time);
            }
            None => wordless += 1,
        }
    }

    println!("segments:     {}", result.segments.len());
    println!(
        "alternatives: {} ({} without word timings)",
        alternatives, wordless
    );
    println!("words:        {}", words);

    if let Some(end) = last_end {
        match SrtTimestamp::from_offset(&end) {
            Ok(timecode) => println!("covers:       00:00:00,000 --> {}", timecode),
            Err(e) => println!("covers:       invalid end time ({})", e),
        }
    }

    Ok(())
}
