//! SRT caption assembly and serialization.
//!
//! Walks a recognition result, derives one numbered caption block per timed
//! alternative, and renders the blocks into SRT document text.

use crate::error::{CaptionError, TimeField};
use crate::timestamp::SrtTimestamp;
use crate::types::{Alternative, RecognitionResult};
use std::fmt;
use std::io::Write;

/// Default font color wrapped around each caption line.
pub const DEFAULT_FONT_COLOR: &str = "#808080";

/// Which word window times a caption entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimingMode {
    /// First word start to last word end.
    #[default]
    Utterance,
    /// First word start to first word end, matching exports that time every
    /// caption by its opening word.
    FirstWord,
}

/// Caption rendering options.
#[derive(Clone, Debug)]
pub struct CaptionOptions {
    pub timing: TimingMode,
    pub font_color: String,
}

impl Default for CaptionOptions {
    fn default() -> Self {
        Self {
            timing: TimingMode::Utterance,
            font_color: DEFAULT_FONT_COLOR.to_string(),
        }
    }
}

/// One caption block: sequential index, time window, styled text line.
#[derive(Clone, Debug)]
pub struct Subtitle {
    pub index: usize,
    pub start: SrtTimestamp,
    pub end: SrtTimestamp,
    pub text: String,
}

impl Subtitle {
    pub fn new(index: usize, start: SrtTimestamp, end: SrtTimestamp, text: String) -> Self {
        Self {
            index,
            start,
            end,
            text,
        }
    }
}

impl fmt::Display for Subtitle {
    /// Renders the three content lines of a block, without the terminating
    /// blank line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{} --> {}\n{}",
            self.index, self.start, self.end, self.text
        )
    }
}

/// Derive numbered caption blocks from a recognition result.
///
/// Every alternative of every segment is rendered in order. Alternatives
/// without word timings are skipped and the indices stay gap-free, so an
/// assembled document is always numbered `1..=N`. A malformed duration
/// aborts the whole assembly, naming the offending entry and field.
pub fn assemble(
    result: &RecognitionResult,
    options: &CaptionOptions,
) -> Result<Vec<Subtitle>, CaptionError> {
    let mut subtitles = Vec::new();

    for alternative in result.segments.iter().flat_map(|s| s.alternatives.iter()) {
        let index = subtitles.len() + 1;

        match create_subtitle(alternative, index, options)? {
            Some(subtitle) => subtitles.push(subtitle),
            None => {
                tracing::debug!(
                    transcript = alternative.transcript,
                    "skipping alternative without word timings"
                );
            }
        }
    }

    Ok(subtitles)
}

/// Create a caption block from an alternative, or `None` when it carries no
/// word timings.
fn create_subtitle(
    alternative: &Alternative,
    index: usize,
    options: &CaptionOptions,
) -> Result<Option<Subtitle>, CaptionError> {
    let (Some(first), Some(last)) = (alternative.words.first(), alternative.words.last()) else {
        return Ok(None);
    };

    let end_word = match options.timing {
        TimingMode::Utterance => last,
        TimingMode::FirstWord => first,
    };

    let start = SrtTimestamp::from_offset(&first.start_time).map_err(|source| {
        CaptionError::InvalidDuration {
            entry: index,
            field: TimeField::Start,
            source,
        }
    })?;
    let end = SrtTimestamp::from_offset(&end_word.end_time).map_err(|source| {
        CaptionError::InvalidDuration {
            entry: index,
            field: TimeField::End,
            source,
        }
    })?;

    let text = format!(
        "<font color=\"{}\">{}</font>",
        options.font_color, alternative.transcript
    );

    Ok(Some(Subtitle::new(index, start, end, text)))
}

/// Render caption blocks as SRT document text.
///
/// Every block is terminated by a blank line; zero blocks render as an empty
/// document.
pub fn render_document(subtitles: &[Subtitle]) -> String {
    let mut out = String::new();
    for subtitle in subtitles {
        out.push_str(&subtitle.to_string());
        out.push_str("\n\n");
    }
    out
}

/// Write the rendered document to a byte sink.
///
/// The caller owns the sink: acquisition, error handling, and close stay on
/// its side of the boundary.
pub fn write_document<W: Write>(subtitles: &[Subtitle], sink: &mut W) -> std::io::Result<()> {
    sink.write_all(render_document(subtitles).as_bytes())
}

/// Display preview of subtitles (first and last entries).
pub fn preview_subtitles(subtitles: &[Subtitle], head_count: usize, tail_count: usize) -> String {
    let total = subtitles.len();

    if total <= head_count + tail_count {
        subtitles
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
    } else {
        let mut out = Vec::new();
        out.extend(subtitles[0..head_count].iter().map(|s| s.to_string()));
        out.push("...".to_string());
        out.extend(
            subtitles[(total - tail_count)..total]
                .iter()
                .map(|s| s.to_string()),
        );
        out.join("\n\n")
    }
}
