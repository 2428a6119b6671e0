//! Configuration types for resolved CLI arguments.
//!
//! Args structs (for CLI parsing) remain in cli.rs; this module holds the
//! conversion into the library's caption options.

use crate::cli::CaptionConfig;
use subito_core::srt::{CaptionOptions, TimingMode};

impl From<&CaptionConfig> for CaptionOptions {
    fn from(config: &CaptionConfig) -> Self {
        let timing = if config.first_word_timing {
            TimingMode::FirstWord
        } else {
            TimingMode::Utterance
        };

        Self {
            timing,
            font_color: config.font_color.clone(),
        }
    }
}
