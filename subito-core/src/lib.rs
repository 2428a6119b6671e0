//! subito-core: Speech recognition results to SRT subtitles.
//!
//! This crate converts materialized speech-recognition results (word spans
//! with start/end time offsets) into SRT caption documents. The recognition
//! engine itself stays behind the [`recognizer::Recognizer`] trait; the
//! conversion is a pure, synchronous transformation with no shared state.
//!
//! # Architecture
//!
//! - [`types`]: recognition response model as the service encodes it
//! - [`timestamp`]: time offset to `HH:MM:SS,mmm` timecode conversion
//! - [`srt`]: caption assembly and document serialization
//! - [`recognizer`]: injected recognition capability and request types
//!
//! # Quick Start
//!
//! ```ignore
//! use subito_core::srt::{self, CaptionOptions};
//! use subito_core::types::RecognitionResult;
//!
//! // Load a materialized recognition response
//! let json = std::fs::read_to_string("response.json")?;
//! let result = RecognitionResult::from_json_str(&json)?;
//!
//! // Assemble and render captions
//! let subtitles = srt::assemble(&result, &CaptionOptions::default())?;
//! print!("{}", srt::render_document(&subtitles));
//! ```

pub mod error;
pub mod recognizer;
pub mod srt;
pub mod timestamp;
pub mod types;
