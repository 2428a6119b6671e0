//! Recognition collaborator boundary.
//!
//! The recognition engine is an injected capability: callers hand the
//! pipeline a [`Recognizer`] together with an explicit request and get
//! caption blocks back. Nothing here assumes how the result was obtained.

use crate::error::Result;
use crate::srt::{self, CaptionOptions, Subtitle};
use crate::types::RecognitionResult;

/// Default request language.
pub const DEFAULT_LANGUAGE_CODE: &str = "en-US";

/// Default request sample rate in hertz.
pub const DEFAULT_SAMPLE_RATE_HZ: i32 = 16_000;

/// Audio payload for a recognition request.
///
/// Decided once by the caller; never inferred from the shape of a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AudioSource {
    /// Remote object the recognition service fetches itself
    Uri(String),
    /// Audio bytes shipped inline with the request
    InlineBytes(Vec<u8>),
}

/// Source audio codec of a recognition request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AudioEncoding {
    #[default]
    Unspecified,
    /// Uncompressed 16-bit signed little-endian samples (Linear PCM)
    Linear16,
    /// Free Lossless Audio Codec
    Flac,
    /// 8-bit samples companding 14-bit audio via G.711 PCMU/mu-law
    Mulaw,
    /// Adaptive Multi-Rate Narrowband, 8 kHz only
    Amr,
    /// Adaptive Multi-Rate Wideband, 16 kHz only
    AmrWb,
    /// Opus frames in an Ogg container
    OggOpus,
    /// Speex wideband with header byte
    SpeexWithHeaderByte,
}

/// Recognition request parameters.
#[derive(Clone, Debug)]
pub struct RecognitionConfig {
    pub encoding: AudioEncoding,
    pub sample_rate_hz: i32,
    pub language_code: String,
    /// Request per-word time offsets; captioning needs them
    pub enable_word_time_offsets: bool,
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            encoding: AudioEncoding::Linear16,
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            language_code: DEFAULT_LANGUAGE_CODE.to_string(),
            enable_word_time_offsets: true,
        }
    }
}

/// Complete recognition request.
#[derive(Clone, Debug)]
pub struct RecognizeRequest {
    pub config: RecognitionConfig,
    pub audio: AudioSource,
}

impl RecognizeRequest {
    /// Request with default parameters for the given audio.
    pub fn new(audio: AudioSource) -> Self {
        Self {
            config: RecognitionConfig::default(),
            audio,
        }
    }
}

/// Speech recognition engine boundary.
///
/// Implementations materialize a full recognition result before returning;
/// the caption pipeline never observes how it was produced.
pub trait Recognizer {
    /// Run recognition for the request, returning the materialized result.
    fn recognize(&mut self, request: &RecognizeRequest) -> Result<RecognitionResult>;
}

/// Recognize the request's audio and assemble caption blocks from it.
pub fn caption_request<R: Recognizer>(
    recognizer: &mut R,
    request: &RecognizeRequest,
    options: &CaptionOptions,
) -> Result<Vec<Subtitle>> {
    let result = recognizer.recognize(request)?;

    tracing::debug!(segments = result.segments.len(), "recognition completed");

    let subtitles = srt::assemble(&result, options)?;

    tracing::debug!(entries = subtitles.len(), "captions assembled");

    Ok(subtitles)
}
