//! Recognition response types as the service encodes them.
//!
//! The JSON shape follows the protobuf JSON mapping: camelCase field names,
//! int64 values that may arrive as decimal strings, and zero-valued fields
//! omitted entirely.

use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;

/// Time offset within the source audio, protobuf `Duration` shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOffset {
    /// Whole seconds
    #[serde(default, deserialize_with = "i64_lenient")]
    pub seconds: i64,
    /// Sub-second fraction in nanoseconds
    #[serde(default)]
    pub nanos: i32,
}

impl TimeOffset {
    /// Create a time offset from whole seconds and a nanosecond fraction.
    pub fn new(seconds: i64, nanos: i32) -> Self {
        Self { seconds, nanos }
    }
}

/// One recognized word with its time window.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSpan {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub start_time: TimeOffset,
    #[serde(default)]
    pub end_time: TimeOffset,
}

impl WordSpan {
    /// Create a word span covering `start_time..end_time`.
    pub fn new(word: impl Into<String>, start_time: TimeOffset, end_time: TimeOffset) -> Self {
        Self {
            word: word.into(),
            start_time,
            end_time,
        }
    }
}

/// One candidate transcription for a segment of audio.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    /// Transcribed text
    #[serde(default)]
    pub transcript: String,
    /// Recognizer confidence, when reported
    #[serde(default)]
    pub confidence: Option<f32>,
    /// Per-word time offsets; empty when the request did not ask for them
    #[serde(default)]
    pub words: Vec<WordSpan>,
}

/// Recognition output for one contiguous chunk of audio.
///
/// Alternatives are ordered best-first by the recognizer.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SegmentResult {
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

/// Materialized recognition response: segments in temporal order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecognitionResult {
    #[serde(default, rename = "results")]
    pub segments: Vec<SegmentResult>,
}

impl RecognitionResult {
    /// Decode a response from its JSON encoding.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Decode a response from a reader of its JSON encoding.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

/// Accept int64 fields encoded either as numbers or as decimal strings.
fn i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Num(i64),
        Str(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Num(n) => Ok(n),
        Repr::Str(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_response() {
        let json = r#"{
            "results": [{
                "alternatives": [{
                    "transcript": "hello world",
                    "confidence": 0.92,
                    "words": [
                        {"startTime": {"seconds": 1, "nanos": 100000000},
                         "endTime": {"seconds": 1, "nanos": 600000000},
                         "word": "hello"}
                    ]
                }]
            }]
        }"#;

        let result = RecognitionResult::from_json_str(json).unwrap();

        assert_eq!(result.segments.len(), 1);
        let alt = &result.segments[0].alternatives[0];
        assert_eq!(alt.transcript, "hello world");
        assert_eq!(alt.words[0].word, "hello");
        assert_eq!(alt.words[0].start_time, TimeOffset::new(1, 100_000_000));
        assert_eq!(alt.words[0].end_time, TimeOffset::new(1, 600_000_000));
    }

    #[test]
    fn decodes_string_encoded_seconds() {
        let json = r#"{"seconds": "3661", "nanos": 250000000}"#;

        let offset: TimeOffset = serde_json::from_str(json).unwrap();

        assert_eq!(offset, TimeOffset::new(3661, 250_000_000));
    }

    #[test]
    fn decodes_omitted_zero_fields() {
        let json = r#"{
            "results": [{
                "alternatives": [{
                    "transcript": "hi",
                    "words": [{"startTime": {}, "endTime": {"nanos": 400000000}, "word": "hi"}]
                }]
            }]
        }"#;

        let result = RecognitionResult::from_json_str(json).unwrap();

        let word = &result.segments[0].alternatives[0].words[0];
        assert_eq!(word.start_time, TimeOffset::default());
        assert_eq!(word.end_time, TimeOffset::new(0, 400_000_000));
        assert!(result.segments[0].alternatives[0].confidence.is_none());
    }

    #[test]
    fn decodes_empty_response() {
        let result = RecognitionResult::from_json_str("{}").unwrap();
        assert!(result.segments.is_empty());
    }

    #[test]
    fn rejects_malformed_seconds_string() {
        let json = r#"{"seconds": "not-a-number"}"#;
        assert!(serde_json::from_str::<TimeOffset>(json).is_err());
    }
}
