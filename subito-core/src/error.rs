//! Error types for subito-core organized by pipeline stage.

use thiserror::Error;

/// Caption pipeline error variants organized by stage.
#[derive(Debug, Error)]
pub enum Error {
    /// Response loading stage error
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// Caption assembly stage error
    #[error(transparent)]
    Caption(#[from] CaptionError),

    /// Recognition backend error
    #[error("recognition failed: {0}")]
    Recognize(Box<dyn std::error::Error + Send + Sync>),
}

/// Errors loading a materialized recognition response.
#[derive(Debug, Error)]
pub enum ResponseError {
    /// IO error reading the response
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed response JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Caption assembly errors.
#[derive(Debug, Error)]
pub enum CaptionError {
    /// Malformed timing data on a caption entry
    #[error("invalid duration for entry {entry} {field} time: {source}")]
    InvalidDuration {
        entry: usize,
        field: TimeField,
        source: DurationError,
    },
}

/// Which timestamp of a caption entry failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

impl std::fmt::Display for TimeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeField::Start => f.write_str("start"),
            TimeField::End => f.write_str("end"),
        }
    }
}

/// Malformed duration values.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    /// Negative whole-second count
    #[error("negative seconds: {0}")]
    NegativeSeconds(i64),

    /// Nanosecond fraction outside the valid range
    #[error("nanos out of range: {0} (expected 0..=999999999)")]
    NanosOutOfRange(i32),
}

/// Result type alias for subito-core operations.
pub type Result<T> = std::result::Result<T, Error>;

// Nested From implementations for automatic error conversion chains

// serde_json::Error → ResponseError → Error
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Response(ResponseError::Json(e))
    }
}

// std::io::Error → ResponseError → Error
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Response(ResponseError::Io(e))
    }
}
