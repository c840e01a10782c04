//! Error types for coordinate parsing and buffer decoding.
//!
//! Parse failures are ordinary values the caller can act on. Codec errors only
//! arise from the slice-based API; the fixed-array API cannot fail.

use thiserror::Error;

/// Error type for text parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input contained nothing but whitespace.
    #[error("Empty coordinate text")]
    Empty,

    /// A character that does not fit the grammar at this position.
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedChar {
        /// Offending character
        ch: char,
        /// Byte offset into the input
        position: usize,
    },

    /// The input ended before both values were read.
    #[error("Unexpected end of coordinate text")]
    UnexpectedEnd,

    /// A numeric token could not be converted.
    #[error("Malformed number: {0}")]
    MalformedNumber(String),

    /// Minutes must be below 60.
    #[error("Minutes out of range: {0}")]
    MinutesOutOfRange(f64),

    /// Seconds must be below 60.
    #[error("Seconds out of range: {0}")]
    SecondsOutOfRange(f64),

    /// A value carries a direction hint both before and after the number.
    #[error("Conflicting direction hints at position {position}")]
    ConflictingHints {
        /// Byte offset of the second hint
        position: usize,
    },

    /// The latitude lies outside [-90, 90].
    #[error("Latitude out of range: {0}")]
    LatitudeOutOfRange(f64),

    /// The longitude lies outside [-180, 180].
    #[error("Longitude out of range: {0}")]
    LongitudeOutOfRange(f64),
}

/// Error type for slice-based encoding and decoding.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer is smaller than a coordinate record.
    #[error("Buffer too short: expected at least {expected} bytes, got {actual}")]
    BufferTooShort {
        /// Required size
        expected: usize,
        /// Supplied size
        actual: usize,
    },
}

/// Result type alias for parse operations.
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type alias for codec operations.
pub type CodecResult<T> = std::result::Result<T, CodecError>;
