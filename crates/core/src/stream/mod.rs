//! Byte-level access to a debug stream and the errors it can raise.
//!
//! - `ByteCursor`: forward-only reader with big-endian primitive decoders.
//! - `DebugError`: every failure the parser and normalizer can report.

mod cursor;

pub use cursor::ByteCursor;

use thiserror::Error;

/// Error type for debug-file parsing and address normalization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DebugError {
    /// Bad magic number or a header cut short.
    #[error("Malformed debug header at offset {offset}: {reason}")]
    MalformedHeader { offset: usize, reason: String },

    /// A decoder needed more bytes than the stream had left.
    #[error("Unexpected end of stream at offset {offset}: needed {needed} byte(s), {remaining} remaining")]
    UnexpectedEndOfStream { offset: usize, needed: usize, remaining: usize },

    /// Record tag with no known layout; the rest of the stream cannot be framed.
    #[error("Unknown debug record type {tag} at offset {offset}")]
    UnknownRecordType { tag: u8, offset: usize },

    /// The named-address map has no entry for the code-region base.
    #[error("Missing base address '{key}' in the named-address map")]
    MissingBaseAddress { key: String },
}

impl DebugError {
    /// Byte offset the error was raised at, when it has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            DebugError::MalformedHeader { offset, .. }
            | DebugError::UnexpectedEndOfStream { offset, .. }
            | DebugError::UnknownRecordType { offset, .. } => Some(*offset),
            DebugError::MissingBaseAddress { .. } => None,
        }
    }
}

/// Convenience result type for stream operations.
pub type DebugResult<T> = Result<T, DebugError>;
