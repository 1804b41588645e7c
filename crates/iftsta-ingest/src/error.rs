//! Error types for IFTSTA decoding and loading.

use std::path::PathBuf;
use thiserror::Error;

use crate::datetime::DateFormat;

/// Errors raised while decoding message text.
///
/// Missing elements and malformed fragments are absorbed by the decoder;
/// only a status date that does not match its declared format is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A `DTM+334` value does not match the format selected by its format code.
    #[error(
        "invalid status change date '{value}' for consignment {} (group {group}): expected {format}",
        .consignment.as_deref().unwrap_or("<unknown>")
    )]
    InvalidStatusDate {
        /// Zero-based position of the consignment group in the message.
        group: usize,
        /// Consignment number, if the group's `CNI` segment carried one.
        consignment: Option<String>,
        /// The raw date/time string.
        value: String,
        /// The format the value was checked against.
        format: DateFormat,
    },
}

/// Errors that can occur while loading a message from disk.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Message file not found.
    #[error("message file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Decoding Errors ===
    /// Message text could not be decoded.
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/status.edi"),
        };
        assert_eq!(err.to_string(), "message file not found: /path/to/status.edi");
    }

    #[test]
    fn test_decode_error_unknown_consignment() {
        let err = DecodeError::InvalidStatusDate {
            group: 0,
            consignment: None,
            value: "2024".to_string(),
            format: DateFormat::Date,
        };
        assert_eq!(
            err.to_string(),
            "invalid status change date '2024' for consignment <unknown> (group 0): expected CCYYMMDD (102)"
        );
    }

    #[test]
    fn test_decode_error_snapshot() {
        let err = DecodeError::InvalidStatusDate {
            group: 2,
            consignment: Some("4711".to_string()),
            value: "2024011512".to_string(),
            format: DateFormat::DateTime,
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"invalid status change date '2024011512' for consignment 4711 (group 2): expected CCYYMMDDHHMM (203)"
        );
    }
}
