//! Message file loading.

use std::path::Path;

use iftsta_model::Document;

use crate::decode::decode;
use crate::error::{IngestError, Result};

/// Reads and decodes an IFTSTA message file.
///
/// # Errors
///
/// Returns [`IngestError::FileNotFound`] if `path` does not exist,
/// [`IngestError::FileRead`] if it cannot be read as UTF-8 text, and
/// [`IngestError::Decode`] if the message itself cannot be decoded.
pub fn load_message(path: &Path) -> Result<Document> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let document = decode(&raw).map_err(|source| IngestError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        consignments = document.len(),
        "Loaded IFTSTA message"
    );
    Ok(document)
}
