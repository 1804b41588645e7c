//! Decoding a batch of message files into a reportable result.

use std::path::{Path, PathBuf};

use iftsta_ingest::load_message;
use iftsta_model::Document;
use serde::Serialize;
use tracing::{error, info_span};

/// Outcome of decoding one file.
#[derive(Debug, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<Document>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of a `decode` run over several files, in argument order.
#[derive(Debug, Serialize)]
pub struct DecodeRun {
    pub files: Vec<FileOutcome>,
    pub has_errors: bool,
}

impl DecodeRun {
    /// Total consignments across all successfully decoded files.
    pub fn consignment_count(&self) -> usize {
        self.files
            .iter()
            .filter_map(|outcome| outcome.document.as_ref())
            .map(Document::len)
            .sum()
    }
}

/// Decodes each file, continuing past failures.
pub fn decode_files(paths: &[PathBuf]) -> DecodeRun {
    let files: Vec<FileOutcome> = paths.iter().map(|path| decode_file(path)).collect();
    let has_errors = files.iter().any(|outcome| outcome.error.is_some());
    DecodeRun { files, has_errors }
}

fn decode_file(path: &Path) -> FileOutcome {
    let span = info_span!("decode", path = %path.display());
    let _guard = span.enter();
    match load_message(path) {
        Ok(document) => FileOutcome {
            path: path.to_path_buf(),
            document: Some(document),
            error: None,
        },
        Err(err) => {
            error!(error = %err, "Failed to decode message");
            FileOutcome {
                path: path.to_path_buf(),
                document: None,
                error: Some(err.to_string()),
            }
        }
    }
}

/// Renders a run as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(run: &DecodeRun) -> serde_json::Result<String> {
    serde_json::to_string_pretty(run)
}
