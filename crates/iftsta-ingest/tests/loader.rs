//! Tests for loading messages from disk.

use std::io::Write;

use iftsta_ingest::{IngestError, load_message};
use tempfile::NamedTempFile;

fn write_message(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_message_from_file() {
    let file = write_message("UNA:+.? '\nUNB+UNOC:3+S+R+240115:1230+1'\nBGM+23'\nCNI+1+4711'\nSTS+1+21'\n");
    let document = load_message(file.path()).unwrap();
    assert_eq!(document.len(), 1);
    assert_eq!(document.consignments[0].number, "4711");
    assert!(document.created_at().is_some());
}

#[test]
fn test_load_message_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_message(&dir.path().join("missing.edi")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn test_load_message_decode_error_carries_path() {
    let file = write_message("BGM+23'CNI+1+4711'DTM+334:2024:102'");
    let err = load_message(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::Decode { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}
