//! Integration tests for batch decoding.

use std::fs;
use std::path::PathBuf;

use iftsta_cli::report::{decode_files, render_json};

const MESSAGE: &str = "UNA:+.? '\nUNB+UNOC:3+SENDER+RECIPIENT+240115:1230+1'\nBGM+23'\n\
CNI+1+4711'\nSTS+1+21'\nCNI+2+4712'\nDTM+334:20240116:102'\n";

#[test]
fn test_decode_files_collects_outcomes_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.edi");
    let bad = dir.path().join("bad.edi");
    fs::write(&good, MESSAGE).unwrap();
    fs::write(&bad, "BGM+23'CNI+1+4711'DTM+334:not-a-date:203'").unwrap();
    let missing = dir.path().join("missing.edi");

    let run = decode_files(&[good.clone(), bad.clone(), missing.clone()]);

    let paths: Vec<&PathBuf> = run.files.iter().map(|o| &o.path).collect();
    assert_eq!(paths, [&good, &bad, &missing]);
    assert!(run.has_errors);
    assert!(run.files[0].document.is_some());
    assert!(run.files[1].error.as_deref().unwrap().contains("not-a-date"));
    assert!(run.files[2].error.as_deref().unwrap().contains("not found"));
    assert_eq!(run.consignment_count(), 2);
}

#[test]
fn test_decode_files_all_good() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.edi");
    fs::write(&good, MESSAGE).unwrap();

    let run = decode_files(&[good]);
    assert!(!run.has_errors);
    assert_eq!(run.consignment_count(), 2);
}

#[test]
fn test_render_json_includes_documents() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.edi");
    fs::write(&good, MESSAGE).unwrap();

    let run = decode_files(&[good]);
    let json = render_json(&run).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let document = &value["files"][0]["document"];
    assert_eq!(document["interchange"]["sender"], "SENDER");
    assert_eq!(document["interchange"]["created_at"], "2024-01-15T12:30:00");
    assert_eq!(document["consignments"][0]["number"], "4711");
    assert_eq!(document["consignments"][0]["status"], "21");
    assert_eq!(document["consignments"][1]["status_changed_at"], "2024-01-16T00:00:00");
    assert!(value["files"][0].get("error").is_none());
}
