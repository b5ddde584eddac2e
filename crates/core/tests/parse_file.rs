mod support;

use std::fs;

use dbgsym_core::parse_debug_file;
use support::StreamBuilder;
use tempfile::tempdir;

#[test]
fn parses_from_disk() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("gameinfo.dbg");
    fs::write(&path, StreamBuilder::new().routine(1, 0, "Main", &[]).end()).expect("write");
    let info = parse_debug_file(&path).expect("parse");
    assert_eq!(info.functions().len(), 1);
}

#[test]
fn missing_file_has_read_context() {
    let tmp = tempdir().expect("tempdir");
    let err = parse_debug_file(tmp.path().join("missing.dbg")).unwrap_err();
    assert!(err.to_string().contains("Failed to read debug file"), "unexpected error: {err}");
}

#[test]
fn parse_failure_keeps_typed_error() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("bad.dbg");
    fs::write(&path, StreamBuilder::new().u8(42).end()).expect("write");
    let err = parse_debug_file(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse debug file"));
    let source = err.downcast_ref::<dbgsym_core::DebugError>().expect("typed error");
    assert!(matches!(source, dbgsym_core::DebugError::UnknownRecordType { tag: 42, offset: 6 }));
}
