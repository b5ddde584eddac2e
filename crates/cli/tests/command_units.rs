#[path = "../../core/tests/support/mod.rs"]
mod support;

use std::fs;
use std::path::PathBuf;

use dbgsym::commands::{
    dump_command, info_command, list_functions_command, lookup_address, resolve_export_config,
    summarize_debug_file, symbols_command, SymbolsOptions,
};
use dbgsym_core::config::ExportFormat;
use support::StreamBuilder;
use tempfile::{tempdir, TempDir};

fn write_fixture(dir: &TempDir) -> PathBuf {
    let data = StreamBuilder::new()
        .address_map(&[("code area", 0x200), ("strings area", 0x4000)])
        .line_refs(9, &[(3, 0x31)])
        .routine(3, 0x10, "Walk", &["dir"])
        .routine_end(3, 0x30)
        .end();
    let path = dir.path().join("gameinfo.dbg");
    fs::write(&path, data).expect("write fixture");
    path
}

#[test]
fn summary_counts_placeholders() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(&dir);
    let summary = summarize_debug_file(&input).expect("summary");
    assert_eq!(summary.functions, 2);
    assert_eq!(summary.placeholders, 1);
    assert_eq!(summary.named_addresses, 2);
    assert!(!summary.has_header);
}

#[test]
fn text_commands_succeed() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(&dir);
    info_command(&input, false).expect("info");
    list_functions_command(&input, false).expect("functions");
    list_functions_command(&input, true).expect("functions json");
    dump_command(&input, ExportFormat::Json).expect("dump json");
}

#[test]
fn dump_rejects_js_format() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(&dir);
    let err = dump_command(&input, ExportFormat::Js).unwrap_err();
    assert!(err.to_string().contains("dump supports json or yaml"));
}

#[test]
fn overrides_apply_on_top_of_config_file() {
    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("export.json");
    fs::write(&config_path, r#"{ "variable_name": "names", "format": "json" }"#).expect("write");

    let options = SymbolsOptions {
        config: Some(config_path.to_string_lossy().to_string()),
        format: Some(ExportFormat::Js),
        ..SymbolsOptions::default()
    };
    let config = resolve_export_config(&options).expect("resolve");
    assert_eq!(config.variable_name, "names");
    assert_eq!(config.format, ExportFormat::Js);
    assert_eq!(config.base_key, "code area");
}

#[test]
fn symbols_with_custom_key_and_variable() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(&dir);
    let out = dir.path().join("names.js");
    let options = SymbolsOptions {
        base_key: Some("strings area".into()),
        variable: Some("names".into()),
        output: Some(out.to_string_lossy().to_string()),
        ..SymbolsOptions::default()
    };
    symbols_command(&input, &options).expect("symbols");
    let body = fs::read_to_string(&out).expect("read output");
    assert_eq!(body, "names = {16384: '', 16400: 'Walk'}");
}

#[test]
fn symbols_reports_missing_config() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(&dir);
    let options = SymbolsOptions {
        config: Some(dir.path().join("missing.json").to_string_lossy().to_string()),
        ..SymbolsOptions::default()
    };
    let err = symbols_command(&input, &options).unwrap_err();
    assert!(err.to_string().contains("Failed to read export config"), "unexpected error: {err}");
}

#[test]
fn lookup_handles_ranges_and_errors() {
    let dir = tempdir().expect("tempdir");
    let input = write_fixture(&dir);

    assert_eq!(lookup_address(&input, "0x210", "code area").expect("start"), "Walk");
    assert_eq!(lookup_address(&input, "559", "code area").expect("decimal"), "Walk");

    let err = lookup_address(&input, "0x230", "code area").unwrap_err();
    assert!(err.to_string().contains("No function contains address 0x230"));

    let err = lookup_address(&input, "0x10", "code area").unwrap_err();
    assert!(err.to_string().contains("below the base address"));

    let err = lookup_address(&input, "0x210", "nope").unwrap_err();
    assert!(err.to_string().contains("Failed to resolve base address"));
}
