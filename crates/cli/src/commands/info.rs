use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::sha256_file;

/// Summary of a parsed debug file.
#[derive(Debug, Serialize)]
pub struct DebugFileSummary {
    pub path: String,
    pub sha256: String,
    pub debug_version: u16,
    pub compiler_version: u16,
    pub records: usize,
    pub iterations: usize,
    pub functions: usize,
    pub placeholders: usize,
    pub classes: usize,
    pub objects: usize,
    pub globals: usize,
    pub arrays: usize,
    pub attributes: usize,
    pub properties: usize,
    pub actions: usize,
    pub fake_actions: usize,
    pub files: usize,
    pub named_addresses: usize,
    pub has_header: bool,
}

/// Parse a debug file and build its summary.
pub fn summarize_debug_file(input: &Path) -> Result<DebugFileSummary> {
    let info = dbgsym_core::parse_debug_file(input)?;
    let sha256 = sha256_file(input)?;
    Ok(DebugFileSummary {
        path: input.display().to_string(),
        sha256,
        debug_version: info.debug_version,
        compiler_version: info.compiler_version,
        records: info.stats.record_count(),
        iterations: info.stats.iterations,
        functions: info.functions().len(),
        placeholders: info.functions().iter().filter(|f| f.is_placeholder()).count(),
        classes: info.classes.len(),
        objects: info.objects.len(),
        globals: info.globals.len(),
        arrays: info.arrays.len(),
        attributes: info.attributes.len(),
        properties: info.properties.len(),
        actions: info.actions.len(),
        fake_actions: info.fake_actions.len(),
        files: info.files.len(),
        named_addresses: info.named_addresses.len(),
        has_header: info.header.is_some(),
    })
}

/// Show versions, digest, and table sizes for a debug file.
pub fn info_command(input: &Path, json: bool) -> Result<()> {
    let summary = summarize_debug_file(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Debug File Info");
    println!("===============");
    println!("Path: {}", summary.path);
    println!("SHA-256: {}", summary.sha256);
    println!("Debug format version: {}", summary.debug_version);
    println!("Compiler version: {}", summary.compiler_version);
    println!("Records: {} ({} loop iterations)", summary.records, summary.iterations);
    println!("Header record: {}", if summary.has_header { "present" } else { "absent" });
    println!();
    println!("Tables:");
    println!("- functions: {} ({} placeholder)", summary.functions, summary.placeholders);
    println!("- classes: {}", summary.classes);
    println!("- objects: {}", summary.objects);
    println!("- globals: {}", summary.globals);
    println!("- arrays: {}", summary.arrays);
    println!("- attributes: {}", summary.attributes);
    println!("- properties: {}", summary.properties);
    println!("- actions: {}", summary.actions);
    println!("- fake actions: {}", summary.fake_actions);
    println!("- files: {}", summary.files);
    println!("- named addresses: {}", summary.named_addresses);

    Ok(())
}
