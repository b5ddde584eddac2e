use std::path::Path;

use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FunctionRow {
    pub id: u16,
    pub name: String,
    pub address: u32,
    pub end_address: Option<u32>,
    pub locals: usize,
    pub sequence_points: usize,
    pub placeholder: bool,
}

/// List every function in a debug file, sorted by raw address then id.
pub fn list_functions_command(input: &Path, json: bool) -> Result<()> {
    let info = dbgsym_core::parse_debug_file(input)?;
    let mut rows: Vec<FunctionRow> = info
        .functions()
        .iter()
        .map(|f| FunctionRow {
            id: f.id,
            name: f.name.clone(),
            address: f.address,
            end_address: f.end_address,
            locals: f.locals.len(),
            sequence_points: f.sequence_points.len(),
            placeholder: f.is_placeholder(),
        })
        .collect();
    rows.sort_by(|a, b| a.address.cmp(&b.address).then(a.id.cmp(&b.id)));

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("Functions:");
        println!("(none)");
        return Ok(());
    }

    println!("Functions:");
    for row in rows {
        let end_display =
            row.end_address.map(|a| format!("{a:#07x}")).unwrap_or_else(|| "(none)".into());
        println!(
            "- #{} {} (start: {:#07x}, end: {}, locals: {}, seqpts: {}{})",
            row.id,
            row.name,
            row.address,
            end_display,
            row.locals,
            row.sequence_points,
            if row.placeholder { ", placeholder" } else { "" }
        );
    }

    Ok(())
}
