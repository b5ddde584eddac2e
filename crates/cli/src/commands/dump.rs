use std::path::Path;

use anyhow::{anyhow, Result};
use dbgsym_core::config::ExportFormat;

/// Print the full entity registry of a debug file.
pub fn dump_command(input: &Path, format: ExportFormat) -> Result<()> {
    let info = dbgsym_core::parse_debug_file(input)?;
    let rendered = match format {
        ExportFormat::Json => serde_json::to_string_pretty(&info)?,
        ExportFormat::Yaml => serde_yaml::to_string(&info)?,
        ExportFormat::Js => return Err(anyhow!("dump supports json or yaml, not js")),
    };
    println!("{rendered}");
    Ok(())
}
