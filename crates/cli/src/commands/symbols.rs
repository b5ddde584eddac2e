use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dbgsym_core::config::{load_export_config, ExportConfig, ExportFormat};
use log::info;

/// Command-line overrides applied on top of an export config.
#[derive(Debug, Clone, Default)]
pub struct SymbolsOptions {
    pub config: Option<String>,
    pub base_key: Option<String>,
    pub variable: Option<String>,
    pub format: Option<ExportFormat>,
    pub output: Option<String>,
}

/// Resolve the effective export config: file (or defaults), then CLI overrides.
pub fn resolve_export_config(options: &SymbolsOptions) -> Result<ExportConfig> {
    let mut config = match &options.config {
        Some(path) => load_export_config(Path::new(path))?,
        None => ExportConfig::default(),
    };
    if let Some(key) = &options.base_key {
        config.base_key = key.clone();
    }
    if let Some(variable) = &options.variable {
        config.variable_name = variable.clone();
    }
    if let Some(format) = options.format {
        config.format = format;
    }
    Ok(config)
}

/// Produce the normalized address map and print or write it.
pub fn symbols_command(input: &Path, options: &SymbolsOptions) -> Result<()> {
    let config = resolve_export_config(options)?;
    let info = dbgsym_core::parse_debug_file(input)?;
    let map = dbgsym_core::normalize_with_key(&info, &config.base_key)
        .with_context(|| format!("Failed to normalize addresses for {}", input.display()))?;
    let rendered = map.render(config.format, &config.variable_name)?;

    match &options.output {
        Some(out) => {
            let out_path = Path::new(out);
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create output dir: {}", parent.display())
                    })?;
                }
            }
            fs::write(out_path, &rendered)
                .with_context(|| format!("Failed to write symbol map: {}", out_path.display()))?;
            info!("wrote {} symbol(s) as {} to {}", map.len(), config.format.as_str(), out);
            println!("Wrote {} symbol(s) to {}", map.len(), out_path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
