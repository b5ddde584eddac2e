//! Export configuration for the symbol map.
//!
//! Stored as JSON, e.g.:
//!
//! ```json
//! { "base_key": "code area", "variable_name": "vm_functions", "format": "js" }
//! ```
//!
//! Every field is optional and falls back to its default.

use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::services::symbols::CODE_AREA_KEY;

/// Variable the `js` format assigns the map to.
pub const DEFAULT_VARIABLE_NAME: &str = "vm_functions";

/// Output format for a rendered symbol map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// A single `name = {addr: 'Ident', ...}` declaration.
    #[default]
    Js,
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Js => "js",
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "js" | "javascript" => Ok(ExportFormat::Js),
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            other => Err(anyhow!("Invalid format '{}'. Allowed: js, json, yaml", other)),
        }
    }
}

/// How the normalized symbol map is produced and written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Named-address entry holding the code-region base.
    pub base_key: String,
    /// Variable assigned by the `js` format.
    pub variable_name: String,
    pub format: ExportFormat,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            base_key: CODE_AREA_KEY.to_string(),
            variable_name: DEFAULT_VARIABLE_NAME.to_string(),
            format: ExportFormat::default(),
        }
    }
}

/// Load an export config JSON file from disk.
pub fn load_export_config(path: &Path) -> Result<ExportConfig> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read export config at {}", path.display()))?;
    let config: ExportConfig =
        serde_json::from_str(&body).context("Failed to parse export config JSON")?;
    Ok(config)
}
