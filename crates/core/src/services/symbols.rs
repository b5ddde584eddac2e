//! Address normalization: raw routine addresses to an absolute address map.

use std::collections::BTreeMap;

use anyhow::Result;
use log::debug;
use serde::Serialize;

use crate::config::ExportFormat;
use crate::registry::DebugInfo;
use crate::stream::{DebugError, DebugResult};

/// Named-address entry the compiler uses for the start of the code region.
pub const CODE_AREA_KEY: &str = "code area";

/// Absolute address to identifier, sorted by address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolMap {
    pub base: u32,
    pub entries: BTreeMap<u32, String>,
}

/// Normalize using the standard code-area key.
pub fn normalize(info: &DebugInfo) -> DebugResult<SymbolMap> {
    normalize_with_key(info, CODE_AREA_KEY)
}

/// Offset every function by the base found under `key`.
///
/// Functions are visited in order of first reference; when two land on the
/// same absolute address the later one overwrites the earlier.
pub fn normalize_with_key(info: &DebugInfo, key: &str) -> DebugResult<SymbolMap> {
    let base = info
        .base_address(key)
        .ok_or_else(|| DebugError::MissingBaseAddress { key: key.to_string() })?;

    let mut entries = BTreeMap::new();
    for func in info.functions() {
        let absolute = func.address + base;
        if let Some(previous) = entries.insert(absolute, identifier(&func.name)) {
            debug!("address {absolute:#x}: '{previous}' replaced by function {}", func.id);
        }
    }
    Ok(SymbolMap { base, entries })
}

/// Strip every character that is not an ASCII letter or digit.
pub fn identifier(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

impl SymbolMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, absolute: u32) -> Option<&str> {
        self.entries.get(&absolute).map(String::as_str)
    }

    /// Render the map for embedding by a build step.
    ///
    /// `variable` is only used by [`ExportFormat::Js`].
    pub fn render(&self, format: ExportFormat, variable: &str) -> Result<String> {
        let out = match format {
            ExportFormat::Js => {
                let body: Vec<String> =
                    self.entries.iter().map(|(addr, name)| format!("{addr}: '{name}'")).collect();
                format!("{variable} = {{{}}}", body.join(", "))
            }
            ExportFormat::Json => serde_json::to_string_pretty(&self.entries)?,
            ExportFormat::Yaml => serde_yaml::to_string(&self.entries)?,
        };
        Ok(out)
    }
}
