use std::path::Path;

use anyhow::{anyhow, Context, Result};
use dbgsym_core::services::symbols::identifier;
use dbgsym_core::DebugError;

use crate::parse_address;

/// Resolve an absolute address to the function whose range contains it.
///
/// Returns the function's display name.
pub fn lookup_address(input: &Path, address: &str, base_key: &str) -> Result<String> {
    let absolute = parse_address(address)?;
    let info = dbgsym_core::parse_debug_file(input)?;
    let base = info
        .base_address(base_key)
        .ok_or_else(|| DebugError::MissingBaseAddress { key: base_key.to_string() })
        .with_context(|| format!("Failed to resolve base address in {}", input.display()))?;
    let raw = absolute
        .checked_sub(base)
        .ok_or_else(|| anyhow!("Address {:#x} is below the base address {:#x}", absolute, base))?;
    let func = info
        .function_containing(raw)
        .ok_or_else(|| anyhow!("No function contains address {:#x}", absolute))?;
    Ok(func.name.clone())
}

pub fn lookup_command(input: &Path, address: &str, base_key: &str) -> Result<()> {
    let name = lookup_address(input, address, base_key)?;
    println!("{} ({})", name, identifier(&name));
    Ok(())
}
