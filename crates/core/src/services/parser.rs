//! Header validation and the record dispatch loop.

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::records::read_record;
use crate::registry::{DebugInfo, ParseStats, RegistryBuilder};
use crate::stream::{ByteCursor, DebugError, DebugResult};

/// Magic number opening every debug file.
pub const DEBUG_MAGIC: u16 = 0xDEBF;

/// Magic plus the two version words.
pub const HEADER_LEN: usize = 6;

/// Parse an in-memory debug file.
///
/// Any failure aborts the whole pass; no partial registry is returned.
pub fn parse_debug_bytes(data: &[u8]) -> DebugResult<DebugInfo> {
    let mut cursor = ByteCursor::new(data);
    let (debug_version, compiler_version) = read_header(&mut cursor)?;
    debug!("debug file version {debug_version}, compiler version {compiler_version}");

    let mut builder = RegistryBuilder::new();
    let mut stats = ParseStats::default();
    loop {
        stats.iterations += 1;
        match read_record(&mut cursor)? {
            Some(record) => {
                *stats.records.entry(record.tag()).or_insert(0) += 1;
                builder.apply(record);
            }
            None => break,
        }
    }

    if !cursor.at_end() {
        debug!("{} byte(s) after the end-of-records tag ignored", cursor.remaining());
    }
    for (tag, count) in &stats.records {
        debug!("{count} {} record(s)", tag.as_str());
    }

    Ok(builder.finish(debug_version, compiler_version, stats))
}

/// Read and parse a debug file from disk.
pub fn parse_debug_file(path: impl AsRef<Path>) -> Result<DebugInfo> {
    let path = path.as_ref();
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read debug file at {}", path.display()))?;
    let info = parse_debug_bytes(&data)
        .with_context(|| format!("Failed to parse debug file {}", path.display()))?;
    Ok(info)
}

fn read_header(cursor: &mut ByteCursor<'_>) -> DebugResult<(u16, u16)> {
    if cursor.remaining() < HEADER_LEN {
        return Err(DebugError::MalformedHeader {
            offset: cursor.position(),
            reason: format!("expected {HEADER_LEN} header bytes, found {}", cursor.remaining()),
        });
    }
    let magic = cursor.read_u16()?;
    if magic != DEBUG_MAGIC {
        return Err(DebugError::MalformedHeader {
            offset: 0,
            reason: format!("bad magic 0x{magic:04X}, expected 0x{DEBUG_MAGIC:04X}"),
        });
    }
    let debug_version = cursor.read_u16()?;
    let compiler_version = cursor.read_u16()?;
    Ok((debug_version, compiler_version))
}
