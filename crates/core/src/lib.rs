//! dbgsym-core
//!
//! Core library for turning an Inform compiler debug file into a symbol table.
//!
//! This crate defines the data model (functions, objects, source files, ...),
//! the byte-level stream primitives, the tagged record decoder, the entity
//! registry that accumulates records, and the address normalizer that produces
//! the final address-to-name map.
//!
//! All substantive logic lives here so it is fully testable and reusable from
//! multiple frontends (CLI, build scripts, etc.).

pub mod config;
pub mod model;
pub mod records;
pub mod registry;
pub mod services;
pub mod stream;

pub use registry::DebugInfo;
pub use services::parser::{parse_debug_bytes, parse_debug_file};
pub use services::symbols::{normalize, normalize_with_key, SymbolMap, CODE_AREA_KEY};
pub use stream::{DebugError, DebugResult};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
