//! Core data model for entities described by a debug file.
//!
//! Everything here is plain data: records are decoded by [`crate::records`]
//! and accumulated by [`crate::registry`].

use serde::{Deserialize, Serialize};

/// Display name given to a function referenced before its routine-start record.
pub const UNKNOWN_FUNCTION_NAME: &str = "<???>";

/// A point in the original source: file, line and column.
///
/// On the wire this is four bytes: `u8` file number, `u16` line, `u8` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LinePos {
    pub file: u8,
    pub line: u16,
    pub column: u8,
}

impl LinePos {
    pub fn new(file: u8, line: u16, column: u8) -> Self {
        Self { file, line, column }
    }
}

/// Statement boundary inside a routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencePoint {
    pub pos: LinePos,
    pub address: u16,
}

/// A compiled routine.
///
/// A function may be created by a line-reference or routine-end record before
/// its routine-start record arrives; until then it is a placeholder carrying
/// [`UNKNOWN_FUNCTION_NAME`] and address 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub id: u16,
    pub name: String,
    /// Raw start address, relative to the code area.
    pub address: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<LinePos>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<LinePos>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_address: Option<u32>,
    pub locals: Vec<String>,
    pub sequence_points: Vec<SequencePoint>,
}

impl Function {
    /// Create a placeholder for a function id seen before its start record.
    pub fn placeholder(id: u16) -> Self {
        Self {
            id,
            name: UNKNOWN_FUNCTION_NAME.to_string(),
            address: 0,
            start: None,
            end: None,
            end_address: None,
            locals: Vec::new(),
            sequence_points: Vec::new(),
        }
    }

    /// True until a routine-start record has filled in this function.
    pub fn is_placeholder(&self) -> bool {
        self.start.is_none()
    }

    /// Whether `raw_address` falls in `[address, end_address)`.
    ///
    /// Functions without an end address never contain anything.
    pub fn contains(&self, raw_address: u32) -> bool {
        match self.end_address {
            Some(end) => raw_address >= self.address && raw_address < end,
            None => false,
        }
    }
}

/// Name plus the source range it was declared in (classes and objects).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpannedName {
    pub name: String,
    pub start: LinePos,
    pub end: LinePos,
}

/// A source file referenced by line positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Name as written in the `Include` directive.
    pub include_name: String,
    /// Path the compiler actually opened.
    pub real_path: String,
}
