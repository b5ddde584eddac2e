//! Tagged records of the debug stream.
//!
//! Every record starts with a one-byte tag that fixes the layout of the bytes
//! that follow. Tag 0 terminates the stream; the fourteen known record kinds
//! are decoded into [`Record`] variants. Lengths depend on the tag, so an
//! unknown tag cannot be skipped.

use serde::{Deserialize, Serialize};

use crate::model::{LinePos, SequencePoint};
use crate::stream::{ByteCursor, DebugError, DebugResult};

/// Tag byte that ends the record stream.
pub const END_OF_RECORDS: u8 = 0;

/// Size of the verbatim header blob carried by a header record.
pub const HEADER_BLOB_LEN: usize = 64;

/// Known record tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordTag {
    File = 1,
    Class = 2,
    Object = 3,
    Global = 4,
    Attribute = 5,
    Property = 6,
    FakeAction = 7,
    Action = 8,
    Header = 9,
    LineRefs = 10,
    RoutineStart = 11,
    Array = 12,
    AddressMap = 13,
    RoutineEnd = 14,
}

impl RecordTag {
    pub fn from_byte(byte: u8) -> Option<Self> {
        let tag = match byte {
            1 => RecordTag::File,
            2 => RecordTag::Class,
            3 => RecordTag::Object,
            4 => RecordTag::Global,
            5 => RecordTag::Attribute,
            6 => RecordTag::Property,
            7 => RecordTag::FakeAction,
            8 => RecordTag::Action,
            9 => RecordTag::Header,
            10 => RecordTag::LineRefs,
            11 => RecordTag::RoutineStart,
            12 => RecordTag::Array,
            13 => RecordTag::AddressMap,
            14 => RecordTag::RoutineEnd,
            _ => return None,
        };
        Some(tag)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordTag::File => "file",
            RecordTag::Class => "class",
            RecordTag::Object => "object",
            RecordTag::Global => "global",
            RecordTag::Attribute => "attribute",
            RecordTag::Property => "property",
            RecordTag::FakeAction => "fake-action",
            RecordTag::Action => "action",
            RecordTag::Header => "header",
            RecordTag::LineRefs => "line-refs",
            RecordTag::RoutineStart => "routine-start",
            RecordTag::Array => "array",
            RecordTag::AddressMap => "address-map",
            RecordTag::RoutineEnd => "routine-end",
        }
    }
}

/// One decoded record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    File { id: u8, include_name: String, real_name: String },
    Class { name: String, start: LinePos, end: LinePos },
    Object { id: u16, name: String, start: LinePos, end: LinePos },
    Global { id: u8, name: String },
    Attribute { id: u16, name: String },
    Property { id: u16, name: String },
    FakeAction { id: u16, name: String },
    Action { id: u16, name: String },
    Header(Vec<u8>),
    LineRefs { function: u16, points: Vec<SequencePoint> },
    RoutineStart { id: u16, start: LinePos, address: u32, name: String, locals: Vec<String> },
    Array { id: u16, name: String },
    AddressMap(Vec<(String, u32)>),
    RoutineEnd { id: u16, end: LinePos, end_address: u32 },
}

impl Record {
    pub fn tag(&self) -> RecordTag {
        match self {
            Record::File { .. } => RecordTag::File,
            Record::Class { .. } => RecordTag::Class,
            Record::Object { .. } => RecordTag::Object,
            Record::Global { .. } => RecordTag::Global,
            Record::Attribute { .. } => RecordTag::Attribute,
            Record::Property { .. } => RecordTag::Property,
            Record::FakeAction { .. } => RecordTag::FakeAction,
            Record::Action { .. } => RecordTag::Action,
            Record::Header(_) => RecordTag::Header,
            Record::LineRefs { .. } => RecordTag::LineRefs,
            Record::RoutineStart { .. } => RecordTag::RoutineStart,
            Record::Array { .. } => RecordTag::Array,
            Record::AddressMap(_) => RecordTag::AddressMap,
            Record::RoutineEnd { .. } => RecordTag::RoutineEnd,
        }
    }
}

/// Read the next tag byte and, unless it is the terminator, the record body.
///
/// Returns `Ok(None)` on tag 0.
pub fn read_record(cursor: &mut ByteCursor<'_>) -> DebugResult<Option<Record>> {
    let offset = cursor.position();
    let byte = cursor.read_u8()?;
    if byte == END_OF_RECORDS {
        return Ok(None);
    }
    let tag = RecordTag::from_byte(byte).ok_or(DebugError::UnknownRecordType { tag: byte, offset })?;
    read_body(tag, cursor).map(Some)
}

/// Decode the body of a record whose tag has already been consumed.
pub fn read_body(tag: RecordTag, cursor: &mut ByteCursor<'_>) -> DebugResult<Record> {
    let record = match tag {
        RecordTag::File => Record::File {
            id: cursor.read_u8()?,
            include_name: cursor.read_cstring()?,
            real_name: cursor.read_cstring()?,
        },
        RecordTag::Class => Record::Class {
            name: cursor.read_cstring()?,
            start: cursor.read_line_pos()?,
            end: cursor.read_line_pos()?,
        },
        RecordTag::Object => Record::Object {
            id: cursor.read_u16()?,
            name: cursor.read_cstring()?,
            start: cursor.read_line_pos()?,
            end: cursor.read_line_pos()?,
        },
        RecordTag::Global => Record::Global { id: cursor.read_u8()?, name: cursor.read_cstring()? },
        RecordTag::Attribute => {
            Record::Attribute { id: cursor.read_u16()?, name: cursor.read_cstring()? }
        }
        RecordTag::Property => {
            Record::Property { id: cursor.read_u16()?, name: cursor.read_cstring()? }
        }
        RecordTag::FakeAction => {
            Record::FakeAction { id: cursor.read_u16()?, name: cursor.read_cstring()? }
        }
        RecordTag::Action => Record::Action { id: cursor.read_u16()?, name: cursor.read_cstring()? },
        RecordTag::Header => Record::Header(cursor.read(HEADER_BLOB_LEN)?.to_vec()),
        RecordTag::LineRefs => {
            let function = cursor.read_u16()?;
            let count = cursor.read_u16()?;
            let mut points = Vec::with_capacity(usize::from(count).min(cursor.remaining() / 6));
            for _ in 0..count {
                let pos = cursor.read_line_pos()?;
                let address = cursor.read_u16()?;
                points.push(SequencePoint { pos, address });
            }
            Record::LineRefs { function, points }
        }
        RecordTag::RoutineStart => {
            let id = cursor.read_u16()?;
            let start = cursor.read_line_pos()?;
            let address = cursor.read_u24()?;
            let name = cursor.read_cstring()?;
            let mut locals = Vec::new();
            loop {
                let local = cursor.read_cstring()?;
                if local.is_empty() {
                    break;
                }
                locals.push(local);
            }
            Record::RoutineStart { id, start, address, name, locals }
        }
        RecordTag::Array => Record::Array { id: cursor.read_u16()?, name: cursor.read_cstring()? },
        RecordTag::AddressMap => {
            let mut entries = Vec::new();
            loop {
                let name = cursor.read_cstring()?;
                if name.is_empty() {
                    break;
                }
                let address = cursor.read_u24()?;
                entries.push((name, address));
            }
            Record::AddressMap(entries)
        }
        RecordTag::RoutineEnd => Record::RoutineEnd {
            id: cursor.read_u16()?,
            end: cursor.read_line_pos()?,
            end_address: cursor.read_u24()?,
        },
    };
    Ok(record)
}
