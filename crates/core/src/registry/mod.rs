//! Entity registry: typed tables filled in as records arrive.
//!
//! The parse pass owns a single [`RegistryBuilder`] and applies every decoded
//! record to it. Records for the same function id may arrive in any order
//! (line references and routine ends can precede the routine start), so
//! functions are created on first reference and completed incrementally.
//! Once the stream ends, the builder is frozen into an immutable [`DebugInfo`].

use std::collections::{BTreeMap, HashMap};

use log::{trace, warn};
use serde::{Serialize, Serializer};

use crate::model::{Function, SourceFile, SpannedName};
use crate::records::{Record, RecordTag};

/// Counters gathered while dispatching records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Dispatch-loop iterations, including the one that read the terminator.
    pub iterations: usize,
    /// Number of records seen per tag.
    pub records: BTreeMap<RecordTag, usize>,
}

impl ParseStats {
    /// Total records decoded, terminator excluded.
    pub fn record_count(&self) -> usize {
        self.records.values().sum()
    }
}

/// Mutable accumulator threaded through the dispatch loop.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    functions: Vec<Function>,
    function_slots: HashMap<u16, usize>,
    classes: Vec<SpannedName>,
    objects: BTreeMap<u16, SpannedName>,
    globals: BTreeMap<u8, String>,
    arrays: BTreeMap<u16, String>,
    attributes: BTreeMap<u16, String>,
    properties: BTreeMap<u16, String>,
    actions: BTreeMap<u16, String>,
    fake_actions: BTreeMap<u16, String>,
    files: BTreeMap<u8, SourceFile>,
    named_addresses: BTreeMap<String, u32>,
    header: Option<Vec<u8>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the function for `id`, creating a placeholder on first reference.
    pub fn function_mut(&mut self, id: u16) -> &mut Function {
        let slot = match self.function_slots.get(&id) {
            Some(&slot) => slot,
            None => {
                self.functions.push(Function::placeholder(id));
                let slot = self.functions.len() - 1;
                self.function_slots.insert(id, slot);
                slot
            }
        };
        &mut self.functions[slot]
    }

    /// Fold one record into the tables.
    pub fn apply(&mut self, record: Record) {
        trace!("applying {} record", record.tag().as_str());
        match record {
            Record::File { id, include_name, real_name } => {
                self.files.insert(id, SourceFile { include_name, real_path: real_name });
            }
            Record::Class { name, start, end } => {
                self.classes.push(SpannedName { name, start, end });
            }
            Record::Object { id, name, start, end } => {
                self.objects.insert(id, SpannedName { name, start, end });
            }
            Record::Global { id, name } => {
                self.globals.insert(id, name);
            }
            Record::Attribute { id, name } => {
                self.attributes.insert(id, name);
            }
            Record::Property { id, name } => {
                self.properties.insert(id, name);
            }
            Record::FakeAction { id, name } => {
                self.fake_actions.insert(id, name);
            }
            Record::Action { id, name } => {
                self.actions.insert(id, name);
            }
            Record::Header(blob) => {
                self.header = Some(blob);
            }
            Record::LineRefs { function, points } => {
                self.function_mut(function).sequence_points.extend(points);
            }
            Record::RoutineStart { id, start, address, name, locals } => {
                let func = self.function_mut(id);
                if !func.is_placeholder() {
                    warn!(
                        "routine {id} started twice ('{}' then '{name}'); keeping the later record",
                        func.name
                    );
                }
                func.start = Some(start);
                func.address = address;
                func.name = name;
                func.locals = locals;
            }
            Record::Array { id, name } => {
                self.arrays.insert(id, name);
            }
            Record::AddressMap(entries) => {
                self.named_addresses.extend(entries);
            }
            Record::RoutineEnd { id, end, end_address } => {
                let func = self.function_mut(id);
                func.end = Some(end);
                func.end_address = Some(end_address);
            }
        }
    }

    /// Finish the pass: build the name index and freeze the tables.
    pub fn finish(
        self,
        debug_version: u16,
        compiler_version: u16,
        stats: ParseStats,
    ) -> DebugInfo {
        let mut by_name = HashMap::with_capacity(self.functions.len());
        for (slot, func) in self.functions.iter().enumerate() {
            if let Some(previous) = by_name.insert(func.name.clone(), slot) {
                if !func.is_placeholder() && !self.functions[previous].is_placeholder() {
                    warn!(
                        "function name '{}' used by ids {} and {}; indexing the later one",
                        func.name, self.functions[previous].id, func.id
                    );
                }
            }
        }

        DebugInfo {
            debug_version,
            compiler_version,
            functions: self.functions,
            function_slots: self.function_slots,
            function_names: by_name,
            classes: self.classes,
            objects: self.objects,
            globals: self.globals,
            arrays: self.arrays,
            attributes: self.attributes,
            properties: self.properties,
            actions: self.actions,
            fake_actions: self.fake_actions,
            files: self.files,
            named_addresses: self.named_addresses,
            header: self.header,
            stats,
        }
    }
}

/// Everything recovered from one debug file.
#[derive(Debug, Clone, Serialize)]
pub struct DebugInfo {
    pub debug_version: u16,
    pub compiler_version: u16,
    /// Functions in order of first reference.
    functions: Vec<Function>,
    #[serde(skip)]
    function_slots: HashMap<u16, usize>,
    #[serde(skip)]
    function_names: HashMap<String, usize>,
    pub classes: Vec<SpannedName>,
    pub objects: BTreeMap<u16, SpannedName>,
    pub globals: BTreeMap<u8, String>,
    pub arrays: BTreeMap<u16, String>,
    pub attributes: BTreeMap<u16, String>,
    pub properties: BTreeMap<u16, String>,
    pub actions: BTreeMap<u16, String>,
    pub fake_actions: BTreeMap<u16, String>,
    pub files: BTreeMap<u8, SourceFile>,
    pub named_addresses: BTreeMap<String, u32>,
    #[serde(serialize_with = "serialize_header")]
    pub header: Option<Vec<u8>>,
    pub stats: ParseStats,
}

impl DebugInfo {
    /// All functions, in order of first reference.
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    pub fn function(&self, id: u16) -> Option<&Function> {
        self.function_slots.get(&id).map(|&slot| &self.functions[slot])
    }

    /// Look up a function by display name.
    ///
    /// When several functions share a name, the one referenced last wins.
    pub fn function_by_name(&self, name: &str) -> Option<&Function> {
        self.function_names.get(name).map(|&slot| &self.functions[slot])
    }

    /// First function whose `[address, end_address)` range holds `raw_address`.
    pub fn function_containing(&self, raw_address: u32) -> Option<&Function> {
        self.functions.iter().find(|func| func.contains(raw_address))
    }

    /// Value of an entry in the named-address map.
    pub fn base_address(&self, key: &str) -> Option<u32> {
        self.named_addresses.get(key).copied()
    }

    /// Header blob rendered as lowercase hex, if a header record was present.
    pub fn header_hex(&self) -> Option<String> {
        self.header.as_deref().map(to_hex)
    }
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn serialize_header<S: Serializer>(header: &Option<Vec<u8>>, s: S) -> Result<S::Ok, S::Error> {
    match header {
        Some(bytes) => s.serialize_some(&to_hex(bytes)),
        None => s.serialize_none(),
    }
}
