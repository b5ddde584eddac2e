//! Minimal encoder for assembling debug streams in tests.
#![allow(dead_code)]

pub struct StreamBuilder {
    bytes: Vec<u8>,
}

impl StreamBuilder {
    /// Start a stream with a valid header.
    pub fn new() -> Self {
        let mut bytes = vec![0xDE, 0xBF];
        bytes.extend_from_slice(&0u16.to_be_bytes());
        bytes.extend_from_slice(&1636u16.to_be_bytes());
        Self { bytes }
    }

    /// Start with no header at all.
    pub fn raw() -> Self {
        Self { bytes: Vec::new() }
    }

    pub fn u8(mut self, v: u8) -> Self {
        self.bytes.push(v);
        self
    }

    pub fn u16(mut self, v: u16) -> Self {
        self.bytes.extend_from_slice(&v.to_be_bytes());
        self
    }

    pub fn u24(mut self, v: u32) -> Self {
        self.bytes.extend_from_slice(&v.to_be_bytes()[1..]);
        self
    }

    pub fn cstr(mut self, s: &str) -> Self {
        self.bytes.extend_from_slice(s.as_bytes());
        self.bytes.push(0);
        self
    }

    pub fn pos(self, file: u8, line: u16, column: u8) -> Self {
        self.u8(file).u16(line).u8(column)
    }

    pub fn file(self, id: u8, include: &str, real: &str) -> Self {
        self.u8(1).u8(id).cstr(include).cstr(real)
    }

    pub fn routine(self, id: u16, address: u32, name: &str, locals: &[&str]) -> Self {
        let mut b = self.u8(11).u16(id).pos(1, 10, 0).u24(address).cstr(name);
        for local in locals {
            b = b.cstr(local);
        }
        b.cstr("")
    }

    pub fn routine_end(self, id: u16, end_address: u32) -> Self {
        self.u8(14).u16(id).pos(1, 20, 0).u24(end_address)
    }

    pub fn line_refs(self, function: u16, points: &[(u16, u16)]) -> Self {
        let mut b = self.u8(10).u16(function).u16(points.len() as u16);
        for &(line, address) in points {
            b = b.pos(1, line, 0).u16(address);
        }
        b
    }

    pub fn address_map(self, entries: &[(&str, u32)]) -> Self {
        let mut b = self.u8(13);
        for &(name, address) in entries {
            b = b.cstr(name).u24(address);
        }
        b.cstr("")
    }

    pub fn end(self) -> Vec<u8> {
        self.u8(0).bytes
    }

    pub fn unterminated(self) -> Vec<u8> {
        self.bytes
    }
}
