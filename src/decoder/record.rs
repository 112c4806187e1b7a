// Wed Jan 15 2026 - Alex

use crate::codec;
use crate::decoder::DecodeError;
use bytes::Bytes;
use indexmap::IndexMap;

/// Raw, uninterpreted bytes of one field, tagged with where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawField {
    name: &'static str,
    offset: u64,
    bytes: Bytes,
}

impl RawField {
    pub fn new(name: &'static str, offset: u64, bytes: Bytes) -> Self {
        Self { name, offset, bytes }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn end(&self) -> u64 {
        self.offset + self.bytes.len() as u64
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn uint(&self) -> Result<u64, codec::CodecError> {
        codec::uint_le(&self.bytes)
    }
}

/// One decoded structure: its fields in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    structure: &'static str,
    offset: u64,
    fields: IndexMap<&'static str, RawField>,
}

impl RawRecord {
    pub fn new(structure: &'static str, offset: u64) -> Self {
        Self {
            structure,
            offset,
            fields: IndexMap::new(),
        }
    }

    pub(crate) fn push(&mut self, field: RawField) {
        self.fields.insert(field.name(), field);
    }

    pub fn structure(&self) -> &'static str {
        self.structure
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn size(&self) -> usize {
        self.fields.values().map(RawField::len).sum()
    }

    pub fn end(&self) -> u64 {
        self.offset + self.size() as u64
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&RawField> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn field(&self, name: &str) -> Result<&RawField, DecodeError> {
        self.get(name).ok_or_else(|| DecodeError::MissingField {
            structure: self.structure,
            field: name.to_string(),
        })
    }

    pub fn uint(&self, name: &str) -> Result<u64, DecodeError> {
        let field = self.field(name)?;
        field.uint().map_err(|source| DecodeError::Codec {
            structure: self.structure,
            field: field.name(),
            source,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawField> {
        self.fields.values()
    }

    /// Field bytes concatenated in schema order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.size());
        for field in self.iter() {
            out.extend_from_slice(field.bytes());
        }
        out
    }
}
