// Tue Jan 13 2026 - Alex

use crate::schema::FieldSpec;
use std::fmt;

/// Ordered, packed field table. Field order defines byte offsets; there is
/// no padding, so the struct size is the sum of the widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructSchema {
    name: &'static str,
    fields: &'static [FieldSpec],
}

impl StructSchema {
    pub const fn new(name: &'static str, fields: &'static [FieldSpec]) -> Self {
        Self { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn size(&self) -> usize {
        self.fields.iter().map(|f| f.width).sum()
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn offset_of(&self, name: &str) -> Option<usize> {
        let mut offset = 0;
        for field in self.fields {
            if field.name == name {
                return Some(offset);
            }
            offset += field.width;
        }
        None
    }

    /// Schema restricted to the first `count` fields.
    pub fn truncated(&self, count: usize) -> StructSchema {
        StructSchema {
            name: self.name,
            fields: &self.fields[..count.min(self.fields.len())],
        }
    }
}

impl fmt::Display for StructSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} fields, {} bytes)", self.name, self.len(), self.size())
    }
}
