// Tue Jan 13 2026 - Alex

use std::fmt;

/// One fixed-width field of an on-disk structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub name: &'static str,
    pub width: usize,
}

impl FieldSpec {
    pub const fn new(name: &'static str, width: usize) -> Self {
        Self { name, width }
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} bytes", self.name, self.width)
    }
}
