// Wed Jan 15 2026 - Alex

use crate::schema::pe::{IMAGE_HEADER_32, IMAGE_HEADER_64};
use crate::schema::StructSchema;
use serde::Serialize;
use std::fmt;

pub const PE32_MAGIC: u16 = 0x10B;
pub const PE32_PLUS_MAGIC: u16 = 0x20B;

/// Optional-header flavour, chosen by the magic at its first two bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Architecture {
    #[serde(rename = "PE32")]
    Pe32,
    #[serde(rename = "PE32+")]
    Pe32Plus,
}

impl Architecture {
    pub fn from_magic(magic: u64) -> Option<Self> {
        match magic {
            m if m == PE32_MAGIC as u64 => Some(Architecture::Pe32),
            m if m == PE32_PLUS_MAGIC as u64 => Some(Architecture::Pe32Plus),
            _ => None,
        }
    }

    pub fn magic(&self) -> u16 {
        match self {
            Architecture::Pe32 => PE32_MAGIC,
            Architecture::Pe32Plus => PE32_PLUS_MAGIC,
        }
    }

    pub fn is_64_bit(&self) -> bool {
        *self == Architecture::Pe32Plus
    }

    pub fn image_header_schema(&self) -> StructSchema {
        match self {
            Architecture::Pe32 => IMAGE_HEADER_32,
            Architecture::Pe32Plus => IMAGE_HEADER_64,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::Pe32 => "PE32",
            Architecture::Pe32Plus => "PE32+",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_magic() {
        assert_eq!(Architecture::from_magic(0x10B), Some(Architecture::Pe32));
        assert_eq!(Architecture::from_magic(0x20B), Some(Architecture::Pe32Plus));
        assert_eq!(Architecture::from_magic(0x107), None);
        assert_eq!(Architecture::from_magic(0x9999), None);
    }

    #[test]
    fn test_schema_selection() {
        assert_eq!(Architecture::Pe32.image_header_schema().size(), 96);
        assert_eq!(Architecture::Pe32Plus.image_header_schema().size(), 112);
        assert_eq!(Architecture::Pe32Plus.to_string(), "PE32+");
    }
}
