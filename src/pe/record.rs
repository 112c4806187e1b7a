// Wed Jan 15 2026 - Alex

use crate::codec;
use crate::decoder::{DecodeError, RawField, RawRecord};
use crate::pe::characteristics::CoffCharacteristics;
use crate::pe::Architecture;

pub const SECTION_KEYS: [&str; 6] = [
    "DOS_HEADER",
    "DOS_STUB",
    "PE_HEADER",
    "IMAGE_HEADER",
    "DATA_DIRECTORY",
    "SECTIONS",
];

const PE_SIGNATURE: &[u8] = b"PE\0\0";

/// The decoded header region of one PE file. Field bytes are kept raw;
/// the accessors interpret the handful of values consumers usually want.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    pub dos_header: RawRecord,
    pub dos_stub: RawField,
    pub pe_header: RawRecord,
    pub architecture: Architecture,
    pub image_header: RawRecord,
    pub data_directory: RawRecord,
    pub sections: Vec<RawRecord>,
}

impl DecodedRecord {
    pub fn section_names() -> &'static [&'static str] {
        &SECTION_KEYS
    }

    /// Fixed-layout headers by section key. `DOS_STUB` and `SECTIONS` have
    /// their own accessors.
    pub fn header(&self, key: &str) -> Option<&RawRecord> {
        match key {
            "DOS_HEADER" => Some(&self.dos_header),
            "PE_HEADER" => Some(&self.pe_header),
            "IMAGE_HEADER" => Some(&self.image_header),
            "DATA_DIRECTORY" => Some(&self.data_directory),
            _ => None,
        }
    }

    pub fn has_valid_signature(&self) -> bool {
        self.pe_header.get("Signature").map(RawField::bytes) == Some(PE_SIGNATURE)
    }

    pub fn e_lfanew(&self) -> Result<u64, DecodeError> {
        self.dos_header.uint("e_lfanew")
    }

    pub fn machine(&self) -> Result<u16, DecodeError> {
        Ok(self.pe_header.uint("Machine")? as u16)
    }

    pub fn number_of_sections(&self) -> Result<u16, DecodeError> {
        Ok(self.pe_header.uint("NumberOfSections")? as u16)
    }

    pub fn time_date_stamp(&self) -> Result<u32, DecodeError> {
        Ok(self.pe_header.uint("TimeDateStamp")? as u32)
    }

    pub fn characteristics(&self) -> Result<CoffCharacteristics, DecodeError> {
        let bits = self.pe_header.uint("Characteristics")? as u16;
        Ok(CoffCharacteristics::from_bits_retain(bits))
    }

    pub fn entry_point(&self) -> Result<u64, DecodeError> {
        self.image_header.uint("AddressOfEntryPoint")
    }

    pub fn image_base(&self) -> Result<u64, DecodeError> {
        self.image_header.uint("ImageBase")
    }

    pub fn subsystem(&self) -> Result<u16, DecodeError> {
        Ok(self.image_header.uint("Subsystem")? as u16)
    }

    pub fn number_of_rva_and_sizes(&self) -> Result<u64, DecodeError> {
        self.image_header.uint("NumberOfRvaAndSizes")
    }

    pub fn section_name(&self, index: usize) -> Option<String> {
        let field = self.sections.get(index)?.get("Name")?;
        Some(codec::section_name(field.bytes()))
    }

    /// Offset just past the last decoded byte.
    pub fn header_end(&self) -> u64 {
        self.sections
            .last()
            .map(RawRecord::end)
            .unwrap_or_else(|| self.data_directory.end())
    }

    /// Every decoded byte, in file order. For a well-formed image this is
    /// exactly the file's first `header_end()` bytes.
    pub fn encode_headers(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.header_end() as usize);
        out.extend_from_slice(&self.dos_header.to_bytes());
        out.extend_from_slice(self.dos_stub.bytes());
        out.extend_from_slice(&self.pe_header.to_bytes());
        out.extend_from_slice(&self.image_header.to_bytes());
        out.extend_from_slice(&self.data_directory.to_bytes());
        for section in &self.sections {
            out.extend_from_slice(&section.to_bytes());
        }
        out
    }
}
