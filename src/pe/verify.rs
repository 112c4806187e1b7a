// Thu Jan 16 2026 - Alex

//! Cross-checks headline header values against goblin's PE header parser.

use crate::decoder::DecodeError;
use crate::pe::DecodedRecord;
use crate::source::SourceError;
use goblin::pe::header::Header;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("reference parser rejected the headers: {0}")]
    Reference(#[from] goblin::error::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("reference parser found no optional header")]
    NoOptionalHeader,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub field: &'static str,
    pub decoded: u64,
    pub reference: u64,
}

/// Compares `record` with goblin's reading of `headers`, which must hold at
/// least the first `record.header_end()` bytes of the same file.
pub fn cross_check(record: &DecodedRecord, headers: &[u8]) -> Result<Vec<Mismatch>, VerifyError> {
    let reference = Header::parse(headers)?;
    let optional = reference.optional_header.ok_or(VerifyError::NoOptionalHeader)?;
    let coff = &reference.coff_header;

    let pairs = [
        ("e_lfanew", record.e_lfanew()?, u64::from(reference.dos_header.pe_pointer)),
        ("Machine", u64::from(record.machine()?), u64::from(coff.machine)),
        ("NumberOfSections", u64::from(record.number_of_sections()?), u64::from(coff.number_of_sections)),
        ("TimeDateStamp", u64::from(record.time_date_stamp()?), u64::from(coff.time_date_stamp)),
        ("Characteristics", u64::from(record.characteristics()?.bits()), u64::from(coff.characteristics)),
        ("Magic", u64::from(record.architecture.magic()), u64::from(optional.standard_fields.magic)),
        ("AddressOfEntryPoint", record.entry_point()?, u64::from(optional.standard_fields.address_of_entry_point)),
        ("ImageBase", record.image_base()?, u64::from(optional.windows_fields.image_base)),
    ];

    let mismatches: Vec<Mismatch> = pairs
        .into_iter()
        .filter(|(_, decoded, reference)| decoded != reference)
        .map(|(field, decoded, reference)| Mismatch { field, decoded, reference })
        .collect();

    for mismatch in &mismatches {
        log::warn!(
            "{}: decoded 0x{:x}, reference 0x{:x}",
            mismatch.field,
            mismatch.decoded,
            mismatch.reference
        );
    }
    Ok(mismatches)
}
