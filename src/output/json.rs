// Tue Jan 13 2026 - Alex

use crate::codec::{self, ByteOrder, MAX_INTEGER_WIDTH};
use crate::decoder::{RawField, RawRecord};
use crate::engine::{EngineError, FileReport, Outcome};
use crate::format::FileFormat;
use crate::pe::{descriptions, machine, DecodedRecord, Mismatch};
use crate::schema;
use crate::utils::format_timestamp;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize)]
pub struct FieldView {
    pub name: &'static str,
    pub offset: String,
    pub size: usize,
    /// Bytes in file order.
    pub raw: String,
    /// Numeric value, most significant byte first. Absent for byte arrays.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

impl FieldView {
    fn new(section: &str, field: &RawField) -> Self {
        let numeric = field.len() <= MAX_INTEGER_WIDTH
            && field.len() != 0
            && !schema::pe::is_byte_array(section, field.name());
        Self {
            name: field.name(),
            offset: format!("0x{:x}", field.offset()),
            size: field.len(),
            raw: codec::hex(field.bytes(), ByteOrder::LittleEndian),
            value: numeric.then(|| format!("0x{}", codec::hex(field.bytes(), ByteOrder::Reversed))),
            description: descriptions::describe(section, field.name()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StructView {
    pub structure: &'static str,
    pub offset: String,
    pub size: usize,
    pub fields: Vec<FieldView>,
}

impl StructView {
    fn new(record: &RawRecord) -> Self {
        Self {
            structure: record.structure(),
            offset: format!("0x{:x}", record.offset()),
            size: record.size(),
            fields: record.iter().map(|f| FieldView::new(record.structure(), f)).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StubView {
    pub offset: String,
    pub size: usize,
    pub ascii: String,
}

#[derive(Debug, Serialize)]
pub struct MachineView {
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SectionView {
    pub name: String,
    #[serde(flatten)]
    pub header: StructView,
}

#[derive(Debug, Serialize)]
pub struct RecordView {
    pub architecture: &'static str,
    pub valid_signature: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine: Option<MachineView>,
    pub characteristics: Vec<&'static str>,
    /// TimeDateStamp rendered as a UTC date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(rename = "DOS_HEADER")]
    pub dos_header: StructView,
    #[serde(rename = "DOS_STUB")]
    pub dos_stub: StubView,
    #[serde(rename = "PE_HEADER")]
    pub pe_header: StructView,
    #[serde(rename = "IMAGE_HEADER")]
    pub image_header: StructView,
    #[serde(rename = "DATA_DIRECTORY")]
    pub data_directory: StructView,
    #[serde(rename = "SECTIONS")]
    pub sections: Vec<SectionView>,
}

impl RecordView {
    pub fn new(record: &DecodedRecord) -> Self {
        let machine = record.machine().ok().map(|value| MachineView {
            value: format!("0x{:x}", value),
            name: machine::lookup(value).map(|m| m.name),
            description: machine::describe(value),
        });
        let characteristics = record
            .characteristics()
            .map(|flags| flags.describe().into_iter().map(|(name, _)| name).collect())
            .unwrap_or_default();

        Self {
            architecture: record.architecture.as_str(),
            valid_signature: record.has_valid_signature(),
            machine,
            characteristics,
            timestamp: record.time_date_stamp().ok().map(|stamp| format_timestamp(u64::from(stamp))),
            dos_header: StructView::new(&record.dos_header),
            dos_stub: StubView {
                offset: format!("0x{:x}", record.dos_stub.offset()),
                size: record.dos_stub.len(),
                ascii: codec::ascii(record.dos_stub.bytes()),
            },
            pe_header: StructView::new(&record.pe_header),
            image_header: StructView::new(&record.image_header),
            data_directory: StructView::new(&record.data_directory),
            sections: record
                .sections
                .iter()
                .map(|section| SectionView {
                    name: section.get("Name").map(|f| codec::section_name(f.bytes())).unwrap_or_default(),
                    header: StructView::new(section),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FileView {
    pub path: String,
    pub size: u64,
    pub format: FileFormat,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_state: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<RecordView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mismatches: Vec<Mismatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_error: Option<String>,
    pub elapsed_ms: f64,
}

impl FileView {
    pub fn new(report: &FileReport) -> Self {
        let (status, error, failed_state, record) = match &report.outcome {
            Outcome::Decoded(record) => ("decoded", None, None, Some(RecordView::new(record))),
            Outcome::Skipped => ("skipped", None, None, None),
            Outcome::Failed(err) => {
                let state = match err {
                    EngineError::Parse(pe) => Some(pe.state().as_str()),
                    _ => None,
                };
                ("failed", Some(err.to_string()), state, None)
            }
        };

        Self {
            path: report.path.display().to_string(),
            size: report.size,
            format: report.format,
            status,
            error,
            failed_state,
            record,
            mismatches: report.mismatches().to_vec(),
            verify_error: match &report.verification {
                Some(Err(err)) => Some(err.to_string()),
                _ => None,
            },
            elapsed_ms: report.elapsed.as_secs_f64() * 1000.0,
        }
    }
}

pub struct JsonSerializer {
    pretty_print: bool,
}

impl JsonSerializer {
    pub fn new() -> Self {
        Self { pretty_print: true }
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    pub fn serialize(&self, reports: &[FileReport]) -> Result<String, JsonError> {
        let views: Vec<FileView> = reports.iter().map(FileView::new).collect();
        let text = if self.pretty_print {
            serde_json::to_string_pretty(&views)?
        } else {
            serde_json::to_string(&views)?
        };
        Ok(text)
    }

    pub fn serialize_to_file<P: AsRef<Path>>(&self, reports: &[FileReport], path: P) -> Result<(), JsonError> {
        let text = self.serialize(reports)?;
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}
