// Tue Jan 13 2026 - Alex

use crate::codec::{self, ByteOrder};
use crate::decoder::{RawField, RawRecord};
use crate::engine::{FileReport, Outcome};
use crate::pe::{machine, DecodedRecord, SectionCharacteristics};
use crate::schema;
use crate::utils::{format_bytes, format_duration, format_timestamp};
use colored::Colorize;
use itertools::Itertools;
use std::fmt::Write;

/// Plain-text summary of inspection results.
pub struct ReportGenerator {
    show_fields: bool,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            show_fields: false,
        }
    }

    /// Dump every decoded field, not just the summary.
    pub fn with_fields(mut self, show: bool) -> Self {
        self.show_fields = show;
        self
    }

    pub fn render(&self, report: &FileReport) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {} ({}, {})",
            "[*]".blue(),
            report.path.display().to_string().bold(),
            report.format,
            format_bytes(report.size)
        );

        match &report.outcome {
            Outcome::Decoded(record) => self.render_record(&mut out, record),
            Outcome::Skipped if report.format.is_known() => {
                let _ = writeln!(out, "    {}", format!("{} file, skipped", report.format).dimmed());
            }
            Outcome::Skipped => {
                let _ = writeln!(out, "    {}", "unrecognized format, skipped".dimmed());
            }
            Outcome::Failed(err) => {
                let _ = writeln!(out, "{} {}", "[!]".red(), err);
            }
        }

        match &report.verification {
            Some(Ok(mismatches)) if mismatches.is_empty() => {
                let _ = writeln!(out, "{} headers agree with the reference parser", "[+]".green());
            }
            Some(Ok(mismatches)) => {
                for m in mismatches {
                    let _ = writeln!(
                        out,
                        "{} {} decoded 0x{:x}, reference 0x{:x}",
                        "[!]".red(),
                        m.field,
                        m.decoded,
                        m.reference
                    );
                }
            }
            Some(Err(err)) => {
                let _ = writeln!(out, "{} verification skipped: {}", "[!]".yellow(), err);
            }
            None => {}
        }

        let _ = writeln!(out, "    {}", format!("done in {}", format_duration(report.elapsed)).dimmed());
        out
    }

    pub fn render_all(&self, reports: &[FileReport]) -> String {
        let mut out = reports.iter().map(|r| self.render(r)).join("\n");
        let decoded = reports.iter().filter(|r| r.outcome.is_decoded()).count();
        let skipped = reports.iter().filter(|r| r.outcome.is_skipped()).count();
        let failed = reports.iter().filter(|r| r.is_failure()).count();
        let _ = writeln!(
            out,
            "\n{} {} decoded, {} skipped, {} failed",
            if failed == 0 { "[+]".green() } else { "[!]".red() },
            decoded,
            skipped,
            failed
        );
        out
    }

    fn render_record(&self, out: &mut String, record: &DecodedRecord) {
        if !record.has_valid_signature() {
            let _ = writeln!(out, "{} PE signature is not PE\\0\\0", "[!]".yellow());
        }

        if let Ok(value) = record.machine() {
            let _ = writeln!(out, "    Machine:          0x{:x} ({})", value, machine::describe(value));
        }
        let _ = writeln!(out, "    Architecture:     {}", record.architecture);
        if let Ok(stamp) = record.time_date_stamp() {
            let _ = writeln!(out, "    TimeDateStamp:    0x{:x} ({})", stamp, format_timestamp(u64::from(stamp)));
        }
        if let Ok(flags) = record.characteristics() {
            let names = flags.describe().into_iter().map(|(name, _)| name).join(" | ");
            let _ = writeln!(out, "    Characteristics:  0x{:04x} {}", flags.bits(), names);
        }
        if let Ok(entry) = record.entry_point() {
            let _ = writeln!(out, "    EntryPoint:       0x{:x}", entry);
        }
        if let Ok(base) = record.image_base() {
            let _ = writeln!(out, "    ImageBase:        0x{:x}", base);
        }
        let _ = writeln!(out, "    DOS stub:         {} bytes", record.dos_stub.len());

        if self.show_fields {
            for header in [&record.dos_header, &record.pe_header, &record.image_header] {
                Self::render_fields(out, header);
            }
            Self::render_stub(out, &record.dos_stub);
        }

        let _ = writeln!(out, "    {}", "Data directories:".cyan());
        for (index, (rva, size)) in record.data_directory.iter().tuples().enumerate() {
            let (Ok(rva), Ok(size)) = (rva.uint(), size.uint()) else { continue };
            if rva == 0 && size == 0 {
                continue;
            }
            let _ = writeln!(out, "      [{:2}] rva 0x{:08x} size 0x{:x}", index, rva, size);
        }

        let _ = writeln!(out, "    {}", format!("Sections ({}):", record.sections.len()).cyan());
        for (index, section) in record.sections.iter().enumerate() {
            let name = record.section_name(index).unwrap_or_default();
            let uint = |field: &str| section.uint(field).unwrap_or(0);
            let flags = SectionCharacteristics::from_bits_retain(uint("Characteristics") as u32);
            let _ = writeln!(
                out,
                "      {:<8} va 0x{:08x} vsize 0x{:08x} raw 0x{:08x} rawsize 0x{:08x} {}",
                name,
                uint("VirtualAddress"),
                uint("VirtualSize"),
                uint("PointerToRawData"),
                uint("SizeOfRawData"),
                flags.permissions()
            );
        }
    }

    fn render_fields(out: &mut String, header: &RawRecord) {
        let _ = writeln!(out, "    {}", format!("{} @ 0x{:x}:", header.structure(), header.offset()).cyan());
        for field in header.iter() {
            let order = if schema::pe::is_byte_array(header.structure(), field.name()) {
                ByteOrder::LittleEndian
            } else {
                ByteOrder::Reversed
            };
            let _ = writeln!(
                out,
                "      {:<28} 0x{:06x}  {}",
                field.name(),
                field.offset(),
                codec::hex(field.bytes(), order)
            );
        }
    }

    /// Sixteen bytes per line: offset, hex, ASCII.
    fn render_stub(out: &mut String, stub: &RawField) {
        let _ = writeln!(out, "    {}", format!("DOS_STUB @ 0x{:x}:", stub.offset()).cyan());
        for (line, chunk) in stub.bytes().chunks(16).enumerate() {
            let hex = chunk.iter().map(|b| format!("{:02x}", b)).join(" ");
            let _ = writeln!(
                out,
                "      0x{:06x}  {:<47}  |{}|",
                stub.offset() + (line * 16) as u64,
                hex,
                codec::ascii(chunk)
            );
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}
