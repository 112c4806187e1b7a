// Wed Jan 15 2026 - Alex

use crate::config::{Config, DirectoryPolicy};
use crate::decoder::{RawField, RawRecord};
use crate::pe::{Architecture, DecodedRecord, ParseContext, ParseState, PeError};
use crate::schema::pe::{DATA_DIRECTORY, DATA_DIRECTORY_ENTRIES, DOS_HEADER, PE_HEADER, SECTION_HEADER};
use crate::schema::{FieldSpec, StructSchema};
use crate::source::ByteSource;
use crate::utils::logging::ScopedTimer;

const OPTIONAL_MAGIC: StructSchema = StructSchema::new("IMAGE_HEADER", &[FieldSpec { name: "Magic", width: 2 }]);

/// Decodes the PE header region into a [`DecodedRecord`].
///
/// The parser holds configuration only. All per-parse state lives in a
/// [`ParseContext`] created inside [`PeParser::parse`], so a single parser can
/// be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PeParser {
    directory_policy: DirectoryPolicy,
}

impl PeParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            directory_policy: config.directory_policy,
        }
    }

    pub fn with_directory_policy(mut self, policy: DirectoryPolicy) -> Self {
        self.directory_policy = policy;
        self
    }

    pub fn directory_policy(&self) -> DirectoryPolicy {
        self.directory_policy
    }

    /// Runs every stage in order. The first failure aborts the parse and no
    /// partial record is returned.
    pub fn parse<S: ByteSource + ?Sized>(&self, source: &S) -> Result<DecodedRecord, PeError> {
        let _timer = ScopedTimer::new("pe parse");
        let mut ctx = ParseContext::new(source);

        let dos_header = self.dos_header(&mut ctx)?;
        let dos_stub = self.dos_stub(&mut ctx, &dos_header)?;
        let pe_header = self.pe_header(&mut ctx)?;
        let architecture = self.arch_probe(&mut ctx, &pe_header)?;
        let optional_start = ctx.cursor().position();
        let image_header = self.image_header(&mut ctx, architecture)?;
        let data_directory = self.data_directory(&mut ctx, &image_header)?;
        let sections = self.section_headers(&mut ctx, &pe_header, optional_start)?;
        ctx.enter(ParseState::Done);

        Ok(DecodedRecord {
            dos_header,
            dos_stub,
            pe_header,
            architecture,
            image_header,
            data_directory,
            sections,
        })
    }

    fn dos_header<S: ByteSource + ?Sized>(&self, ctx: &mut ParseContext<'_, S>) -> Result<RawRecord, PeError> {
        ctx.enter(ParseState::DosHeader);
        ctx.decode(&DOS_HEADER)
    }

    fn dos_stub<S: ByteSource + ?Sized>(
        &self,
        ctx: &mut ParseContext<'_, S>,
        dos_header: &RawRecord,
    ) -> Result<RawField, PeError> {
        ctx.enter(ParseState::DosStub);
        let e_lfanew = ctx.uint(dos_header, "e_lfanew")?;
        let header_size = DOS_HEADER.size();
        let stub_len = e_lfanew
            .checked_sub(header_size as u64)
            .ok_or(PeError::MalformedStubLength { e_lfanew, header_size })?;
        // e_lfanew is a u32, so the stub length always fits.
        ctx.read_field("DOS_STUB", stub_len as usize)
    }

    fn pe_header<S: ByteSource + ?Sized>(&self, ctx: &mut ParseContext<'_, S>) -> Result<RawRecord, PeError> {
        ctx.enter(ParseState::PeHeader);
        let header = ctx.decode(&PE_HEADER)?;
        if header.get("Signature").map(|f| f.bytes()) != Some(b"PE\0\0".as_slice()) {
            log::warn!("PE signature mismatch at 0x{:x}", header.offset());
        }
        Ok(header)
    }

    fn arch_probe<S: ByteSource + ?Sized>(
        &self,
        ctx: &mut ParseContext<'_, S>,
        pe_header: &RawRecord,
    ) -> Result<Architecture, PeError> {
        ctx.enter(ParseState::ArchProbe);
        if ctx.uint(pe_header, "SizeOfOptionalHeader")? == 0 {
            return Err(PeError::MissingOptionalHeader);
        }
        let probe = ctx.probe(&OPTIONAL_MAGIC)?;
        let magic = ctx.uint(&probe, "Magic")?;
        let architecture = Architecture::from_magic(magic).ok_or(PeError::UnknownArchitecture { magic })?;
        log::debug!("Optional header magic 0x{:x} ({})", magic, architecture);
        Ok(architecture)
    }

    fn image_header<S: ByteSource + ?Sized>(
        &self,
        ctx: &mut ParseContext<'_, S>,
        architecture: Architecture,
    ) -> Result<RawRecord, PeError> {
        ctx.enter(ParseState::ImageHeader);
        ctx.decode(&architecture.image_header_schema())
    }

    fn data_directory<S: ByteSource + ?Sized>(
        &self,
        ctx: &mut ParseContext<'_, S>,
        image_header: &RawRecord,
    ) -> Result<RawRecord, PeError> {
        ctx.enter(ParseState::DataDirectory);
        let declared = ctx.uint(image_header, "NumberOfRvaAndSizes")?;
        if declared != DATA_DIRECTORY_ENTRIES as u64 {
            log::debug!("NumberOfRvaAndSizes is {}, policy {:?}", declared, self.directory_policy);
        }
        let schema = match self.directory_policy {
            DirectoryPolicy::Full => DATA_DIRECTORY,
            DirectoryPolicy::Declared => {
                let entries = declared.min(DATA_DIRECTORY_ENTRIES as u64) as usize;
                DATA_DIRECTORY.truncated(entries * 2)
            }
        };
        ctx.decode(&schema)
    }

    fn section_headers<S: ByteSource + ?Sized>(
        &self,
        ctx: &mut ParseContext<'_, S>,
        pe_header: &RawRecord,
        optional_start: u64,
    ) -> Result<Vec<RawRecord>, PeError> {
        ctx.enter(ParseState::SectionHeaders);
        let count = ctx.uint(pe_header, "NumberOfSections")? as usize;
        let declared_start = optional_start + ctx.uint(pe_header, "SizeOfOptionalHeader")?;
        if declared_start != ctx.cursor().position() {
            log::warn!(
                "Section table decoded at {} but SizeOfOptionalHeader places it at 0x{:x}",
                ctx.cursor(),
                declared_start
            );
        }
        ctx.decode_many(&SECTION_HEADER, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pe::fixture::{default_sections, ImageBuilder};
    use crate::source::{BufferSource, CancelToken, CancellableSource, SourceError};
    use std::time::Instant;

    fn parse(image: Vec<u8>) -> Result<DecodedRecord, PeError> {
        PeParser::new().parse(&BufferSource::from(image))
    }

    #[test]
    fn test_pe32_image() {
        let record = parse(ImageBuilder::pe32().build()).unwrap();
        assert_eq!(record.architecture, Architecture::Pe32);
        assert!(record.image_header.contains("BaseOfData"));
        assert_eq!(record.image_header.get("ImageBase").unwrap().len(), 4);
        assert_eq!(record.image_header.uint("ImageBase").unwrap(), 0x40_0000);
        assert_eq!(record.image_header.uint("AddressOfEntryPoint").unwrap(), 0x1234);
        assert_eq!(record.image_header.size(), 96);
    }

    #[test]
    fn test_pe32_plus_image() {
        let record = parse(ImageBuilder::pe32_plus().build()).unwrap();
        assert_eq!(record.architecture, Architecture::Pe32Plus);
        assert!(!record.image_header.contains("BaseOfData"));
        assert_eq!(record.image_header.get("ImageBase").unwrap().len(), 8);
        assert_eq!(record.image_header.uint("ImageBase").unwrap(), 0x1_4000_0000);
        assert_eq!(record.image_header.get("SizeOfStackReserve").unwrap().len(), 8);
        assert_eq!(record.image_header.size(), 112);
    }

    #[test]
    fn test_unknown_architecture() {
        let err = parse(ImageBuilder::pe32().magic(0x9999).build()).unwrap_err();
        assert!(matches!(err, PeError::UnknownArchitecture { magic: 0x9999 }));
        assert_eq!(err.state(), ParseState::ArchProbe);
    }

    #[test]
    fn test_missing_optional_header() {
        let err = parse(ImageBuilder::pe32().size_of_optional_header(0).build()).unwrap_err();
        assert!(matches!(err, PeError::MissingOptionalHeader));
    }

    #[test]
    fn test_section_count() {
        let record = parse(ImageBuilder::pe32().build()).unwrap();
        assert_eq!(record.sections.len(), 3);
        for section in &record.sections {
            assert_eq!(section.size(), 40);
        }
        for pair in record.sections.windows(2) {
            assert_eq!(pair[0].end(), pair[1].offset());
        }
        assert_eq!(record.sections[0].offset(), record.data_directory.end());
    }

    #[test]
    fn test_no_sections() {
        let record = parse(ImageBuilder::pe32().sections(Vec::new()).build()).unwrap();
        assert!(record.sections.is_empty());
    }

    #[test]
    fn test_stub_length() {
        let builder = ImageBuilder::pe32().e_lfanew(0xF0);
        let record = parse(builder.build()).unwrap();
        assert_eq!(record.dos_stub.len(), 0xF0 - 64);
        assert_eq!(record.dos_stub.offset(), 64);
        assert_eq!(record.pe_header.offset(), 0xF0);
    }

    #[test]
    fn test_empty_stub() {
        let record = parse(ImageBuilder::pe32().e_lfanew(64).build()).unwrap();
        assert!(record.dos_stub.is_empty());
        assert_eq!(record.pe_header.offset(), 64);
    }

    #[test]
    fn test_malformed_stub_length() {
        let err = parse(ImageBuilder::pe32().e_lfanew(0x20).build()).unwrap_err();
        assert!(matches!(err, PeError::MalformedStubLength { e_lfanew: 0x20, header_size: 64 }));
        assert_eq!(err.state(), ParseState::DosStub);
    }

    #[test]
    fn test_truncated_dos_header() {
        let mut image = ImageBuilder::pe32().build();
        image.truncate(40);
        let err = parse(image).unwrap_err();
        assert!(matches!(err, PeError::ReadBounds { state: ParseState::DosHeader, needed: 64, available: 40, .. }));
    }

    #[test]
    fn test_truncation_reports_stage() {
        let builder = ImageBuilder::pe32().trailing(0);
        let full = builder.build();
        let cases = [
            (0x70, ParseState::DosStub),
            (0x80 + 10, ParseState::PeHeader),
            (0x80 + 24 + 1, ParseState::ArchProbe),
            (0x80 + 24 + 50, ParseState::ImageHeader),
            (0x80 + 24 + 96 + 8, ParseState::DataDirectory),
            (full.len() - 1, ParseState::SectionHeaders),
        ];
        for (len, stage) in cases {
            let mut image = full.clone();
            image.truncate(len);
            let err = parse(image).unwrap_err();
            assert_eq!(err.state(), stage, "truncated to {} bytes", len);
            assert!(matches!(err, PeError::ReadBounds { .. }));
        }
    }

    #[test]
    fn test_full_directory_ignores_count() {
        let image = ImageBuilder::pe32().directories(2, 16).build();
        let record = parse(image).unwrap();
        assert_eq!(record.data_directory.len(), 32);
        assert_eq!(record.data_directory.uint("Reserved").unwrap(), 0x1000);
    }

    #[test]
    fn test_declared_directory_policy() {
        let image = ImageBuilder::pe32().directories(2, 2).build();
        let parser = PeParser::new().with_directory_policy(DirectoryPolicy::Declared);
        let record = parser.parse(&BufferSource::from(image)).unwrap();
        assert_eq!(record.data_directory.len(), 4);
        assert_eq!(record.data_directory.uint("Import_size").unwrap(), 0x20);
        assert!(!record.data_directory.contains("Resource"));
        assert_eq!(record.section_name(0).as_deref(), Some(".text"));
    }

    #[test]
    fn test_declared_count_above_sixteen() {
        let image = ImageBuilder::pe32().directories(40, 16).build();
        let parser = PeParser::new().with_directory_policy(DirectoryPolicy::Declared);
        let record = parser.parse(&BufferSource::from(image)).unwrap();
        assert_eq!(record.data_directory.len(), 32);
    }

    #[test]
    fn test_cancelled_parse() {
        let token = CancelToken::new();
        token.cancel();
        let source = CancellableSource::new(BufferSource::from(ImageBuilder::pe32().build()), token);
        let err = PeParser::new().parse(&source).unwrap_err();
        assert!(err.is_cancelled());
        assert!(matches!(err, PeError::Source { state: ParseState::DosHeader, source: SourceError::Cancelled }));
    }

    #[test]
    fn test_expired_deadline_aborts_parse() {
        let source = CancellableSource::new(BufferSource::from(ImageBuilder::pe32().build()), CancelToken::new())
            .with_deadline(Instant::now());
        let err = PeParser::new().parse(&source).unwrap_err();
        assert!(err.is_cancelled());
        assert!(matches!(err, PeError::Source { state: ParseState::DosHeader, source: SourceError::TimedOut }));
    }

    #[test]
    fn test_policy_from_config() {
        let config = Config::new().with_directory_policy(DirectoryPolicy::Declared);
        assert_eq!(PeParser::from_config(&config).directory_policy(), DirectoryPolicy::Declared);
        assert_eq!(PeParser::new().directory_policy(), DirectoryPolicy::Full);
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = PeParser::new();
        let a = parser.parse(&BufferSource::from(ImageBuilder::pe32().build())).unwrap();
        let b = parser.parse(&BufferSource::from(ImageBuilder::pe32_plus().build())).unwrap();
        let c = parser.parse(&BufferSource::from(ImageBuilder::pe32().build())).unwrap();
        assert_eq!(a, c);
        assert_ne!(a.architecture, b.architecture);
    }

    #[test]
    fn test_concurrent_parses() {
        use rayon::prelude::*;

        let parser = PeParser::new();
        let images: Vec<Vec<u8>> = (0..16)
            .map(|i| {
                let builder = if i % 2 == 0 { ImageBuilder::pe32() } else { ImageBuilder::pe32_plus() };
                let sections = default_sections().into_iter().take(i % 4).collect();
                builder.sections(sections).build()
            })
            .collect();

        let results: Vec<_> = images
            .par_iter()
            .map(|image| parser.parse(&BufferSource::from_slice(image)).unwrap())
            .collect();

        for (i, record) in results.iter().enumerate() {
            assert_eq!(record.architecture.is_64_bit(), i % 2 == 1);
            assert_eq!(record.sections.len(), i % 4);
        }
    }
}
