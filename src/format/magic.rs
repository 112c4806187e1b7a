// Wed Jan 15 2026 - Alex

use crate::source::{ByteSource, SourceError};
use serde::Serialize;
use std::fmt;

pub const PE_MAGIC: &[u8] = &[0x4D, 0x5A];
pub const ELF_MAGIC: &[u8] = &[0x7F, 0x45, 0x4C, 0x46];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FileFormat {
    #[serde(rename = "PE")]
    Pe,
    #[serde(rename = "ELF")]
    Elf,
    #[serde(rename = "unknown")]
    Unknown,
}

impl FileFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileFormat::Pe => "PE",
            FileFormat::Elf => "ELF",
            FileFormat::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        *self != FileFormat::Unknown
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagicSignature {
    pub format: FileFormat,
    pub bytes: &'static [u8],
}

impl MagicSignature {
    pub const fn new(format: FileFormat, bytes: &'static [u8]) -> Self {
        Self { format, bytes }
    }

    pub fn matches(&self, data: &[u8]) -> bool {
        data.starts_with(self.bytes)
    }
}

pub struct FormatSniffer {
    signatures: Vec<MagicSignature>,
}

impl FormatSniffer {
    pub fn new() -> Self {
        Self {
            signatures: vec![
                MagicSignature::new(FileFormat::Pe, PE_MAGIC),
                MagicSignature::new(FileFormat::Elf, ELF_MAGIC),
            ],
        }
    }

    pub fn empty() -> Self {
        Self { signatures: Vec::new() }
    }

    pub fn with_signature(mut self, signature: MagicSignature) -> Self {
        self.signatures.push(signature);
        self
    }

    pub fn signatures(&self) -> &[MagicSignature] {
        &self.signatures
    }

    pub fn max_signature_len(&self) -> usize {
        self.signatures.iter().map(|s| s.bytes.len()).max().unwrap_or(0)
    }

    /// Longest matching signature wins; on equal length the earlier registration wins.
    pub fn sniff(&self, data: &[u8]) -> FileFormat {
        let mut best: Option<&MagicSignature> = None;
        for signature in self.signatures.iter().filter(|s| s.matches(data)) {
            match best {
                Some(current) if current.bytes.len() >= signature.bytes.len() => {}
                _ => best = Some(signature),
            }
        }
        best.map(|s| s.format).unwrap_or(FileFormat::Unknown)
    }

    /// Sniffs the first bytes of a source. Sources shorter than the longest
    /// signature are sniffed on whatever bytes they hold.
    pub fn sniff_source(&self, source: &dyn ByteSource) -> Result<FileFormat, SourceError> {
        let available = usize::try_from(source.len()).unwrap_or(usize::MAX);
        let head = source.read_range(0, self.max_signature_len().min(available))?;
        let format = self.sniff(&head);
        log::debug!("Sniffed format {} from {} leading bytes", format, head.len());
        Ok(format)
    }
}

impl Default for FormatSniffer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn sniff(data: &[u8]) -> FileFormat {
    FormatSniffer::new().sniff(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BufferSource;

    #[test]
    fn test_known_formats() {
        assert_eq!(sniff(&[0x4D, 0x5A, 0x90, 0x00]), FileFormat::Pe);
        assert_eq!(sniff(&[0x7F, 0x45, 0x4C, 0x46, 0x02, 0x01]), FileFormat::Elf);
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(sniff(&[0xCA, 0xFE, 0xBA, 0xBE]), FileFormat::Unknown);
        assert_eq!(sniff(&[0x4D]), FileFormat::Unknown);
        assert_eq!(sniff(&[0x7F, 0x45, 0x4C]), FileFormat::Unknown);
        assert_eq!(sniff(&[]), FileFormat::Unknown);
        assert_eq!(FileFormat::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_longest_signature_wins() {
        static LONG_MZ: &[u8] = &[0x4D, 0x5A, 0x90];
        let sniffer = FormatSniffer::new().with_signature(MagicSignature::new(FileFormat::Elf, LONG_MZ));
        assert_eq!(sniffer.sniff(&[0x4D, 0x5A, 0x90, 0x00]), FileFormat::Elf);
        assert_eq!(sniffer.sniff(&[0x4D, 0x5A, 0x00]), FileFormat::Pe);
    }

    #[test]
    fn test_first_registered_wins_ties() {
        let sniffer = FormatSniffer::new().with_signature(MagicSignature::new(FileFormat::Elf, PE_MAGIC));
        assert_eq!(sniffer.sniff(b"MZ"), FileFormat::Pe);
    }

    #[test]
    fn test_sniff_short_source() {
        let sniffer = FormatSniffer::new();
        assert_eq!(sniffer.sniff_source(&BufferSource::from_slice(b"MZ")).unwrap(), FileFormat::Pe);
        assert_eq!(sniffer.sniff_source(&BufferSource::from_slice(b"")).unwrap(), FileFormat::Unknown);
    }
}
