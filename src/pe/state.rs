// Wed Jan 15 2026 - Alex

use std::fmt;

/// Stages of a PE parse, in the only order they can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParseState {
    Start,
    DosHeader,
    DosStub,
    PeHeader,
    ArchProbe,
    ImageHeader,
    DataDirectory,
    SectionHeaders,
    Done,
}

impl ParseState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseState::Start => "START",
            ParseState::DosHeader => "DOS_HEADER",
            ParseState::DosStub => "DOS_STUB",
            ParseState::PeHeader => "PE_HEADER",
            ParseState::ArchProbe => "ARCH_PROBE",
            ParseState::ImageHeader => "IMAGE_HEADER",
            ParseState::DataDirectory => "DATA_DIRECTORY",
            ParseState::SectionHeaders => "SECTION_HEADERS",
            ParseState::Done => "DONE",
        }
    }

    pub fn next(&self) -> Option<ParseState> {
        match self {
            ParseState::Start => Some(ParseState::DosHeader),
            ParseState::DosHeader => Some(ParseState::DosStub),
            ParseState::DosStub => Some(ParseState::PeHeader),
            ParseState::PeHeader => Some(ParseState::ArchProbe),
            ParseState::ArchProbe => Some(ParseState::ImageHeader),
            ParseState::ImageHeader => Some(ParseState::DataDirectory),
            ParseState::DataDirectory => Some(ParseState::SectionHeaders),
            ParseState::SectionHeaders => Some(ParseState::Done),
            ParseState::Done => None,
        }
    }
}

impl fmt::Display for ParseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
