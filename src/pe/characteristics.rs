// Thu Jan 16 2026 - Alex

use bitflags::bitflags;

bitflags! {
    /// COFF file header `Characteristics`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CoffCharacteristics: u16 {
        const RELOCS_STRIPPED = 0x0001;
        const EXECUTABLE_IMAGE = 0x0002;
        const LINE_NUMS_STRIPPED = 0x0004;
        const LOCAL_SYMS_STRIPPED = 0x0008;
        const AGGRESSIVE_WS_TRIM = 0x0010;
        const LARGE_ADDRESS_AWARE = 0x0020;
        const RESERVED = 0x0040;
        const BYTES_REVERSED_LO = 0x0080;
        const MACHINE_32BIT = 0x0100;
        const DEBUG_STRIPPED = 0x0200;
        const REMOVABLE_RUN_FROM_SWAP = 0x0400;
        const NET_RUN_FROM_SWAP = 0x0800;
        const SYSTEM = 0x1000;
        const DLL = 0x2000;
        const UP_SYSTEM_ONLY = 0x4000;
        const BYTES_REVERSED_HI = 0x8000;
    }
}

bitflags! {
    /// The section header `Characteristics` bits the report shows.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SectionCharacteristics: u32 {
        const CNT_CODE = 0x0000_0020;
        const CNT_INITIALIZED_DATA = 0x0000_0040;
        const CNT_UNINITIALIZED_DATA = 0x0000_0080;
        const MEM_DISCARDABLE = 0x0200_0000;
        const MEM_SHARED = 0x1000_0000;
        const MEM_EXECUTE = 0x2000_0000;
        const MEM_READ = 0x4000_0000;
        const MEM_WRITE = 0x8000_0000;
    }
}

static COFF_DESCRIPTIONS: &[(CoffCharacteristics, &str)] = &[
    (CoffCharacteristics::RELOCS_STRIPPED, "The file does not contain base relocations and must be loaded at its preferred base address."),
    (CoffCharacteristics::EXECUTABLE_IMAGE, "The image file is valid and can be run."),
    (CoffCharacteristics::LINE_NUMS_STRIPPED, "COFF line numbers have been removed (deprecated)."),
    (CoffCharacteristics::LOCAL_SYMS_STRIPPED, "COFF symbol table entries for local symbols have been removed (deprecated)."),
    (CoffCharacteristics::AGGRESSIVE_WS_TRIM, "Aggressively trim working set (obsolete)."),
    (CoffCharacteristics::LARGE_ADDRESS_AWARE, "Application can handle > 2 GB addresses."),
    (CoffCharacteristics::RESERVED, "Reserved for future use."),
    (CoffCharacteristics::BYTES_REVERSED_LO, "Little endian (deprecated)."),
    (CoffCharacteristics::MACHINE_32BIT, "Code is based on a 32-bit-word architecture."),
    (CoffCharacteristics::DEBUG_STRIPPED, "Debugging information is removed from the image file."),
    (CoffCharacteristics::REMOVABLE_RUN_FROM_SWAP, "If the image is on removable media, fully load it and copy it to the swap file."),
    (CoffCharacteristics::NET_RUN_FROM_SWAP, "If the image is on network media, fully load it and copy it to the swap file."),
    (CoffCharacteristics::SYSTEM, "The image file is a system file, not a user program."),
    (CoffCharacteristics::DLL, "The image file is a dynamic-link library (DLL)."),
    (CoffCharacteristics::UP_SYSTEM_ONLY, "The file should be run only on a uniprocessor machine."),
    (CoffCharacteristics::BYTES_REVERSED_HI, "Big endian (deprecated)."),
];

/// Description of a single characteristic bit.
pub fn describe_flag(flag: CoffCharacteristics) -> Option<&'static str> {
    COFF_DESCRIPTIONS
        .iter()
        .find(|(candidate, _)| *candidate == flag)
        .map(|(_, text)| *text)
}

impl CoffCharacteristics {
    /// (flag name, description) for every known bit that is set.
    pub fn describe(&self) -> Vec<(&'static str, &'static str)> {
        self.iter_names()
            .map(|(name, flag)| (name, describe_flag(flag).unwrap_or("")))
            .collect()
    }
}

impl SectionCharacteristics {
    /// `rwx`-style permission string.
    pub fn permissions(&self) -> String {
        let mut out = String::with_capacity(3);
        out.push(if self.contains(Self::MEM_READ) { 'r' } else { '-' });
        out.push(if self.contains(Self::MEM_WRITE) { 'w' } else { '-' });
        out.push(if self.contains(Self::MEM_EXECUTE) { 'x' } else { '-' });
        out
    }
}
