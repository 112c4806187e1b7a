// Thu Jan 16 2026 - Alex

//! Human-readable notes for header fields, keyed by (section key, field name).

use once_cell::sync::Lazy;
use std::collections::HashMap;

static FIELD_DESCRIPTIONS: &[(&str, &str, &str)] = &[
    ("DOS_HEADER", "e_magic", "Magic number ('MZ' in ASCII)"),
    ("DOS_HEADER", "e_cblp", "Bytes in last page of file"),
    ("DOS_HEADER", "e_cp", "Number of pages in file"),
    ("DOS_HEADER", "e_crlc", "Relocation items"),
    ("DOS_HEADER", "e_cparhdr", "Number of paragraphs in header"),
    ("DOS_HEADER", "e_minalloc", "Minimum extra paragraphs needed"),
    ("DOS_HEADER", "e_maxalloc", "Maximum extra paragraphs needed"),
    ("DOS_HEADER", "e_ss", "Initial (relative) SS value"),
    ("DOS_HEADER", "e_sp", "Initial SP value"),
    ("DOS_HEADER", "e_csum", "Checksum"),
    ("DOS_HEADER", "e_ip", "Initial IP value"),
    ("DOS_HEADER", "e_cs", "Initial (relative) CS value"),
    ("DOS_HEADER", "e_lfarlc", "File address of relocation table"),
    ("DOS_HEADER", "e_ovno", "Overlay number"),
    ("DOS_HEADER", "e_res", "Reserved"),
    ("DOS_HEADER", "e_oemid", "OEM identifier (for e_oeminfo)"),
    ("DOS_HEADER", "e_oeminfo", "OEM information (e_oemid specific)"),
    ("DOS_HEADER", "e_res2", "Reserved"),
    ("DOS_HEADER", "e_lfanew", "File offset of the PE/COFF header"),
    ("PE_HEADER", "Signature", "PE signature ('PE\\0\\0')"),
    ("PE_HEADER", "Machine", "The target CPU type."),
    ("PE_HEADER", "NumberOfSections", "The number of sections; the size of the section table, which immediately follows the headers."),
    ("PE_HEADER", "TimeDateStamp", "Low 32 bits of the seconds since 1970-01-01 00:00 UTC at which the file was created."),
    ("PE_HEADER", "PointerToSymbolTable", "File offset of the COFF symbol table, or zero if none is present."),
    ("PE_HEADER", "NumberOfSymbols", "Number of entries in the COFF symbol table."),
    ("PE_HEADER", "SizeOfOptionalHeader", "Size of the optional header; required for images, zero for object files."),
    ("PE_HEADER", "Characteristics", "Flags that indicate the attributes of the file."),
    ("IMAGE_HEADER", "Magic", "Image state: 0x10B is a PE32 executable, 0x20B a PE32+ executable, 0x107 a ROM image."),
    ("IMAGE_HEADER", "MajorLinkerVersion", "The linker major version number."),
    ("IMAGE_HEADER", "MinorLinkerVersion", "The linker minor version number."),
    ("IMAGE_HEADER", "SizeOfCode", "Size of the code section, or the sum of all code sections."),
    ("IMAGE_HEADER", "SizeOfInitializedData", "Size of the initialized data section, or the sum of all such sections."),
    ("IMAGE_HEADER", "SizeOfUninitializedData", "Size of the uninitialized data section (BSS), or the sum of all such sections."),
    ("IMAGE_HEADER", "AddressOfEntryPoint", "Entry point relative to the image base; zero when a DLL has no entry point."),
    ("IMAGE_HEADER", "BaseOfCode", "RVA of the beginning-of-code section."),
    ("IMAGE_HEADER", "BaseOfData", "RVA of the beginning-of-data section (PE32 only)."),
    ("IMAGE_HEADER", "ImageBase", "Preferred load address of the first byte of the image; a multiple of 64 K."),
    ("IMAGE_HEADER", "SectionAlignment", "Alignment of sections in memory; at least FileAlignment."),
    ("IMAGE_HEADER", "FileAlignment", "Alignment of section raw data in the file; a power of 2 between 512 and 64 K."),
    ("IMAGE_HEADER", "MajorOperatingSystemVersion", "Major version of the required operating system."),
    ("IMAGE_HEADER", "MinorOperatingSystemVersion", "Minor version of the required operating system."),
    ("IMAGE_HEADER", "MajorImageVersion", "Major version number of the image."),
    ("IMAGE_HEADER", "MinorImageVersion", "Minor version number of the image."),
    ("IMAGE_HEADER", "MajorSubsystemVersion", "Major version number of the subsystem."),
    ("IMAGE_HEADER", "MinorSubsystemVersion", "Minor version number of the subsystem."),
    ("IMAGE_HEADER", "Win32VersionValue", "Reserved, must be zero."),
    ("IMAGE_HEADER", "SizeOfImage", "Size of the loaded image including all headers; a multiple of SectionAlignment."),
    ("IMAGE_HEADER", "SizeOfHeaders", "Combined size of the DOS stub, PE header and section headers, rounded up to FileAlignment."),
    ("IMAGE_HEADER", "CheckSum", "Image file checksum, validated for drivers and DLLs loaded at boot."),
    ("IMAGE_HEADER", "Subsystem", "The subsystem required to run this image."),
    ("IMAGE_HEADER", "DllCharacteristics", "DLL characteristics flags."),
    ("IMAGE_HEADER", "SizeOfStackReserve", "Size of the stack to reserve."),
    ("IMAGE_HEADER", "SizeOfStackCommit", "Size of the stack to commit."),
    ("IMAGE_HEADER", "SizeOfHeapReserve", "Size of the local heap space to reserve."),
    ("IMAGE_HEADER", "SizeOfHeapCommit", "Size of the local heap space to commit."),
    ("IMAGE_HEADER", "LoaderFlags", "Reserved, must be zero."),
    ("IMAGE_HEADER", "NumberOfRvaAndSizes", "Number of data-directory entries in the remainder of the optional header."),
];

static BY_KEY: Lazy<HashMap<(&'static str, &'static str), &'static str>> = Lazy::new(|| {
    FIELD_DESCRIPTIONS
        .iter()
        .map(|&(section, field, text)| ((section, field), text))
        .collect()
});

pub fn describe(section: &str, field: &str) -> Option<&'static str> {
    BY_KEY.get(&(section, field)).copied()
}
