// Wed Jan 15 2026 - Alex

//! On-disk layouts of the PE/COFF structures, after `winnt.h`.
//!
//! Only the header tables are decoded by the parser. The directory tables
//! below `SECTION_HEADER` describe structures that data directories point at
//! and are kept for consumers that want to decode them themselves.

use crate::schema::{FieldSpec, StructSchema};

macro_rules! schema {
    ($name:literal, [$(($field:literal, $width:literal)),* $(,)?]) => {
        StructSchema::new($name, &[$(FieldSpec { name: $field, width: $width }),*])
    };
}

pub const DOS_HEADER: StructSchema = schema!("DOS_HEADER", [
    ("e_magic", 2),
    ("e_cblp", 2),
    ("e_cp", 2),
    ("e_crlc", 2),
    ("e_cparhdr", 2),
    ("e_minalloc", 2),
    ("e_maxalloc", 2),
    ("e_ss", 2),
    ("e_sp", 2),
    ("e_csum", 2),
    ("e_ip", 2),
    ("e_cs", 2),
    ("e_lfarlc", 2),
    ("e_ovno", 2),
    ("e_res", 8),
    ("e_oemid", 2),
    ("e_oeminfo", 2),
    ("e_res2", 20),
    ("e_lfanew", 4),
]);

/// PE signature followed by the COFF file header.
pub const PE_HEADER: StructSchema = schema!("PE_HEADER", [
    ("Signature", 4),
    ("Machine", 2),
    ("NumberOfSections", 2),
    ("TimeDateStamp", 4),
    ("PointerToSymbolTable", 4),
    ("NumberOfSymbols", 4),
    ("SizeOfOptionalHeader", 2),
    ("Characteristics", 2),
]);

pub const IMAGE_HEADER_32: StructSchema = schema!("IMAGE_HEADER", [
    ("Magic", 2),
    ("MajorLinkerVersion", 1),
    ("MinorLinkerVersion", 1),
    ("SizeOfCode", 4),
    ("SizeOfInitializedData", 4),
    ("SizeOfUninitializedData", 4),
    ("AddressOfEntryPoint", 4),
    ("BaseOfCode", 4),
    ("BaseOfData", 4),
    ("ImageBase", 4),
    ("SectionAlignment", 4),
    ("FileAlignment", 4),
    ("MajorOperatingSystemVersion", 2),
    ("MinorOperatingSystemVersion", 2),
    ("MajorImageVersion", 2),
    ("MinorImageVersion", 2),
    ("MajorSubsystemVersion", 2),
    ("MinorSubsystemVersion", 2),
    ("Win32VersionValue", 4),
    ("SizeOfImage", 4),
    ("SizeOfHeaders", 4),
    ("CheckSum", 4),
    ("Subsystem", 2),
    ("DllCharacteristics", 2),
    ("SizeOfStackReserve", 4),
    ("SizeOfStackCommit", 4),
    ("SizeOfHeapReserve", 4),
    ("SizeOfHeapCommit", 4),
    ("LoaderFlags", 4),
    ("NumberOfRvaAndSizes", 4),
]);

/// PE32+: no BaseOfData, 8-byte ImageBase and stack/heap sizes.
pub const IMAGE_HEADER_64: StructSchema = schema!("IMAGE_HEADER", [
    ("Magic", 2),
    ("MajorLinkerVersion", 1),
    ("MinorLinkerVersion", 1),
    ("SizeOfCode", 4),
    ("SizeOfInitializedData", 4),
    ("SizeOfUninitializedData", 4),
    ("AddressOfEntryPoint", 4),
    ("BaseOfCode", 4),
    ("ImageBase", 8),
    ("SectionAlignment", 4),
    ("FileAlignment", 4),
    ("MajorOperatingSystemVersion", 2),
    ("MinorOperatingSystemVersion", 2),
    ("MajorImageVersion", 2),
    ("MinorImageVersion", 2),
    ("MajorSubsystemVersion", 2),
    ("MinorSubsystemVersion", 2),
    ("Win32VersionValue", 4),
    ("SizeOfImage", 4),
    ("SizeOfHeaders", 4),
    ("CheckSum", 4),
    ("Subsystem", 2),
    ("DllCharacteristics", 2),
    ("SizeOfStackReserve", 8),
    ("SizeOfStackCommit", 8),
    ("SizeOfHeapReserve", 8),
    ("SizeOfHeapCommit", 8),
    ("LoaderFlags", 4),
    ("NumberOfRvaAndSizes", 4),
]);

/// Sixteen (RVA, size) pairs, in directory index order.
pub const DATA_DIRECTORY: StructSchema = schema!("DATA_DIRECTORY", [
    ("Export", 4),
    ("Export_size", 4),
    ("Import", 4),
    ("Import_size", 4),
    ("Resource", 4),
    ("Resource_size", 4),
    ("Exception", 4),
    ("Exception_size", 4),
    ("CertificateTable", 4),
    ("CertificateTable_size", 4),
    ("BaseRelocationTable", 4),
    ("BaseRelocationTable_size", 4),
    ("Debug", 4),
    ("Debug_size", 4),
    ("ArchitectureSpecificData", 4),
    ("ArchitectureSpecificData_size", 4),
    ("GlobalPointerRegister", 4),
    ("GlobalPointerRegister_size", 4),
    ("ThreadLocalStorage", 4),
    ("ThreadLocalStorage_size", 4),
    ("LoadConfiguration", 4),
    ("LoadConfiguration_size", 4),
    ("BoundImport", 4),
    ("BoundImport_size", 4),
    ("ImportAddressTable", 4),
    ("ImportAddressTable_size", 4),
    ("DelayImportTable", 4),
    ("DelayImportTable_size", 4),
    ("CLRRuntimeHeader", 4),
    ("CLRRuntimeHeader_size", 4),
    ("Reserved", 4),
    ("Reserved_size", 4),
]);

pub const DATA_DIRECTORY_ENTRIES: usize = 16;

pub const SECTION_HEADER: StructSchema = schema!("SECTION_HEADER", [
    ("Name", 8),
    ("VirtualSize", 4),
    ("VirtualAddress", 4),
    ("SizeOfRawData", 4),
    ("PointerToRawData", 4),
    ("PointerToRelocations", 4),
    ("PointerToLinenumbers", 4),
    ("NumberOfRelocations", 2),
    ("NumberOfLinenumbers", 2),
    ("Characteristics", 4),
]);

pub const EXPORT_DIRECTORY: StructSchema = schema!("EXPORT_DIRECTORY", [
    ("Characteristics", 4),
    ("TimeDateStamp", 4),
    ("MajorVersion", 2),
    ("MinorVersion", 2),
    ("Name", 4),
    ("Base", 4),
    ("NumberOfFunctions", 4),
    ("NumberOfNames", 4),
    ("AddressOfFunctions", 4),
    ("AddressOfNames", 4),
    ("AddressOfNameOrdinals", 4),
]);

pub const DEBUG_DIRECTORY: StructSchema = schema!("DEBUG_DIRECTORY", [
    ("Characteristics", 4),
    ("TimeDateStamp", 4),
    ("MajorVersion", 2),
    ("MinorVersion", 2),
    ("Type", 4),
    ("SizeOfData", 4),
    ("AddressOfRawData", 4),
    ("PointerToRawData", 4),
]);

pub const IMPORT_DESCRIPTOR: StructSchema = schema!("IMPORT_DESCRIPTOR", [
    ("OriginalFirstThunk", 4),
    ("TimeDateStamp", 4),
    ("ForwarderChain", 4),
    ("Name", 4),
    ("FirstThunk", 4),
]);

pub const DELAY_IMPORT_DESCRIPTOR: StructSchema = schema!("DELAY_IMPORT_DESCRIPTOR", [
    ("Attributes", 4),
    ("Name", 4),
    ("ModuleHandle", 4),
    ("ImportAddressTable", 4),
    ("ImportNameTable", 4),
    ("BoundImportAddressTable", 4),
    ("UnloadInformationTable", 4),
    ("TimeDateStamp", 4),
]);

pub const BOUND_IMPORT_DESCRIPTOR: StructSchema = schema!("BOUND_IMPORT_DESCRIPTOR", [
    ("TimeDateStamp", 4),
    ("OffsetModuleName", 2),
    ("NumberOfModuleForwarderRefs", 2),
]);

pub const BASE_RELOCATION: StructSchema = schema!("BASE_RELOCATION", [
    ("VirtualAddress", 4),
    ("SizeOfBlock", 4),
]);

pub const EXCEPTION_FUNCTION_ENTRY: StructSchema = schema!("EXCEPTION_FUNCTION_ENTRY", [
    ("StartingAddress", 4),
    ("EndingAddress", 4),
    ("UnwindInfoAddress", 4),
]);

pub const TLS_DIRECTORY_32: StructSchema = schema!("TLS_DIRECTORY", [
    ("StartAddressOfRawData", 4),
    ("EndAddressOfRawData", 4),
    ("AddressOfIndex", 4),
    ("AddressOfCallBacks", 4),
    ("SizeOfZeroFill", 4),
    ("Characteristics", 4),
]);

pub const TLS_DIRECTORY_64: StructSchema = schema!("TLS_DIRECTORY", [
    ("StartAddressOfRawData", 8),
    ("EndAddressOfRawData", 8),
    ("AddressOfIndex", 8),
    ("AddressOfCallBacks", 8),
    ("SizeOfZeroFill", 4),
    ("Characteristics", 4),
]);

pub const LOAD_CONFIG_DIRECTORY_32: StructSchema = schema!("LOAD_CONFIG_DIRECTORY", [
    ("Size", 4),
    ("TimeDateStamp", 4),
    ("MajorVersion", 2),
    ("MinorVersion", 2),
    ("GlobalFlagsClear", 4),
    ("GlobalFlagsSet", 4),
    ("CriticalSectionDefaultTimeout", 4),
    ("DeCommitFreeBlockThreshold", 4),
    ("DeCommitTotalFreeThreshold", 4),
    ("LockPrefixTable", 4),
    ("MaximumAllocationSize", 4),
    ("VirtualMemoryThreshold", 4),
    ("ProcessHeapFlags", 4),
    ("ProcessAffinityMask", 4),
    ("CSDVersion", 2),
    ("Reserved1", 2),
    ("EditList", 4),
    ("SecurityCookie", 4),
    ("SEHandlerTable", 4),
    ("SEHandlerCount", 4),
]);

pub const LOAD_CONFIG_DIRECTORY_64: StructSchema = schema!("LOAD_CONFIG_DIRECTORY", [
    ("Size", 4),
    ("TimeDateStamp", 4),
    ("MajorVersion", 2),
    ("MinorVersion", 2),
    ("GlobalFlagsClear", 4),
    ("GlobalFlagsSet", 4),
    ("CriticalSectionDefaultTimeout", 4),
    ("DeCommitFreeBlockThreshold", 8),
    ("DeCommitTotalFreeThreshold", 8),
    ("LockPrefixTable", 8),
    ("MaximumAllocationSize", 8),
    ("VirtualMemoryThreshold", 8),
    ("ProcessAffinityMask", 8),
    ("ProcessHeapFlags", 4),
    ("CSDVersion", 2),
    ("Reserved1", 2),
    ("EditList", 8),
    ("SecurityCookie", 8),
    ("SEHandlerTable", 8),
    ("SEHandlerCount", 8),
]);

pub const RESOURCE_DIRECTORY: StructSchema = schema!("RESOURCE_DIRECTORY", [
    ("Characteristics", 4),
    ("TimeDateStamp", 4),
    ("MajorVersion", 2),
    ("MinorVersion", 2),
    ("NumberOfNamedEntries", 2),
    ("NumberOfIdEntries", 2),
]);

/// Fields that hold raw bytes rather than a little-endian integer.
const BYTE_ARRAYS: &[(&str, &str)] = &[
    ("DOS_HEADER", "e_res"),
    ("DOS_HEADER", "e_res2"),
    ("PE_HEADER", "Signature"),
    ("SECTION_HEADER", "Name"),
];

pub fn is_byte_array(structure: &str, field: &str) -> bool {
    BYTE_ARRAYS.iter().any(|&(s, f)| s == structure && f == field)
}

/// Every table in this module, for lookups by name.
pub const ALL: &[StructSchema] = &[
    DOS_HEADER,
    PE_HEADER,
    IMAGE_HEADER_32,
    IMAGE_HEADER_64,
    DATA_DIRECTORY,
    SECTION_HEADER,
    EXPORT_DIRECTORY,
    DEBUG_DIRECTORY,
    IMPORT_DESCRIPTOR,
    DELAY_IMPORT_DESCRIPTOR,
    BOUND_IMPORT_DESCRIPTOR,
    BASE_RELOCATION,
    EXCEPTION_FUNCTION_ENTRY,
    TLS_DIRECTORY_32,
    TLS_DIRECTORY_64,
    LOAD_CONFIG_DIRECTORY_32,
    LOAD_CONFIG_DIRECTORY_64,
    RESOURCE_DIRECTORY,
];
