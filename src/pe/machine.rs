// Thu Jan 16 2026 - Alex

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineType {
    pub value: u16,
    pub name: &'static str,
    pub description: &'static str,
}

const fn machine(value: u16, name: &'static str, description: &'static str) -> MachineType {
    MachineType { value, name, description }
}

pub static MACHINE_TYPES: &[MachineType] = &[
    machine(0x0, "IMAGE_FILE_MACHINE_UNKNOWN", "Applicable to any machine type"),
    machine(0x1d3, "IMAGE_FILE_MACHINE_AM33", "Matsushita AM33"),
    machine(0x8664, "IMAGE_FILE_MACHINE_AMD64", "Intel x64"),
    machine(0x1c0, "IMAGE_FILE_MACHINE_ARM", "ARM little endian"),
    machine(0xaa64, "IMAGE_FILE_MACHINE_ARM64", "ARM64 little endian"),
    machine(0x1c4, "IMAGE_FILE_MACHINE_ARMNT", "ARM Thumb-2 little endian"),
    machine(0xebc, "IMAGE_FILE_MACHINE_EBC", "EFI byte code"),
    machine(0x14c, "IMAGE_FILE_MACHINE_I386", "Intel x86 (386 and similar processors)"),
    machine(0x200, "IMAGE_FILE_MACHINE_IA64", "Intel Itanium processor family"),
    machine(0x9041, "IMAGE_FILE_MACHINE_M32R", "Mitsubishi M32R little endian"),
    machine(0x266, "IMAGE_FILE_MACHINE_MIPS16", "MIPS16"),
    machine(0x366, "IMAGE_FILE_MACHINE_MIPSFPU", "MIPS with FPU"),
    machine(0x466, "IMAGE_FILE_MACHINE_MIPSFPU16", "MIPS16 with FPU"),
    machine(0x1f0, "IMAGE_FILE_MACHINE_POWERPC", "Power PC little endian"),
    machine(0x1f1, "IMAGE_FILE_MACHINE_POWERPCFP", "Power PC with floating point support"),
    machine(0x166, "IMAGE_FILE_MACHINE_R4000", "MIPS little endian"),
    machine(0x5032, "IMAGE_FILE_MACHINE_RISCV32", "RISC-V 32-bit address space"),
    machine(0x5064, "IMAGE_FILE_MACHINE_RISCV64", "RISC-V 64-bit address space"),
    machine(0x5128, "IMAGE_FILE_MACHINE_RISCV128", "RISC-V 128-bit address space"),
    machine(0x1a2, "IMAGE_FILE_MACHINE_SH3", "Hitachi SH3"),
    machine(0x1a3, "IMAGE_FILE_MACHINE_SH3DSP", "Hitachi SH3 DSP"),
    machine(0x1a6, "IMAGE_FILE_MACHINE_SH4", "Hitachi SH4"),
    machine(0x1a8, "IMAGE_FILE_MACHINE_SH5", "Hitachi SH5"),
    machine(0x1c2, "IMAGE_FILE_MACHINE_THUMB", "Thumb"),
    machine(0x169, "IMAGE_FILE_MACHINE_WCEMIPSV2", "MIPS little endian WCE v2"),
];

static BY_VALUE: Lazy<HashMap<u16, &'static MachineType>> =
    Lazy::new(|| MACHINE_TYPES.iter().map(|m| (m.value, m)).collect());

pub fn lookup(value: u16) -> Option<&'static MachineType> {
    BY_VALUE.get(&value).copied()
}

pub fn describe(value: u16) -> &'static str {
    lookup(value).map(|m| m.description).unwrap_or("Invalid machine type")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(describe(0x8664), "Intel x64");
        assert_eq!(describe(0x14c), "Intel x86 (386 and similar processors)");
        assert_eq!(lookup(0xaa64).map(|m| m.name), Some("IMAGE_FILE_MACHINE_ARM64"));
        assert_eq!(describe(0x1f1), "Power PC with floating point support");
        assert_eq!(describe(0x169), "MIPS little endian WCE v2");
        assert_eq!(describe(0x1234), "Invalid machine type");
    }

    #[test]
    fn test_values_unique() {
        assert_eq!(BY_VALUE.len(), MACHINE_TYPES.len());
    }
}
