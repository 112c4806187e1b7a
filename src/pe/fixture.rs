// Thu Jan 16 2026 - Alex

//! Synthetic PE images for tests.

use crate::pe::architecture::{PE32_MAGIC, PE32_PLUS_MAGIC};

const STUB_TEXT: &[u8] = b"\x0e\x1f\xba\x0e\x00\xb4\x09\xcd\x21\xb8\x01\x4c\xcd\x21This program cannot be run in DOS mode.\r\r\n$";

pub(crate) struct TestSection {
    pub name: &'static str,
    pub virtual_address: u32,
    pub virtual_size: u32,
    pub raw_pointer: u32,
    pub raw_size: u32,
    pub characteristics: u32,
}

pub(crate) struct ImageBuilder {
    pub magic: u16,
    pub e_lfanew: u32,
    pub machine: u16,
    pub timestamp: u32,
    pub characteristics: u16,
    pub size_of_optional_header: Option<u16>,
    pub entry_point: u32,
    pub image_base: u64,
    pub number_of_rva_and_sizes: u32,
    pub directory_entries: usize,
    pub sections: Vec<TestSection>,
    pub trailing: usize,
}

impl ImageBuilder {
    pub fn pe32() -> Self {
        Self {
            magic: PE32_MAGIC,
            e_lfanew: 0x80,
            machine: 0x14c,
            timestamp: 0x5F5E_1000,
            characteristics: 0x0102,
            size_of_optional_header: None,
            entry_point: 0x1234,
            image_base: 0x0040_0000,
            number_of_rva_and_sizes: 16,
            directory_entries: 16,
            sections: default_sections(),
            trailing: 0x200,
        }
    }

    pub fn pe32_plus() -> Self {
        Self {
            magic: PE32_PLUS_MAGIC,
            machine: 0x8664,
            characteristics: 0x0022,
            image_base: 0x0000_0001_4000_0000,
            ..Self::pe32()
        }
    }

    pub fn magic(mut self, magic: u16) -> Self {
        self.magic = magic;
        self
    }

    pub fn e_lfanew(mut self, e_lfanew: u32) -> Self {
        self.e_lfanew = e_lfanew;
        self
    }

    pub fn size_of_optional_header(mut self, size: u16) -> Self {
        self.size_of_optional_header = Some(size);
        self
    }

    pub fn directories(mut self, declared: u32, written: usize) -> Self {
        self.number_of_rva_and_sizes = declared;
        self.directory_entries = written;
        self
    }

    pub fn sections(mut self, sections: Vec<TestSection>) -> Self {
        self.sections = sections;
        self
    }

    pub fn trailing(mut self, trailing: usize) -> Self {
        self.trailing = trailing;
        self
    }

    fn is_64(&self) -> bool {
        self.magic == PE32_PLUS_MAGIC
    }

    fn optional_size(&self) -> usize {
        if self.is_64() { 112 } else { 96 }
    }

    /// Bytes up to the end of the section table.
    pub fn headers_len(&self) -> usize {
        self.e_lfanew as usize + 24 + self.optional_size() + self.directory_entries * 8 + self.sections.len() * 40
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = vec![0u8; 64];
        out[0] = b'M';
        out[1] = b'Z';
        out[2] = 0x90;
        out[0x3C..0x40].copy_from_slice(&self.e_lfanew.to_le_bytes());

        let mut stub = STUB_TEXT.iter().copied().cycle();
        while out.len() < self.e_lfanew as usize {
            out.push(stub.next().unwrap_or(0));
        }

        let optional_len = self.optional_size() + self.directory_entries * 8;
        let size_of_optional = self.size_of_optional_header.unwrap_or(optional_len as u16);

        out.extend_from_slice(b"PE\0\0");
        put16(&mut out, self.machine);
        put16(&mut out, self.sections.len() as u16);
        put32(&mut out, self.timestamp);
        put32(&mut out, 0);
        put32(&mut out, 0);
        put16(&mut out, size_of_optional);
        put16(&mut out, self.characteristics);

        put16(&mut out, self.magic);
        out.push(14);
        out.push(0);
        put32(&mut out, 0x1000);
        put32(&mut out, 0x800);
        put32(&mut out, 0);
        put32(&mut out, self.entry_point);
        put32(&mut out, 0x1000);
        if self.is_64() {
            put64(&mut out, self.image_base);
        } else {
            put32(&mut out, 0x2000);
            put32(&mut out, self.image_base as u32);
        }
        put32(&mut out, 0x1000);
        put32(&mut out, 0x200);
        for version in [6u16, 0, 0, 0, 6, 0] {
            put16(&mut out, version);
        }
        put32(&mut out, 0);
        put32(&mut out, 0x4000);
        put32(&mut out, 0x400);
        put32(&mut out, 0);
        put16(&mut out, 3);
        put16(&mut out, 0x8160);
        for size in [0x10_0000u64, 0x1000, 0x10_0000, 0x1000] {
            if self.is_64() {
                put64(&mut out, size);
            } else {
                put32(&mut out, size as u32);
            }
        }
        put32(&mut out, 0);
        put32(&mut out, self.number_of_rva_and_sizes);

        for index in 0..self.directory_entries as u32 {
            put32(&mut out, 0x100 * (index + 1));
            put32(&mut out, 0x10 * (index + 1));
        }

        for section in &self.sections {
            let mut name = [0u8; 8];
            let len = section.name.len().min(8);
            name[..len].copy_from_slice(&section.name.as_bytes()[..len]);
            out.extend_from_slice(&name);
            put32(&mut out, section.virtual_size);
            put32(&mut out, section.virtual_address);
            put32(&mut out, section.raw_size);
            put32(&mut out, section.raw_pointer);
            put32(&mut out, 0);
            put32(&mut out, 0);
            put16(&mut out, 0);
            put16(&mut out, 0);
            put32(&mut out, section.characteristics);
        }

        out.extend(std::iter::repeat(0u8).take(self.trailing));
        out
    }
}

pub(crate) fn default_sections() -> Vec<TestSection> {
    vec![
        TestSection {
            name: ".text",
            virtual_address: 0x1000,
            virtual_size: 0x0E00,
            raw_pointer: 0x400,
            raw_size: 0x1000,
            characteristics: 0x6000_0020,
        },
        TestSection {
            name: ".rdata",
            virtual_address: 0x2000,
            virtual_size: 0x0300,
            raw_pointer: 0x1400,
            raw_size: 0x400,
            characteristics: 0x4000_0040,
        },
        TestSection {
            name: ".data",
            virtual_address: 0x3000,
            virtual_size: 0x0100,
            raw_pointer: 0x1800,
            raw_size: 0x200,
            characteristics: 0xC000_0040,
        },
    ]
}

fn put16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

fn put64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}
