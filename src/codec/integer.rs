// Tue Jan 13 2026 - Alex

use crate::codec::CodecError;
use bytes::Buf;

pub const MAX_INTEGER_WIDTH: usize = 8;

/// On-disk PE fields are little-endian. `Reversed` reads the bytes the other
/// way round and only exists for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    LittleEndian,
    Reversed,
}

pub fn uint(bytes: &[u8], order: ByteOrder) -> Result<u64, CodecError> {
    let width = bytes.len();
    if width > MAX_INTEGER_WIDTH {
        return Err(CodecError::IntegerTooWide {
            width,
            max: MAX_INTEGER_WIDTH,
        });
    }
    let mut buf = bytes;
    let value = match order {
        ByteOrder::LittleEndian => buf.get_uint_le(width),
        ByteOrder::Reversed => buf.get_uint(width),
    };
    Ok(value)
}

pub fn uint_le(bytes: &[u8]) -> Result<u64, CodecError> {
    uint(bytes, ByteOrder::LittleEndian)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_little_endian() {
        assert_eq!(uint_le(&[0x01, 0x00]).unwrap(), 1);
        assert_eq!(uint_le(&[0x00, 0x01]).unwrap(), 256);
        assert_eq!(uint_le(&[0x0B, 0x01]).unwrap(), 0x10B);
        assert_eq!(uint_le(&[0x80]).unwrap(), 0x80);
        assert_eq!(uint_le(&[]).unwrap(), 0);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(uint(&[0x01, 0x00], ByteOrder::Reversed).unwrap(), 256);
        assert_eq!(uint(&[0x00, 0x00, 0x40, 0x00], ByteOrder::Reversed).unwrap(), 0x4000);
    }

    #[test]
    fn test_full_64_bit_width() {
        let image_base = 0x0000_0001_4000_0000u64;
        assert_eq!(uint_le(&image_base.to_le_bytes()).unwrap(), image_base);
        assert_eq!(uint_le(&[0xFF; 8]).unwrap(), u64::MAX);
        // High byte set: would overflow any 32-bit accumulator.
        assert_eq!(uint_le(&[0, 0, 0, 0, 0, 0, 0, 0x80]).unwrap(), 1 << 63);
    }

    #[test]
    fn test_too_wide() {
        assert_eq!(
            uint_le(&[0u8; 20]),
            Err(CodecError::IntegerTooWide { width: 20, max: 8 })
        );
    }
}
