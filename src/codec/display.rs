// Tue Jan 13 2026 - Alex

//! Presentation helpers. Nothing in here takes part in structural decoding.

use crate::codec::ByteOrder;

/// Lowercase hex. `Reversed` prints the most significant byte first, which
/// is how a little-endian field reads as a number.
pub fn hex(bytes: &[u8], order: ByteOrder) -> String {
    match order {
        ByteOrder::LittleEndian => bytes.iter().map(|b| format!("{:02x}", b)).collect(),
        ByteOrder::Reversed => bytes.iter().rev().map(|b| format!("{:02x}", b)).collect(),
    }
}

/// Printable ASCII, everything else (space included) shown as '.'.
pub fn ascii(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
        .collect()
}

/// Section names are NUL-padded to eight bytes.
pub fn section_name(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
