// Wed Jan 15 2026 - Alex

use crate::decoder::{Cursor, DecodeError, RawField, RawRecord};
use crate::schema::StructSchema;
use crate::source::{ByteSource, SourceError};
use bytes::Bytes;

/// Unpacks schemas from a byte source, one struct read at a time.
pub struct SequentialDecoder<'a, S: ByteSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: ByteSource + ?Sized> SequentialDecoder<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &'a S {
        self.source
    }

    /// Reads `size(schema)` bytes at the cursor, slices them per field and
    /// advances the cursor by exactly that amount.
    pub fn decode(&self, schema: &StructSchema, cursor: &mut Cursor) -> Result<RawRecord, DecodeError> {
        let base = cursor.position();
        let data = self.read_exact(schema.name(), base, schema.size())?;

        let mut record = RawRecord::new(schema.name(), base);
        let mut pos = 0usize;
        for spec in schema.fields() {
            let bytes = data.slice(pos..pos + spec.width);
            record.push(RawField::new(spec.name, base + pos as u64, bytes));
            pos += spec.width;
        }
        cursor.advance(pos);

        log::trace!("Decoded {} at 0x{:x} ({} bytes)", schema.name(), base, pos);
        Ok(record)
    }

    /// Decodes `count` contiguous copies of `schema`.
    pub fn decode_many(
        &self,
        schema: &StructSchema,
        cursor: &mut Cursor,
        count: usize,
    ) -> Result<Vec<RawRecord>, DecodeError> {
        let mut records = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            records.push(self.decode(schema, cursor)?);
        }
        Ok(records)
    }

    /// Reads a variable-length region as a single field and advances past it.
    pub fn read_field(&self, name: &'static str, cursor: &mut Cursor, len: usize) -> Result<RawField, DecodeError> {
        let offset = cursor.position();
        let bytes = self.read_exact(name, offset, len)?;
        cursor.advance(len);
        Ok(RawField::new(name, offset, bytes))
    }

    fn read_exact(&self, structure: &'static str, offset: u64, needed: usize) -> Result<Bytes, DecodeError> {
        let total = self.source.len();
        let bounds_error = || DecodeError::ReadBounds {
            structure,
            offset,
            needed,
            available: total.saturating_sub(offset),
        };

        match offset.checked_add(needed as u64) {
            Some(end) if end <= total => {}
            _ => return Err(bounds_error()),
        }

        match self.source.read_range(offset, needed) {
            Ok(bytes) => Ok(bytes),
            Err(SourceError::OutOfRange { .. }) => Err(bounds_error()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Decodes one struct starting at `start`; returns the record and the offset
/// just past it.
pub fn decode<S: ByteSource + ?Sized>(
    schema: &StructSchema,
    source: &S,
    start: u64,
) -> Result<(RawRecord, u64), DecodeError> {
    let mut cursor = Cursor::new(start);
    let record = SequentialDecoder::new(source).decode(schema, &mut cursor)?;
    Ok((record, cursor.position()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::pe::{DOS_HEADER, SECTION_HEADER};
    use crate::schema::FieldSpec;
    use crate::source::{BufferSource, CancelToken, CancellableSource};

    const PAIR: StructSchema = StructSchema::new(
        "PAIR",
        &[
            FieldSpec { name: "lo", width: 2 },
            FieldSpec { name: "hi", width: 4 },
        ],
    );

    #[test]
    fn test_decode_advances_cursor() {
        let source = BufferSource::from(vec![1, 0, 2, 0, 0, 0, 3, 0, 4, 0, 0, 0]);
        let decoder = SequentialDecoder::new(&source);
        let mut cursor = Cursor::start();

        let first = decoder.decode(&PAIR, &mut cursor).unwrap();
        assert_eq!(cursor.position(), 6);
        assert_eq!(first.uint("lo").unwrap(), 1);
        assert_eq!(first.uint("hi").unwrap(), 2);
        assert_eq!(first.get("hi").unwrap().offset(), 2);

        let second = decoder.decode(&PAIR, &mut cursor).unwrap();
        assert_eq!(second.offset(), 6);
        assert_eq!(second.uint("hi").unwrap(), 4);
        assert_eq!(cursor.position(), 12);
    }

    #[test]
    fn test_decode_free_fn() {
        let source = BufferSource::from(vec![0u8; 80]);
        let (record, end) = decode(&DOS_HEADER, &source, 8).unwrap();
        assert_eq!(record.offset(), 8);
        assert_eq!(end, 72);
        assert_eq!(record.len(), DOS_HEADER.len());
    }

    #[test]
    fn test_short_source() {
        let source = BufferSource::from(vec![0u8; 63]);
        let err = decode(&DOS_HEADER, &source, 0).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::ReadBounds { structure: "DOS_HEADER", offset: 0, needed: 64, available: 63 }
        ));
    }

    #[test]
    fn test_failed_read_keeps_cursor() {
        let source = BufferSource::from(vec![0u8; 50]);
        let decoder = SequentialDecoder::new(&source);
        let mut cursor = Cursor::new(20);
        assert!(decoder.decode(&SECTION_HEADER, &mut cursor).is_err());
        assert_eq!(cursor.position(), 20);
    }

    #[test]
    fn test_decode_many_contiguous() {
        let source = BufferSource::from(vec![0u8; 120]);
        let decoder = SequentialDecoder::new(&source);
        let mut cursor = Cursor::start();
        let records = decoder.decode_many(&SECTION_HEADER, &mut cursor, 3).unwrap();
        assert_eq!(records.len(), 3);
        for pair in records.windows(2) {
            assert_eq!(pair[0].end(), pair[1].offset());
        }
        assert!(decoder.decode_many(&SECTION_HEADER, &mut Cursor::start(), 4).is_err());
    }

    #[test]
    fn test_cancelled_source() {
        let token = CancelToken::new();
        token.cancel();
        let source = CancellableSource::new(BufferSource::from(vec![0u8; 64]), token);
        let err = decode(&DOS_HEADER, &source, 0).unwrap_err();
        assert!(matches!(err, DecodeError::Source(SourceError::Cancelled)));
    }
}
