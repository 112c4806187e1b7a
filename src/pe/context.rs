// Wed Jan 15 2026 - Alex

use crate::decoder::{Cursor, RawField, RawRecord, SequentialDecoder};
use crate::pe::{ParseState, PeError};
use crate::schema::StructSchema;
use crate::source::ByteSource;

/// Everything one parse mutates. Created per call and dropped with it, so
/// parses over different sources never share state.
pub struct ParseContext<'a, S: ByteSource + ?Sized> {
    decoder: SequentialDecoder<'a, S>,
    cursor: Cursor,
    state: ParseState,
}

impl<'a, S: ByteSource + ?Sized> ParseContext<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            decoder: SequentialDecoder::new(source),
            cursor: Cursor::start(),
            state: ParseState::Start,
        }
    }

    pub fn enter(&mut self, state: ParseState) {
        debug_assert_eq!(self.state.next(), Some(state), "out-of-order parse stage");
        log::debug!("{} at {}", state, self.cursor);
        self.state = state;
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn decode(&mut self, schema: &StructSchema) -> Result<RawRecord, PeError> {
        let state = self.state;
        self.decoder
            .decode(schema, &mut self.cursor)
            .map_err(|e| PeError::from_decode(state, e))
    }

    pub fn decode_many(&mut self, schema: &StructSchema, count: usize) -> Result<Vec<RawRecord>, PeError> {
        let state = self.state;
        self.decoder
            .decode_many(schema, &mut self.cursor, count)
            .map_err(|e| PeError::from_decode(state, e))
    }

    pub fn read_field(&mut self, name: &'static str, len: usize) -> Result<RawField, PeError> {
        let state = self.state;
        self.decoder
            .read_field(name, &mut self.cursor, len)
            .map_err(|e| PeError::from_decode(state, e))
    }

    /// Decodes `schema` at the cursor without consuming it.
    pub fn probe(&self, schema: &StructSchema) -> Result<RawRecord, PeError> {
        let mut lookahead = self.cursor;
        self.decoder
            .decode(schema, &mut lookahead)
            .map_err(|e| PeError::from_decode(self.state, e))
    }

    pub fn uint(&self, record: &RawRecord, field: &str) -> Result<u64, PeError> {
        record
            .uint(field)
            .map_err(|e| PeError::from_decode(self.state, e))
    }
}
