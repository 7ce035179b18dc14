//! Bounds-checked, forward-only reader over a record's bytes.
//!
//! Every decode function in [codec](crate::codec) goes through [`Cursor::advance`], so no
//! read can run past the end of the record it was handed.

use crate::codec::CodecError;

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Cursor { data, pos: 0 }
    }

    /// Consume the next `n` bytes and return them.
    ///
    /// Fails with [`CodecError::CorruptedRecord`] if fewer than `n` bytes remain; the cursor
    /// does not move in that case.
    pub fn advance(&mut self, n: usize) -> Result<&'a [u8], CodecError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or_else(|| {
                CodecError::CorruptedRecord(format!(
                    "read of {} bytes at offset {} would pass end of record ({} bytes)",
                    n,
                    self.pos,
                    self.data.len()
                ))
            })?;
        let out = &self.data[self.pos..end];
        self.pos = end;
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        Ok(self.advance(1)?[0])
    }

    /// Look at the next byte without consuming it.
    pub fn peek_u8(&self) -> Result<u8, CodecError> {
        self.data.get(self.pos).copied().ok_or_else(|| {
            CodecError::CorruptedRecord(format!("peek at offset {} past end of record", self.pos))
        })
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_past_end_is_corrupted_and_does_not_move() {
        let mut c = Cursor::new(&[1, 2, 3]);
        assert_eq!(c.advance(2).unwrap(), &[1, 2]);
        let err = c.advance(2).unwrap_err();
        assert!(matches!(err, CodecError::CorruptedRecord(_)));
        assert_eq!(c.position(), 2);
        assert_eq!(c.read_u8().unwrap(), 3);
        assert!(c.is_empty());
        assert!(c.peek_u8().is_err());
    }

    #[test]
    fn huge_advance_does_not_overflow() {
        let mut c = Cursor::new(&[0]);
        c.read_u8().unwrap();
        assert!(c.advance(usize::MAX).is_err());
    }
}
