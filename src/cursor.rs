/// Byte cursor that field decoders read through.
///
/// The caller owns the walk over the presence bitmask; this only tracks how
/// far into the capture buffer that walk has got.
use crate::error::DecodeError;
use crate::kind::FieldKind;

/// Forward-only read cursor over a borrowed capture buffer.
///
/// Field decoders copy their bytes out through [`ByteCursor::take`], so a
/// decoded value never borrows from the buffer. The position only moves
/// forward, and only by whole fields or explicit [`ByteCursor::skip`]s.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Offset of the next unread byte from the start of the buffer.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Step over `n` bytes (alignment padding, or a field the caller knows
    /// the width of but this crate cannot decode). Returns `false` and
    /// leaves the cursor in place if fewer than `n` bytes remain.
    pub fn skip(&mut self, n: usize) -> bool {
        if n > self.remaining() {
            return false;
        }
        self.pos += n;
        true
    }

    /// Copy out the next `N` bytes of a `kind` field and advance past them.
    ///
    /// On a short buffer nothing is consumed and the error reports `N`
    /// against what is left.
    pub fn take<const N: usize>(&mut self, kind: FieldKind) -> Result<[u8; N], DecodeError> {
        let available = self.remaining();
        let bytes: [u8; N] = self.buf[self.pos..]
            .get(..N)
            .and_then(|s| s.try_into().ok())
            .ok_or(DecodeError::TruncatedField {
                kind,
                needed: N,
                available,
            })?;
        self.pos += N;
        Ok(bytes)
    }
}
