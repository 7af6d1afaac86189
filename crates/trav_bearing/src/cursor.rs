//! Byte cursor over an angle or bearing string.
//!
//! The cursor advances through the input byte-by-byte. Reading past the end
//! yields `0x00`, which no grammar predicate accepts, so scanning loops stop
//! at EOF without separate bounds checks.

/// Cursor over the bytes of a single field value.
///
/// The cursor is [`Copy`], enabling cheap state snapshots for backtracking.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            buf: text.as_bytes(),
            pos: 0,
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.buf.get(self.pos).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Returns the number of bytes consumed.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while pred(self.current()) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Skip spaces and tabs. Returns `true` if any were skipped.
    #[inline]
    pub(crate) fn eat_whitespace(&mut self) -> bool {
        self.eat_while(|b| b == b' ' || b == b'\t') > 0
    }

    /// Consume `symbol` if the input continues with it.
    pub(crate) fn eat_str(&mut self, symbol: &str) -> bool {
        let rest = self.buf.get(self.pos..).unwrap_or_default();
        if rest.starts_with(symbol.as_bytes()) {
            self.pos += symbol.len();
            true
        } else {
            false
        }
    }

    /// Bytes from `start` to the current position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a [u8] {
        self.buf.get(start..self.pos).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
