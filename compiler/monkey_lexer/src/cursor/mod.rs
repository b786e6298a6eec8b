//! Byte cursor over source text.
//!
//! The cursor walks the source byte by byte. End of input is an explicit
//! bounds check (`pos >= src.len()`), so a NUL byte inside the source is
//! an ordinary byte and never mistaken for the end.
//!
//! # Invariant
//!
//! `pos` never exceeds the source length and always sits on a UTF-8
//! character boundary, so slices taken between two cursor positions are
//! always valid `&str`.

/// Copyable cursor over a source string.
///
/// Being [`Copy`], a cursor doubles as a cheap snapshot of scan state: the
/// pure [`scan_at`](crate::scan_at) entry point builds one at an arbitrary
/// position and throws it away afterwards.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// Create a cursor at `pos`, clamped to the source length.
    ///
    /// A `pos` inside a multi-byte character moves forward to the start of
    /// the next character.
    pub fn at(src: &'a str, pos: usize) -> Self {
        let mut pos = pos.min(src.len());
        while !src.is_char_boundary(pos) {
            pos += 1;
        }
        Self { src, pos }
    }

    /// Returns the byte at the current position, or `0` at end of input.
    ///
    /// A `0` return is ambiguous on its own; use [`is_eof()`](Self::is_eof)
    /// to tell an interior NUL from the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.src.as_bytes().get(self.pos).copied().unwrap_or(0)
    }

    /// Returns `true` once every source byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Advance by one byte. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - everything else: 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> usize {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one full UTF-8 character.
    ///
    /// Clamped to the source length, so a cursor can never step beyond the
    /// end even if the width table and the source disagree.
    #[inline]
    pub fn advance_char(&mut self) {
        if self.is_eof() {
            return;
        }
        let width = Self::utf8_char_width(self.current());
        self.pos = (self.pos + width).min(self.src.len());
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// Stops at end of input regardless of what `pred(0)` returns.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Extract `start..end` of the source.
    ///
    /// Returns `""` for ranges that are out of bounds or split a character;
    /// scanner-produced boundaries never do either.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.src.get(start..end).unwrap_or_default()
    }

    /// Extract the source from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }
}

#[cfg(test)]
mod tests;
