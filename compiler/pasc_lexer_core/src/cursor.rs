//! Cheap, copyable cursor over a sentinel-terminated buffer.
//!
//! The cursor is the character stream both scanners read from. It
//! advances byte-by-byte for ASCII dispatch and character-by-character
//! when a scanner needs whole code points. EOF is detected when the
//! current byte equals the sentinel (`0x00`) and the position has reached
//! the source length.
//!
//! # Backtracking
//!
//! The cursor is [`Copy`] and its position is a plain byte offset, so the
//! automaton engine can record a checkpoint with [`pos()`](Cursor::pos) and
//! return to it with [`reset_to()`](Cursor::reset_to).
//!
//! # Interior Null Bytes
//!
//! A null at `pos < source_len` is an ordinary (unrecognized) character;
//! a null at `pos >= source_len` is the sentinel.

/// Copyable cursor over a sentinel-terminated byte buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
///
/// # Invariant
///
/// `buf[source_len] == 0x00` and every byte after it is `0x00`. This is
/// guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 over a sentinel-terminated buffer.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position (`0x00` at EOF).
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Returns the byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Move the cursor back (or forward) to a previously observed position.
    ///
    /// `pos` must come from [`pos()`](Self::pos) on a cursor over the same
    /// buffer so that it lands on a character boundary.
    #[inline]
    pub fn reset_to(&mut self, pos: u32) {
        debug_assert!(pos <= self.source_len, "reset past end of source");
        self.pos = pos;
    }

    /// Extract a source substring as `&str`.
    ///
    /// `start..end` must fall on character boundaries within the source.
    /// Both scanners only slice at positions they observed while stepping
    /// whole characters, so the range is always valid UTF-8.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        std::str::from_utf8(&self.buf[start as usize..end as usize]).unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Decode the character at the current position without consuming it.
    ///
    /// Returns `None` at EOF.
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        let width = Self::utf8_char_width(self.current());
        let end = (self.pos + width).min(self.source_len);
        self.slice(self.pos, end).chars().next()
    }

    /// Consume and return the character at the current position.
    ///
    /// Returns `None` (without moving) at EOF.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.advance_n(u32::try_from(ch.len_utf8()).unwrap_or(1));
        Some(ch)
    }

    /// Advance past one full UTF-8 character.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// `pred(0)` must return `false` so the sentinel stops the loop.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance past Pascal-S whitespace: space, tab, newline, carriage return.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        loop {
            match self.buf[self.pos as usize] {
                b' ' | b'\t' | b'\n' | b'\r' => self.pos += 1,
                _ => break,
            }
        }
    }

    /// Advance to the next occurrence of `byte`, or to EOF if there is none.
    ///
    /// Returns `true` if the byte was found; the cursor is then positioned
    /// on it (not past it).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < source_len which fits in u32"
    )]
    pub fn eat_until(&mut self, byte: u8) -> bool {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memchr(byte, remaining) {
            self.pos += offset as u32;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }

    /// Advance to the next occurrence of `needle`, or to EOF if there is none.
    ///
    /// Returns `true` if found; the cursor is then positioned on the first
    /// byte of the match.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < source_len which fits in u32"
    )]
    pub fn eat_until_seq(&mut self, needle: &[u8]) -> bool {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        if let Some(offset) = memchr::memmem::find(remaining, needle) {
            self.pos += offset as u32;
            true
        } else {
            self.pos = self.source_len;
            false
        }
    }
}

#[cfg(test)]
mod tests;
