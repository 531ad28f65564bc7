//! Sentinel-terminated source buffer shared by both scanners.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so a scanner can look one or two bytes ahead without bounds checks.
//! The total buffer size is rounded up to the next 64-byte boundary, which
//! also provides the padding that makes `peek()` safe near
//! the end of the buffer.
//!
//! Positions handed out by the [`Cursor`] are byte offsets into the source.
//! [`SourceBuffer::line_col`] turns one into a 1-based line and column for
//! error messages.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated copy of a Pascal-S source text.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Sources larger than `u32::MAX` bytes saturate `source_len`; anything
    /// past that point is unreachable for the cursor.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Translate a byte offset into a 1-based `(line, column)` pair.
    ///
    /// Columns count characters, not bytes. Offsets past the end clamp to
    /// the end of the source.
    pub fn line_col(&self, pos: u32) -> (u32, u32) {
        let end = (pos.min(self.source_len)) as usize;
        let prefix = &self.buf[..end];
        let line_start = memchr::memrchr(b'\n', prefix).map_or(0, |nl| nl + 1);
        let line = memchr::memchr_iter(b'\n', prefix).count() + 1;
        let column = String::from_utf8_lossy(&prefix[line_start..]).chars().count() + 1;
        (saturate(line), saturate(column))
    }
}

fn saturate(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
