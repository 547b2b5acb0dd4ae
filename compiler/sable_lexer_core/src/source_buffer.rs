//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! allowing the scanner to detect EOF without explicit bounds checking.
//! The total buffer size is rounded up to the next 64-byte boundary, which
//! also provides safe padding for `peek()` and `peek2()` near the end of
//! the buffer.
//!
//! The buffer also carries a line-start offset table (built once with
//! `memchr`) so byte offsets can be resolved to line/column positions in
//! O(log n) without re-scanning the source.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// The sentinel byte at `source_len` is always `0x00`. All subsequent bytes
/// are also `0x00`, ensuring safe reads for `peek()` and `peek2()` near the
/// end of the buffer.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Length of the actual source content (excludes sentinel and padding).
    source_len: u32,
    /// Byte offset of the first byte of each line. `line_starts[0] == 0`;
    /// a new entry follows every `\n` in the source.
    line_starts: Vec<u32>,
}

/// A resolved source position: byte offset plus 1-based line and column.
///
/// Columns count Unicode scalars, not bytes. Positions are ordered by
/// byte offset alone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Position {
    /// Byte offset into the source.
    pub offset: u32,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column, counted in Unicode scalars from the line start.
    pub column: u32,
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// Copies the source bytes into a padded buffer with a `0x00` sentinel
    /// appended, and builds the line-start table.
    ///
    /// Source files larger than `u32::MAX` bytes (~4 GiB) saturate
    /// `source_len`; callers are expected to reject oversized files upstream.
    pub fn new(source: &str) -> Self {
        let source_bytes = source.as_bytes();
        let source_len = source_bytes.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (source_len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // Allocate zero-filled buffer, then copy source bytes.
        // The sentinel (buf[source_len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source_bytes);

        let mut line_starts = vec![0u32];
        for nl in memchr::memchr_iter(b'\n', source_bytes) {
            if let Ok(start) = u32::try_from(nl + 1) {
                line_starts.push(start);
            }
        }

        let source_len_u32 = u32::try_from(source_len).unwrap_or(u32::MAX);

        Self {
            buf,
            source_len: source_len_u32,
            line_starts,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the full buffer including sentinel and padding.
    ///
    /// The byte at index [`len()`](Self::len) is the sentinel (`0x00`).
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes (excludes sentinel and padding).
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Byte offset of the start of the line containing `offset`.
    pub fn line_start(&self, offset: u32) -> u32 {
        let idx = self.line_starts.partition_point(|&s| s <= offset);
        // idx >= 1 because line_starts[0] == 0 <= offset.
        self.line_starts[idx - 1]
    }

    /// Resolve a byte offset to a [`Position`] with 1-based line/column.
    ///
    /// The line is found by binary search over the line-start table; the
    /// column is the scalar count from the line start, so multi-byte
    /// characters advance the column by one.
    ///
    /// Offsets past the end of the source clamp to the end position.
    pub fn position(&self, offset: u32) -> Position {
        let offset = offset.min(self.source_len);
        let idx = self.line_starts.partition_point(|&s| s <= offset);
        let line_start = self.line_starts[idx - 1];
        let line_slice = &self.buf[line_start as usize..offset as usize];
        // Count scalars, not bytes: skip UTF-8 continuation bytes.
        let scalars = line_slice.iter().filter(|&&b| (b & 0xC0) != 0x80).count();
        let column = u32::try_from(scalars).unwrap_or(u32::MAX).saturating_add(1);
        Position {
            offset,
            line: u32::try_from(idx).unwrap_or(u32::MAX),
            column,
        }
    }
}

/// Size assertion: `SourceBuffer` should stay pointer-sized-small.
/// Vec<u8> = 24, u32 + padding = 8, Vec<u32> = 24 => 56 bytes.
const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 64);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // === Construction ===

    #[test]
    fn empty_source() {
        let buf = SourceBuffer::new("");
        assert_eq!(buf.len(), 0);
        assert!(buf.is_empty());
        assert!(buf.as_bytes().is_empty());
        // Sentinel present at index 0
        assert_eq!(buf.as_sentinel_bytes()[0], 0);
    }

    #[test]
    fn ascii_source() {
        let buf = SourceBuffer::new("hello");
        assert_eq!(buf.len(), 5);
        assert!(!buf.is_empty());
        assert_eq!(buf.as_bytes(), b"hello");
        // Sentinel after source bytes
        assert_eq!(buf.as_sentinel_bytes()[5], 0);
    }

    #[test]
    fn utf8_multibyte_source() {
        let source = "hello \u{1F600} world"; // emoji (4 bytes)
        let buf = SourceBuffer::new(source);
        assert_eq!(buf.len() as usize, source.len());
        assert_eq!(buf.as_bytes(), source.as_bytes());
    }

    #[test]
    fn buffer_aligned_to_cache_line() {
        for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
            let source: String = "x".repeat(len);
            let buf = SourceBuffer::new(&source);
            assert_eq!(
                buf.as_sentinel_bytes().len() % CACHE_LINE,
                0,
                "buffer length {} is not cache-line aligned for source length {}",
                buf.as_sentinel_bytes().len(),
                len
            );
        }
    }

    #[test]
    fn sentinel_and_padding_are_zero() {
        let buf = SourceBuffer::new("abc");
        for &b in &buf.as_sentinel_bytes()[3..] {
            assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
        }
    }

    // === Line table ===

    #[test]
    fn single_line_positions() {
        let buf = SourceBuffer::new("hello");
        assert_eq!(
            buf.position(0),
            Position {
                offset: 0,
                line: 1,
                column: 1
            }
        );
        assert_eq!(
            buf.position(4),
            Position {
                offset: 4,
                line: 1,
                column: 5
            }
        );
    }

    #[test]
    fn multi_line_positions() {
        let buf = SourceBuffer::new("ab\ncd\nef");
        assert_eq!(buf.position(0).line, 1);
        assert_eq!(buf.position(2).line, 1); // the \n itself
        assert_eq!(buf.position(3).line, 2);
        assert_eq!(buf.position(3).column, 1);
        assert_eq!(buf.position(4).column, 2);
        assert_eq!(buf.position(6).line, 3);
    }

    #[test]
    fn line_start_lookup() {
        let buf = SourceBuffer::new("ab\ncd\nef");
        assert_eq!(buf.line_start(0), 0);
        assert_eq!(buf.line_start(2), 0);
        assert_eq!(buf.line_start(3), 3);
        assert_eq!(buf.line_start(7), 6);
    }

    #[test]
    fn column_counts_scalars_not_bytes() {
        // "λ" is 2 bytes; the byte after it is still column 2.
        let buf = SourceBuffer::new("\u{3BB}x");
        assert_eq!(buf.position(2).column, 2);
    }

    #[test]
    fn position_clamps_past_end() {
        let buf = SourceBuffer::new("ab");
        assert_eq!(buf.position(100).offset, 2);
        assert_eq!(buf.position(100).column, 3);
    }

    #[test]
    fn positions_order_by_offset() {
        let buf = SourceBuffer::new("a\nb");
        assert!(buf.position(0) < buf.position(2));
    }

    // === Cursor creation ===

    #[test]
    fn cursor_starts_at_zero() {
        let buf = SourceBuffer::new("hello");
        let cursor = buf.cursor();
        assert_eq!(cursor.pos(), 0);
        assert_eq!(cursor.current(), b'h');
    }

    #[test]
    fn cursor_on_empty_source_is_eof() {
        let buf = SourceBuffer::new("");
        let cursor = buf.cursor();
        assert!(cursor.is_eof());
        assert_eq!(cursor.current(), 0);
    }

    #[test]
    fn large_source() {
        let source: String = "x\n".repeat(50_000);
        let buf = SourceBuffer::new(&source);
        assert_eq!(buf.len(), 100_000);
        assert_eq!(buf.position(99_999).line, 50_000);
        assert_eq!(buf.as_sentinel_bytes()[100_000], 0);
    }
}
