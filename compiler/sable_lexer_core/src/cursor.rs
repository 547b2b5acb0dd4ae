//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor reads bytes without bounds checks in the hot path: the
//! [`SourceBuffer`](crate::SourceBuffer) guarantees a `0x00` sentinel after
//! the source plus zero padding, so `current()`, `peek()` and `peek2()` are
//! always in-bounds reads. EOF is the sentinel byte at a position at or past
//! the source length, which keeps interior `0x00` bytes distinguishable from
//! the end of input.
//!
//! `Cursor` is `Copy`. A snapshot taken by plain assignment is a mark; a
//! scanner that needs to back out of a speculative scan assigns the snapshot
//! back. [`mark`](Cursor::mark) and [`rewind`](Cursor::rewind) exist for
//! callers that prefer the explicit names.

/// Cursor over a sentinel-terminated byte buffer.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Buffer including sentinel and padding.
    buf: &'a [u8],
    /// Current byte position.
    pos: u32,
    /// Length of real source content (sentinel lives at this offset).
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    ///
    /// `buf` must contain at least `source_len + 1` bytes with
    /// `buf[source_len] == 0`. [`SourceBuffer`](crate::SourceBuffer)
    /// upholds this; constructing a cursor by hand in tests must too.
    pub fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(buf.len() > source_len as usize);
        debug_assert_eq!(buf[source_len as usize], 0);
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Current byte position.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// The byte at the current position. Returns the `0x00` sentinel at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// The byte one past the current position.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// The byte two past the current position.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// The byte at `pos + n`. Reads past the source land in the zero
    /// padding only for small `n`; callers keep `n` within a token.
    #[inline]
    pub fn peek_at(&self, n: u32) -> u8 {
        let idx = (self.pos + n) as usize;
        if idx < self.buf.len() {
            self.buf[idx]
        } else {
            0
        }
    }

    /// Advance by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// True when the cursor sits on the sentinel at or past the source end.
    ///
    /// An interior `0x00` byte (valid in a string literal) reads as `0` from
    /// [`current`](Self::current) but is *not* EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// True when the current byte is `0x00` but inside the source content.
    #[inline]
    pub fn at_interior_null(&self) -> bool {
        self.current() == 0 && !self.is_eof()
    }

    /// Snapshot the current position.
    #[inline]
    pub fn mark(&self) -> u32 {
        self.pos
    }

    /// Restore a position previously returned by [`mark`](Self::mark).
    ///
    /// Rewinding forward past marks taken later is not supported; the
    /// debug assertion catches misuse in tests.
    #[inline]
    pub fn rewind(&mut self, mark: u32) {
        debug_assert!(mark <= self.source_len);
        self.pos = mark;
    }

    /// Source bytes in `start..end`.
    pub fn slice(&self, start: u32, end: u32) -> &'a [u8] {
        &self.buf[start as usize..end as usize]
    }

    /// Remaining source bytes from the current position (excludes sentinel).
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[(self.pos.min(self.source_len)) as usize..self.source_len as usize]
    }

    // === memchr fast paths ===
    //
    // Each helper moves the cursor to the first interesting byte, or to
    // EOF if none remains. The scanner re-dispatches on `current()`.

    /// Skip to the next `"`, `\`, `\n` or `\r` (single-line string scan).
    pub fn skip_to_string_delim(&mut self) {
        let rest = self.rest();
        match memchr::memchr3(b'"', b'\\', b'\n', rest) {
            Some(i) => {
                // \r terminates a single-line literal too; memchr3 caps at
                // three needles, so rescan the prefix for \r.
                match memchr::memchr(b'\r', &rest[..i]) {
                    Some(r) => self.pos += u32::try_from(r).unwrap_or(0),
                    None => self.pos += u32::try_from(i).unwrap_or(0),
                }
            }
            None => match memchr::memchr(b'\r', rest) {
                Some(r) => self.pos += u32::try_from(r).unwrap_or(0),
                None => self.pos = self.source_len,
            },
        }
    }

    /// Skip to the next `"` or `\` (multiline string scan; newlines are
    /// content).
    pub fn skip_to_multiline_delim(&mut self) {
        match memchr::memchr2(b'"', b'\\', self.rest()) {
            Some(i) => self.pos += u32::try_from(i).unwrap_or(0),
            None => self.pos = self.source_len,
        }
    }

    /// Skip to the next `*` or `/` (block comment scan).
    pub fn skip_to_comment_delim(&mut self) {
        match memchr::memchr2(b'*', b'/', self.rest()) {
            Some(i) => self.pos += u32::try_from(i).unwrap_or(0),
            None => self.pos = self.source_len,
        }
    }

    /// Skip to the next `\n` or `\r` (line comment scan).
    pub fn skip_to_line_end(&mut self) {
        match memchr::memchr2(b'\n', b'\r', self.rest()) {
            Some(i) => self.pos += u32::try_from(i).unwrap_or(0),
            None => self.pos = self.source_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Build a sentinel buffer by hand, mirroring `SourceBuffer` layout.
    fn buf_of(source: &str) -> Vec<u8> {
        let mut v = source.as_bytes().to_vec();
        v.extend_from_slice(&[0u8; 8]);
        v
    }

    fn cursor_of<'a>(buf: &'a [u8], source: &str) -> Cursor<'a> {
        #[allow(clippy::cast_possible_truncation)]
        Cursor::new(buf, source.len() as u32)
    }

    #[test]
    fn basic_reads() {
        let buf = buf_of("abc");
        let c = cursor_of(&buf, "abc");
        assert_eq!(c.current(), b'a');
        assert_eq!(c.peek(), b'b');
        assert_eq!(c.peek2(), b'c');
        assert_eq!(c.peek_at(3), 0);
    }

    #[test]
    fn advance_and_eof() {
        let buf = buf_of("ab");
        let mut c = cursor_of(&buf, "ab");
        assert!(!c.is_eof());
        c.advance();
        assert_eq!(c.current(), b'b');
        c.advance();
        assert!(c.is_eof());
        assert_eq!(c.current(), 0);
        // Reads past EOF stay in padding.
        assert_eq!(c.peek(), 0);
        assert_eq!(c.peek2(), 0);
    }

    #[test]
    fn interior_null_is_not_eof() {
        let buf = buf_of("a\0b");
        let mut c = cursor_of(&buf, "a\0b");
        c.advance();
        assert_eq!(c.current(), 0);
        assert!(!c.is_eof());
        assert!(c.at_interior_null());
        c.advance_n(2);
        assert!(c.is_eof());
        assert!(!c.at_interior_null());
    }

    #[test]
    fn copy_snapshot_rewinds() {
        let buf = buf_of("hello");
        let mut c = cursor_of(&buf, "hello");
        let snapshot = c;
        c.advance_n(4);
        assert_eq!(c.current(), b'o');
        c = snapshot;
        assert_eq!(c.current(), b'h');
        assert_eq!(c.pos(), 0);
    }

    #[test]
    fn mark_rewind() {
        let buf = buf_of("hello");
        let mut c = cursor_of(&buf, "hello");
        c.advance();
        let m = c.mark();
        c.advance_n(3);
        c.rewind(m);
        assert_eq!(c.pos(), 1);
        assert_eq!(c.current(), b'e');
    }

    #[test]
    fn slice_and_rest() {
        let buf = buf_of("hello");
        let mut c = cursor_of(&buf, "hello");
        assert_eq!(c.slice(1, 4), b"ell");
        c.advance_n(2);
        assert_eq!(c.rest(), b"llo");
        c.advance_n(3);
        assert_eq!(c.rest(), b"");
    }

    #[test]
    fn skip_to_string_delim_quote() {
        let buf = buf_of("plain text\"rest");
        let mut c = cursor_of(&buf, "plain text\"rest");
        c.skip_to_string_delim();
        assert_eq!(c.current(), b'"');
        assert_eq!(c.pos(), 10);
    }

    #[test]
    fn skip_to_string_delim_backslash_first() {
        let buf = buf_of("ab\\c\"d");
        let mut c = cursor_of(&buf, "ab\\c\"d");
        c.skip_to_string_delim();
        assert_eq!(c.current(), b'\\');
    }

    #[test]
    fn skip_to_string_delim_stops_at_cr() {
        let buf = buf_of("ab\rcd\"");
        let mut c = cursor_of(&buf, "ab\rcd\"");
        c.skip_to_string_delim();
        assert_eq!(c.current(), b'\r');
        assert_eq!(c.pos(), 2);
    }

    #[test]
    fn skip_to_string_delim_none_hits_eof() {
        let buf = buf_of("no delims here");
        let mut c = cursor_of(&buf, "no delims here");
        c.skip_to_string_delim();
        assert!(c.is_eof());
    }

    #[test]
    fn skip_to_multiline_delim_ignores_newlines() {
        let buf = buf_of("a\nb\nc\"");
        let mut c = cursor_of(&buf, "a\nb\nc\"");
        c.skip_to_multiline_delim();
        assert_eq!(c.current(), b'"');
        assert_eq!(c.pos(), 5);
    }

    #[test]
    fn skip_to_line_end() {
        let buf = buf_of("comment text\nnext");
        let mut c = cursor_of(&buf, "comment text\nnext");
        c.skip_to_line_end();
        assert_eq!(c.current(), b'\n');
        assert_eq!(c.pos(), 12);
    }

    #[test]
    fn skip_to_comment_delim() {
        let buf = buf_of("body */ after");
        let mut c = cursor_of(&buf, "body */ after");
        c.skip_to_comment_delim();
        assert_eq!(c.current(), b'*');
        assert_eq!(c.pos(), 5);
    }

    #[test]
    fn empty_source_is_immediately_eof() {
        let buf = buf_of("");
        let c = cursor_of(&buf, "");
        assert!(c.is_eof());
        assert_eq!(c.current(), 0);
    }
}
