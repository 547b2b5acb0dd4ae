//! Byte spans into a source buffer.

use std::fmt;

/// A half-open byte range `start..end` into the source.
///
/// Spans produced by the lexer are contiguous: each token's span begins
/// where the previous token's span (or skipped trivia) ended, so the
/// concatenated span texts reproduce the source exactly.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    start: u32,
    end: u32,
}

impl Span {
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Zero-width span at `offset`.
    #[inline]
    pub fn point(offset: u32) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub fn start(self) -> u32 {
        self.start
    }

    #[inline]
    pub fn end(self) -> u32 {
        self.end
    }

    #[inline]
    pub fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both.
    pub fn join(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn contains(self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Slice `source` by this span.
    pub fn text(self, source: &str) -> &str {
        &source[self.start as usize..self.end as usize]
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn basics() {
        let span = Span::new(3, 7);
        assert_eq!(span.start(), 3);
        assert_eq!(span.end(), 7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(Span::point(5).is_empty());
    }

    #[test]
    fn join_covers_both() {
        assert_eq!(Span::new(2, 4).join(Span::new(6, 9)), Span::new(2, 9));
        assert_eq!(Span::new(6, 9).join(Span::new(2, 4)), Span::new(2, 9));
    }

    #[test]
    fn contains_is_half_open() {
        let span = Span::new(2, 4);
        assert!(span.contains(2));
        assert!(span.contains(3));
        assert!(!span.contains(4));
    }

    #[test]
    fn text_slices_source() {
        assert_eq!(Span::new(4, 9).text("let hello = 1"), "hello");
    }

    #[test]
    fn display() {
        assert_eq!(Span::new(1, 5).to_string(), "1..5");
    }
}
