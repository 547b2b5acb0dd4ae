//! Escape sequence decoding for string literal content.
//!
//! Recognized escapes: `\n` `\t` `\r` `\\` `\"` `\0` and `\u{XXXX}` with one
//! to eight hex digits naming a Unicode scalar. Anything else records an
//! [`InvalidEscapeSequence`](crate::LexErrorKind::InvalidEscapeSequence)
//! error; decoding recovers by emitting U+FFFD in place of the bad
//! escape and continues.

use crate::{LexError, Span};

/// Decode the escapes in `text` (a slice of raw literal content) into
/// `out`. `base` is the source offset of `text`, used for error spans.
pub(crate) fn decode_escapes(
    text: &str,
    base: u32,
    out: &mut String,
    errors: &mut Vec<LexError>,
) {
    let mut rest = 0usize;
    while let Some(found) = text[rest..].find('\\') {
        let bs = rest + found;
        out.push_str(&text[rest..bs]);
        let tail = &text[bs + 1..];
        let mut chars = tail.chars();
        match chars.next() {
            Some('n') => {
                out.push('\n');
                rest = bs + 2;
            }
            Some('t') => {
                out.push('\t');
                rest = bs + 2;
            }
            Some('r') => {
                out.push('\r');
                rest = bs + 2;
            }
            Some('\\') => {
                out.push('\\');
                rest = bs + 2;
            }
            Some('"') => {
                out.push('"');
                rest = bs + 2;
            }
            Some('0') => {
                out.push('\0');
                rest = bs + 2;
            }
            Some('u') => {
                rest = bs + 1 + decode_unicode_escape(tail, base + offset_u32(bs), out, errors);
            }
            Some(other) => {
                let after = bs + 1 + other.len_utf8();
                errors.push(LexError::invalid_escape(Span::new(
                    base + offset_u32(bs),
                    base + offset_u32(after),
                )));
                out.push('\u{FFFD}');
                rest = after;
            }
            None => {
                // Trailing backslash; the scanner only produces this in
                // already-unterminated literals.
                errors.push(LexError::invalid_escape(Span::new(
                    base + offset_u32(bs),
                    base + offset_u32(bs + 1),
                )));
                rest = bs + 1;
            }
        }
    }
    out.push_str(&text[rest..]);
}

/// Decode `u{XXXX}` (the part after the backslash). Returns how many
/// bytes of `tail` were consumed, starting at the `u`.
fn decode_unicode_escape(
    tail: &str,
    escape_start: u32,
    out: &mut String,
    errors: &mut Vec<LexError>,
) -> usize {
    let bytes = tail.as_bytes();
    // bytes[0] is the 'u'.
    if bytes.get(1) != Some(&b'{') {
        errors.push(LexError::invalid_escape(Span::new(
            escape_start,
            escape_start + 2,
        )));
        out.push('\u{FFFD}');
        return 1;
    }
    let mut end = 2;
    while end < bytes.len() && bytes[end].is_ascii_hexdigit() {
        end += 1;
    }
    let digits = &tail[2..end];
    let closed = bytes.get(end) == Some(&b'}');
    let consumed = if closed { end + 1 } else { end };
    let span = Span::new(
        escape_start,
        escape_start + offset_u32(consumed) + 1,
    );

    if !closed || digits.is_empty() || digits.len() > 8 {
        errors.push(LexError::invalid_escape(span));
        out.push('\u{FFFD}');
        return consumed;
    }
    match u32::from_str_radix(digits, 16).ok().and_then(char::from_u32) {
        Some(c) => out.push(c),
        // Out of range or a surrogate.
        None => {
            errors.push(LexError::invalid_escape(span));
            out.push('\u{FFFD}');
        }
    }
    consumed
}

fn offset_u32(offset: usize) -> u32 {
    u32::try_from(offset).unwrap_or(u32::MAX)
}
