//! Raw scanner: sentinel buffer in, `(tag, len)` stream out.
//!
//! The scanner classifies lexeme shapes only. It does not intern, does not
//! parse numbers, does not decode escapes; the cooking layer does that from
//! the spans this scanner produces. Malformed input becomes error-shaped
//! tags, never a `Result`, so a single pass always reaches [`RawTag::Eof`].
//!
//! Every token except `Eof` consumes at least one byte. That invariant is
//! what guarantees termination on arbitrary input.
//!
//! # String interpolation
//!
//! `"a \(expr) b"` is not one token. The scanner emits a `StringHead` for
//! `"a \(`, then hands control back to the main dispatch for the expression
//! tokens, then stitches the literal back together when the balancing `)`
//! arrives (`StringTail` for `) b"`). A stack of [`InterpolationFrame`]s
//! tracks nesting depth and the parenthesis balance inside each
//! interpolation, so `"\(f(x))"` resumes at the right `)` and string
//! literals nested inside interpolations work.

use crate::{Cursor, RawTag, RawToken, SourceBuffer};

/// Is this byte an ASCII identifier-continue character (`[A-Za-z0-9_]`)?
static IS_IDENT_CONTINUE: [bool; 256] = build_ident_continue_table();

const fn build_ident_continue_table() -> [bool; 256] {
    let mut table = [false; 256];
    let mut b = 0usize;
    while b < 256 {
        #[allow(clippy::cast_possible_truncation)]
        let byte = b as u8;
        table[b] = matches!(byte, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_');
        b += 1;
    }
    table
}

#[inline]
fn is_ident_start(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'_')
}

/// Which kind of string literal an open interpolation belongs to.
#[derive(Clone, Copy, Debug)]
enum StringForm {
    SingleLine,
    Multiline,
}

/// One open `\(` interpolation.
///
/// `paren` counts plain `(` seen inside the interpolation; the `)` that
/// resumes the literal is the one that arrives with `paren == 0`.
#[derive(Clone, Copy, Debug)]
struct InterpolationFrame {
    form: StringForm,
    paren: u32,
    /// Closing-delimiter indentation of the enclosing multiline literal,
    /// as `(offset, len)` into the source. `None` for single-line forms
    /// and for multiline literals whose closer was not found.
    indent: Option<(u32, u32)>,
}

/// The raw scanner.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
    frames: Vec<InterpolationFrame>,
    /// Indentation prefix of the most recently emitted multiline string
    /// token, for the cooking layer's dedent pass.
    multiline_indent: Option<(u32, u32)>,
}

impl<'a> RawScanner<'a> {
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Self {
            cursor: buffer.cursor(),
            frames: Vec::new(),
            multiline_indent: None,
        }
    }

    /// Current byte position; the offset of the next token.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Number of `\(` interpolations still open. Nonzero at EOF means the
    /// source ended inside an interpolation.
    pub fn open_interpolations(&self) -> usize {
        self.frames.len()
    }

    /// Closing-delimiter indentation `(offset, len)` for the most recent
    /// multiline string token. Valid until the next multiline token.
    pub fn multiline_indent(&self) -> Option<(u32, u32)> {
        self.multiline_indent
    }

    /// Scan the next raw token.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => {
                if self.cursor.is_eof() {
                    RawToken::new(RawTag::Eof, 0)
                } else {
                    self.cursor.advance();
                    RawToken::new(RawTag::InteriorNull, 1)
                }
            }
            b' ' | b'\t' => self.whitespace(start),
            b'\n' => {
                self.cursor.advance();
                RawToken::new(RawTag::Newline, 1)
            }
            b'\r' => {
                self.cursor.advance();
                if self.cursor.current() == b'\n' {
                    self.cursor.advance();
                    RawToken::new(RawTag::Newline, 2)
                } else {
                    RawToken::new(RawTag::Newline, 1)
                }
            }
            b'/' => self.slash(start),
            b'"' => self.string(start),
            b'`' => self.backtick_ident(start),
            b'@' => self.attribute(start),
            b'$' => self.dollar_ident(start),
            b'A'..=b'Z' | b'a'..=b'z' => self.ident(start),
            b'_' => self.underscore(start),
            b'0'..=b'9' => self.number(start),
            b'\\' => {
                if self.cursor.peek() == b'.' {
                    self.op(RawTag::KeyPath, 2)
                } else {
                    self.op(RawTag::InvalidByte, 1)
                }
            }
            b'(' => self.left_paren(),
            b')' => self.right_paren(start),
            b'[' => self.op(RawTag::LeftBracket, 1),
            b']' => self.op(RawTag::RightBracket, 1),
            b'{' => self.op(RawTag::LeftBrace, 1),
            b'}' => self.op(RawTag::RightBrace, 1),
            b',' => self.op(RawTag::Comma, 1),
            b';' => self.op(RawTag::Semicolon, 1),
            b':' => self.op(RawTag::Colon, 1),
            b'+' => match self.cursor.peek() {
                b'=' => self.op(RawTag::PlusEq, 2),
                _ => self.op(RawTag::Plus, 1),
            },
            b'-' => match self.cursor.peek() {
                b'=' => self.op(RawTag::MinusEq, 2),
                b'>' => self.op(RawTag::Arrow, 2),
                _ => self.op(RawTag::Minus, 1),
            },
            b'*' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'*', b'=') => self.op(RawTag::StarStarEq, 3),
                (b'*', _) => self.op(RawTag::StarStar, 2),
                (b'=', _) => self.op(RawTag::StarEq, 2),
                _ => self.op(RawTag::Star, 1),
            },
            b'%' => match self.cursor.peek() {
                b'=' => self.op(RawTag::PercentEq, 2),
                _ => self.op(RawTag::Percent, 1),
            },
            b'=' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'=', b'=') => self.op(RawTag::EqEqEq, 3),
                (b'=', _) => self.op(RawTag::EqEq, 2),
                _ => self.op(RawTag::Eq, 1),
            },
            b'!' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'=', b'=') => self.op(RawTag::BangEqEq, 3),
                (b'=', _) => self.op(RawTag::BangEq, 2),
                _ => self.op(RawTag::Bang, 1),
            },
            b'<' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'=', b'>') => self.op(RawTag::Spaceship, 3),
                (b'=', _) => self.op(RawTag::LtEq, 2),
                (b'<', b'=') => self.op(RawTag::ShlEq, 3),
                (b'<', _) => self.op(RawTag::Shl, 2),
                _ => self.op(RawTag::Lt, 1),
            },
            b'>' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'=', _) => self.op(RawTag::GtEq, 2),
                (b'>', b'=') => self.op(RawTag::ShrEq, 3),
                (b'>', _) => self.op(RawTag::Shr, 2),
                _ => self.op(RawTag::Gt, 1),
            },
            b'&' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'&', b'=') => self.op(RawTag::AmpAmpEq, 3),
                (b'&', _) => self.op(RawTag::AmpAmp, 2),
                (b'=', _) => self.op(RawTag::AmpEq, 2),
                _ => self.op(RawTag::Amp, 1),
            },
            b'|' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'|', b'=') => self.op(RawTag::PipePipeEq, 3),
                (b'|', _) => self.op(RawTag::PipePipe, 2),
                (b'=', _) => self.op(RawTag::PipeEq, 2),
                _ => self.op(RawTag::Pipe, 1),
            },
            b'^' => match self.cursor.peek() {
                b'=' => self.op(RawTag::CaretEq, 2),
                _ => self.op(RawTag::Caret, 1),
            },
            b'~' => self.op(RawTag::Tilde, 1),
            b'?' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'?', b'=') => self.op(RawTag::QuestionQuestionEq, 3),
                (b'?', _) => self.op(RawTag::QuestionQuestion, 2),
                (b'=', _) => self.op(RawTag::QuestionEq, 2),
                _ => self.op(RawTag::Question, 1),
            },
            b'.' => match (self.cursor.peek(), self.cursor.peek2()) {
                (b'.', b'.') => self.op(RawTag::DotDotDot, 3),
                (b'.', b'<') => self.op(RawTag::DotDotLess, 3),
                _ => self.op(RawTag::Dot, 1),
            },
            0x80..=0xFF => self.non_ascii(start),
            _ => self.op(RawTag::InvalidByte, 1),
        }
    }

    #[inline]
    fn op(&mut self, tag: RawTag, len: u32) -> RawToken {
        self.cursor.advance_n(len);
        RawToken::new(tag, len)
    }

    fn whitespace(&mut self, start: u32) -> RawToken {
        while matches!(self.cursor.current(), b' ' | b'\t') {
            self.cursor.advance();
        }
        RawToken::new(RawTag::Whitespace, self.cursor.pos() - start)
    }

    // === Comments ===

    fn slash(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.cursor.skip_to_line_end();
                RawToken::new(RawTag::LineComment, self.cursor.pos() - start)
            }
            b'*' => self.block_comment(start),
            b'=' => self.op(RawTag::SlashEq, 2),
            _ => self.op(RawTag::Slash, 1),
        }
    }

    /// `/* ... */` with nesting: every inner `/*` needs its own `*/`.
    fn block_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance_n(2);
        let mut depth = 1u32;
        loop {
            self.cursor.skip_to_comment_delim();
            if self.cursor.is_eof() {
                return RawToken::new(RawTag::UnterminatedBlockComment, self.cursor.pos() - start);
            }
            match (self.cursor.current(), self.cursor.peek()) {
                (b'*', b'/') => {
                    self.cursor.advance_n(2);
                    depth -= 1;
                    if depth == 0 {
                        return RawToken::new(RawTag::BlockComment, self.cursor.pos() - start);
                    }
                }
                (b'/', b'*') => {
                    self.cursor.advance_n(2);
                    depth += 1;
                }
                _ => self.cursor.advance(),
            }
        }
    }

    // === Names ===

    /// Consume identifier-continue bytes, allowing alphanumeric Unicode
    /// scalars beyond ASCII.
    fn eat_ident_continue(&mut self) {
        loop {
            let b = self.cursor.current();
            if IS_IDENT_CONTINUE[b as usize] {
                self.cursor.advance();
            } else if b >= 0xC2 {
                match self.decode_char() {
                    Some((c, width)) if c.is_alphanumeric() => self.cursor.advance_n(width),
                    _ => break,
                }
            } else {
                break;
            }
        }
    }

    fn ident(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.eat_ident_continue();
        RawToken::new(RawTag::Ident, self.cursor.pos() - start)
    }

    /// `_` starts an identifier unless a digit follows. `_1` scans as a
    /// numeric candidate so the cooking layer can report the misplaced
    /// separator instead of silently producing an identifier.
    fn underscore(&mut self, start: u32) -> RawToken {
        if self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.eat_digits_and_separators();
            return RawToken::new(RawTag::Int, self.cursor.pos() - start);
        }
        self.ident(start)
    }

    /// `$0`, `$1`, `$foo`: shorthand closure argument names.
    fn dollar_ident(&mut self, start: u32) -> RawToken {
        if IS_IDENT_CONTINUE[self.cursor.peek() as usize] {
            self.cursor.advance();
            self.eat_ident_continue();
            RawToken::new(RawTag::Ident, self.cursor.pos() - start)
        } else {
            self.op(RawTag::InvalidByte, 1)
        }
    }

    /// `` `name` ``: the backticks suppress keyword recognition.
    fn backtick_ident(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        if !is_ident_start(self.cursor.current()) {
            return RawToken::new(RawTag::UnterminatedBacktickIdent, self.cursor.pos() - start);
        }
        self.cursor.advance();
        self.eat_ident_continue();
        if self.cursor.current() == b'`' {
            self.cursor.advance();
            RawToken::new(RawTag::BacktickIdent, self.cursor.pos() - start)
        } else {
            RawToken::new(RawTag::UnterminatedBacktickIdent, self.cursor.pos() - start)
        }
    }

    /// `@Name` attribute marker. A bare `@` falls through as punctuation.
    fn attribute(&mut self, start: u32) -> RawToken {
        if is_ident_start(self.cursor.peek()) {
            self.cursor.advance_n(2);
            self.eat_ident_continue();
            RawToken::new(RawTag::Attribute, self.cursor.pos() - start)
        } else {
            self.op(RawTag::At, 1)
        }
    }

    /// Non-ASCII lead byte: alphabetic scalars start identifiers, anything
    /// else is a single invalid scalar (whole scalar, so spans never split
    /// a character).
    fn non_ascii(&mut self, start: u32) -> RawToken {
        match self.decode_char() {
            Some((c, width)) if c.is_alphabetic() => {
                self.cursor.advance_n(width);
                self.eat_ident_continue();
                RawToken::new(RawTag::Ident, self.cursor.pos() - start)
            }
            Some((_, width)) => self.op(RawTag::InvalidByte, width),
            None => self.op(RawTag::InvalidByte, 1),
        }
    }

    /// Decode the UTF-8 scalar at the cursor. Returns `None` for stray
    /// bytes that are not a valid scalar start (cannot happen when the
    /// source came from `&str`, but the buffer API does not force that).
    fn decode_char(&self) -> Option<(char, u32)> {
        let b = self.cursor.current();
        let width = match b {
            0xC2..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF4 => 4,
            _ => return None,
        };
        let end = self.cursor.pos().checked_add(width)?;
        if end > self.cursor.source_len() {
            return None;
        }
        let s = std::str::from_utf8(self.cursor.slice(self.cursor.pos(), end)).ok()?;
        s.chars().next().map(|c| (c, width))
    }

    // === Numbers ===

    fn eat_digits_and_separators(&mut self) {
        while matches!(self.cursor.current(), b'0'..=b'9' | b'_') {
            self.cursor.advance();
        }
    }

    fn number(&mut self, start: u32) -> RawToken {
        if self.cursor.current() == b'0' {
            let radix_tag = match self.cursor.peek() {
                b'x' | b'X' if matches!(self.cursor.peek2(), b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F' | b'_') => {
                    Some((RawTag::HexInt, true))
                }
                b'o' | b'O' if matches!(self.cursor.peek2(), b'0'..=b'7' | b'_') => {
                    Some((RawTag::OctInt, false))
                }
                b'b' | b'B' if matches!(self.cursor.peek2(), b'0' | b'1' | b'_') => {
                    Some((RawTag::BinInt, false))
                }
                _ => None,
            };
            if let Some((tag, hex)) = radix_tag {
                self.cursor.advance_n(2);
                loop {
                    let b = self.cursor.current();
                    let is_digit = if hex {
                        b.is_ascii_hexdigit()
                    } else {
                        // Digit-range errors (e.g. 0o9) surface in cooking;
                        // the raw scan keeps the whole digit run together.
                        b.is_ascii_digit()
                    };
                    if is_digit || b == b'_' {
                        self.cursor.advance();
                    } else {
                        break;
                    }
                }
                return RawToken::new(tag, self.cursor.pos() - start);
            }
        }

        self.cursor.advance();
        self.eat_digits_and_separators();
        let mut tag = RawTag::Int;

        // `.` only joins the literal when a digit follows: `1.5` is a
        // float, `1.foo` is member access, `1...3` is a range.
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.eat_digits_and_separators();
            tag = RawTag::Float;
        }

        // Exponent, same rule: `1e5` joins, `1e` does not.
        let b = self.cursor.current();
        if matches!(b, b'e' | b'E') {
            let p = self.cursor.peek();
            let signed = matches!(p, b'+' | b'-') && self.cursor.peek2().is_ascii_digit();
            if p.is_ascii_digit() || signed {
                self.cursor.advance();
                if signed {
                    self.cursor.advance();
                }
                self.eat_digits_and_separators();
                tag = RawTag::Float;
            }
        }

        RawToken::new(tag, self.cursor.pos() - start)
    }

    // === Strings ===

    fn string(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'"' && self.cursor.peek2() == b'"' {
            self.cursor.advance_n(3);
            let indent = self.find_multiline_indent();
            self.multiline_indent = indent;
            self.scan_multiline_body(start, false, indent)
        } else {
            self.cursor.advance();
            self.scan_string_body(start, false)
        }
    }

    /// Body of a single-line literal, from just after the opening `"` (or
    /// the resuming `)`). Emits `String`/`StringHead` on open,
    /// `StringTail`/`StringMiddle` on resume.
    fn scan_string_body(&mut self, start: u32, resume: bool) -> RawToken {
        loop {
            self.cursor.skip_to_string_delim();
            match self.cursor.current() {
                b'"' => {
                    self.cursor.advance();
                    let tag = if resume { RawTag::StringTail } else { RawTag::String };
                    return RawToken::new(tag, self.cursor.pos() - start);
                }
                b'\\' => {
                    if self.cursor.peek() == b'(' {
                        self.cursor.advance_n(2);
                        self.frames.push(InterpolationFrame {
                            form: StringForm::SingleLine,
                            paren: 0,
                            indent: None,
                        });
                        let tag = if resume { RawTag::StringMiddle } else { RawTag::StringHead };
                        return RawToken::new(tag, self.cursor.pos() - start);
                    }
                    self.skip_escape();
                }
                b'\n' | b'\r' => {
                    // Line break stays outside the error token.
                    return RawToken::new(RawTag::UnterminatedString, self.cursor.pos() - start);
                }
                _ => {
                    if self.cursor.is_eof() {
                        return RawToken::new(RawTag::UnterminatedString, self.cursor.pos() - start);
                    }
                    self.cursor.advance();
                }
            }
        }
    }

    /// Body of a multiline literal, from just after the opening `"""` (or
    /// the resuming `)`). Newlines are content; only `"""` closes.
    fn scan_multiline_body(&mut self, start: u32, resume: bool, indent: Option<(u32, u32)>) -> RawToken {
        self.multiline_indent = indent;
        loop {
            self.cursor.skip_to_multiline_delim();
            match self.cursor.current() {
                b'"' => {
                    if self.cursor.peek() == b'"' && self.cursor.peek2() == b'"' {
                        self.cursor.advance_n(3);
                        let tag = if resume {
                            RawTag::MultilineStringTail
                        } else {
                            RawTag::MultilineString
                        };
                        return RawToken::new(tag, self.cursor.pos() - start);
                    }
                    self.cursor.advance();
                }
                b'\\' => {
                    if self.cursor.peek() == b'(' {
                        self.cursor.advance_n(2);
                        self.frames.push(InterpolationFrame {
                            form: StringForm::Multiline,
                            paren: 0,
                            indent,
                        });
                        let tag = if resume {
                            RawTag::MultilineStringMiddle
                        } else {
                            RawTag::MultilineStringHead
                        };
                        return RawToken::new(tag, self.cursor.pos() - start);
                    }
                    self.skip_escape();
                }
                _ => {
                    if self.cursor.is_eof() {
                        return RawToken::new(
                            RawTag::UnterminatedMultilineString,
                            self.cursor.pos() - start,
                        );
                    }
                    self.cursor.advance();
                }
            }
        }
    }

    /// Skip a `\x` escape pair. Validity is checked in cooking; here the
    /// only job is to not mistake `\"` for a closing quote. A backslash as
    /// the last source byte consumes just itself so spans stay in bounds.
    fn skip_escape(&mut self) {
        if self.cursor.pos() + 1 >= self.cursor.source_len() {
            self.cursor.advance();
        } else {
            self.cursor.advance_n(2);
        }
    }

    fn left_paren(&mut self) -> RawToken {
        if let Some(frame) = self.frames.last_mut() {
            frame.paren += 1;
        }
        self.op(RawTag::LeftParen, 1)
    }

    /// `)` either closes a plain paren group or, when the innermost
    /// interpolation frame is balanced, resumes its string literal.
    fn right_paren(&mut self, start: u32) -> RawToken {
        let resumes = match self.frames.last_mut() {
            Some(frame) if frame.paren == 0 => true,
            Some(frame) => {
                frame.paren -= 1;
                false
            }
            None => false,
        };
        self.cursor.advance();
        if resumes {
            if let Some(frame) = self.frames.pop() {
                return match frame.form {
                    StringForm::SingleLine => self.scan_string_body(start, true),
                    StringForm::Multiline => self.scan_multiline_body(start, true, frame.indent),
                };
            }
        }
        RawToken::new(RawTag::RightParen, 1)
    }

    /// Pre-scan from just after an opening `"""` to the closing delimiter
    /// and capture the whitespace prefix of its line. The prefix drives the
    /// dedent of every content line and is needed before the first fragment
    /// is emitted, hence the forward scan on a cursor copy.
    ///
    /// Returns `None` when the literal is unterminated. A closer preceded
    /// by non-whitespace on its own line yields an empty prefix.
    fn find_multiline_indent(&self) -> Option<(u32, u32)> {
        let mut c = self.cursor;
        let mut interp_depth = 0u32;
        loop {
            if c.is_eof() {
                return None;
            }
            match c.current() {
                b'\\' => {
                    if c.peek() == b'(' {
                        interp_depth += 1;
                        c.advance_n(2);
                    } else if c.pos() + 1 >= c.source_len() {
                        c.advance();
                    } else {
                        c.advance_n(2);
                    }
                }
                b'"' if interp_depth == 0 => {
                    if c.peek() == b'"' && c.peek2() == b'"' {
                        return Some(closing_indent(&c));
                    }
                    c.advance();
                }
                b'"' if interp_depth > 0 => skip_nested_string(&mut c),
                b'(' if interp_depth > 0 => {
                    interp_depth += 1;
                    c.advance();
                }
                b')' => {
                    interp_depth = interp_depth.saturating_sub(1);
                    c.advance();
                }
                _ => c.advance(),
            }
        }
    }
}

/// Whitespace prefix of the line holding the closing `"""`, given a cursor
/// parked on its first quote.
fn closing_indent(c: &Cursor<'_>) -> (u32, u32) {
    let close = c.pos();
    let line_start = match memchr::memrchr(b'\n', c.slice(0, close)) {
        Some(nl) => u32::try_from(nl).unwrap_or(0) + 1,
        None => 0,
    };
    let prefix = c.slice(line_start, close);
    if prefix.iter().all(|&b| b == b' ' || b == b'\t') {
        (line_start, close - line_start)
    } else {
        // Closer shares its line with content; nothing to strip.
        (close, 0)
    }
}

/// Skip over a string literal encountered *inside* an interpolation during
/// the indent pre-scan. Escapes are skipped pairwise; interpolations nested
/// inside this inner literal are treated as plain escapes, which keeps the
/// pre-scan linear at the cost of miscounting pathological double-nesting.
fn skip_nested_string(c: &mut Cursor<'_>) {
    if c.peek() == b'"' && c.peek2() == b'"' {
        c.advance_n(3);
        loop {
            c.skip_to_multiline_delim();
            if c.is_eof() {
                return;
            }
            match c.current() {
                b'"' if c.peek() == b'"' && c.peek2() == b'"' => {
                    c.advance_n(3);
                    return;
                }
                b'\\' if c.pos() + 1 < c.source_len() => c.advance_n(2),
                _ => c.advance(),
            }
        }
    }
    c.advance();
    loop {
        c.skip_to_string_delim();
        if c.is_eof() {
            return;
        }
        match c.current() {
            b'"' => {
                c.advance();
                return;
            }
            b'\n' | b'\r' => return,
            b'\\' if c.pos() + 1 < c.source_len() => c.advance_n(2),
            _ => c.advance(),
        }
    }
}

/// Scan an entire buffer into raw tokens, including the trailing `Eof`.
pub fn tokenize(buffer: &SourceBuffer) -> Vec<RawToken> {
    let mut scanner = RawScanner::new(buffer);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.tag == RawTag::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
