//! Cooking: raw `(tag, len)` tokens into full tokens.
//!
//! The raw scanner classifies shape; this layer does the text-dependent
//! work: keyword recognition, escape decoding, dedenting, and checked
//! numeric parsing. Errors accumulate in a `Vec` and the offending token
//! cooks to [`TokenKind::Error`], so cooking itself never fails.

use sable_lexer_core::{RawTag, RawToken, SourceBuffer};

use crate::cook_escape::decode_escapes;
use crate::dedent::dedent_lines;
use crate::keywords::keyword_lookup;
use crate::parse_helpers::{parse_float, parse_int, validate_separators, IntParseError};
use crate::{Interner, LexError, LexSuggestion, Span, TokenKind};

pub(crate) struct TokenCooker<'a> {
    buffer: &'a SourceBuffer,
    interner: Interner,
    errors: Vec<LexError>,
}

/// Shape of one string-family tag: delimiter widths and which cooked
/// kind it maps to.
struct StringShape {
    lead: u32,
    trail: u32,
    multiline: bool,
    /// Content starts right after the opening `"""` (so the first line
    /// participates in dedenting).
    opens: bool,
    /// Content ends at the closing `"""` (so the closing line's indent
    /// and its newline are stripped).
    closes: bool,
    kind: fn(crate::Name) -> TokenKind,
}

impl<'a> TokenCooker<'a> {
    pub(crate) fn new(buffer: &'a SourceBuffer) -> Self {
        Self {
            buffer,
            interner: Interner::new(),
            errors: Vec::new(),
        }
    }

    pub(crate) fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub(crate) fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub(crate) fn interner(&self) -> &Interner {
        &self.interner
    }

    pub(crate) fn push_error(&mut self, error: LexError) {
        self.errors.push(error);
    }

    pub(crate) fn into_parts(self) -> (Vec<LexError>, Interner) {
        (self.errors, self.interner)
    }

    /// Text of a span. The scanner only breaks tokens at scalar
    /// boundaries, so the slice is always valid UTF-8.
    fn text(&self, span: Span) -> &'a str {
        let bytes = &self.buffer.as_bytes()[span.start() as usize..span.end() as usize];
        std::str::from_utf8(bytes).unwrap_or("")
    }

    /// Cook one raw token. `multiline_indent` is the scanner's captured
    /// closing-delimiter indentation, consulted for multiline tags only.
    pub(crate) fn cook(
        &mut self,
        raw: RawToken,
        span: Span,
        multiline_indent: Option<(u32, u32)>,
    ) -> TokenKind {
        match raw.tag {
            RawTag::Eof => TokenKind::Eof,
            RawTag::Whitespace
            | RawTag::Newline
            | RawTag::LineComment
            | RawTag::BlockComment => TokenKind::Comment,

            RawTag::Ident => {
                let text = self.text(span);
                match keyword_lookup(text) {
                    Some(keyword) => TokenKind::Keyword(keyword),
                    None => TokenKind::Ident(self.interner.intern(text)),
                }
            }
            RawTag::BacktickIdent => {
                // Strip the backticks; no keyword lookup by construction.
                let inner = Span::new(span.start() + 1, span.end() - 1);
                let text = self.text(inner);
                TokenKind::Ident(self.interner.intern(text))
            }
            RawTag::UnterminatedBacktickIdent => {
                self.errors.push(
                    LexError::unrecognized_character(span)
                        .with_suggestion(LexSuggestion::text("close the identifier with `` ` ``")),
                );
                TokenKind::Error
            }
            RawTag::Attribute => {
                let name = Span::new(span.start() + 1, span.end());
                let text = self.text(name);
                TokenKind::Attribute(self.interner.intern(text))
            }

            RawTag::Int => self.cook_int(span, 0, 10),
            RawTag::HexInt => self.cook_int(span, 2, 16),
            RawTag::OctInt => self.cook_int(span, 2, 8),
            RawTag::BinInt => self.cook_int(span, 2, 2),
            RawTag::Float => self.cook_float(span),

            RawTag::String
            | RawTag::StringHead
            | RawTag::StringMiddle
            | RawTag::StringTail
            | RawTag::MultilineString
            | RawTag::MultilineStringHead
            | RawTag::MultilineStringMiddle
            | RawTag::MultilineStringTail => self.cook_string(raw.tag, span, multiline_indent),

            RawTag::UnterminatedString | RawTag::UnterminatedMultilineString => {
                self.errors.push(LexError::unterminated_string(span));
                TokenKind::Error
            }
            RawTag::UnterminatedBlockComment => {
                self.errors.push(LexError::unterminated_comment(span));
                TokenKind::Error
            }
            RawTag::InteriorNull => {
                self.errors.push(
                    LexError::unrecognized_character(span)
                        .with_suggestion(LexSuggestion::text("null byte in source")),
                );
                TokenKind::Error
            }
            RawTag::InvalidByte => {
                self.errors.push(LexError::unrecognized_character(span));
                TokenKind::Error
            }

            RawTag::Plus => TokenKind::Plus,
            RawTag::PlusEq => TokenKind::PlusEq,
            RawTag::Minus => TokenKind::Minus,
            RawTag::MinusEq => TokenKind::MinusEq,
            RawTag::Arrow => TokenKind::Arrow,
            RawTag::Star => TokenKind::Star,
            RawTag::StarEq => TokenKind::StarEq,
            RawTag::StarStar => TokenKind::StarStar,
            RawTag::StarStarEq => TokenKind::StarStarEq,
            RawTag::Slash => TokenKind::Slash,
            RawTag::SlashEq => TokenKind::SlashEq,
            RawTag::Percent => TokenKind::Percent,
            RawTag::PercentEq => TokenKind::PercentEq,
            RawTag::Eq => TokenKind::Eq,
            RawTag::EqEq => TokenKind::EqEq,
            RawTag::EqEqEq => TokenKind::EqEqEq,
            RawTag::Bang => TokenKind::Bang,
            RawTag::BangEq => TokenKind::BangEq,
            RawTag::BangEqEq => TokenKind::BangEqEq,
            RawTag::Lt => TokenKind::Lt,
            RawTag::LtEq => TokenKind::LtEq,
            RawTag::Shl => TokenKind::Shl,
            RawTag::ShlEq => TokenKind::ShlEq,
            RawTag::Spaceship => TokenKind::Spaceship,
            RawTag::Gt => TokenKind::Gt,
            RawTag::GtEq => TokenKind::GtEq,
            RawTag::Shr => TokenKind::Shr,
            RawTag::ShrEq => TokenKind::ShrEq,
            RawTag::Amp => TokenKind::Amp,
            RawTag::AmpEq => TokenKind::AmpEq,
            RawTag::AmpAmp => TokenKind::AmpAmp,
            RawTag::AmpAmpEq => TokenKind::AmpAmpEq,
            RawTag::Pipe => TokenKind::Pipe,
            RawTag::PipeEq => TokenKind::PipeEq,
            RawTag::PipePipe => TokenKind::PipePipe,
            RawTag::PipePipeEq => TokenKind::PipePipeEq,
            RawTag::Caret => TokenKind::Caret,
            RawTag::CaretEq => TokenKind::CaretEq,
            RawTag::Tilde => TokenKind::Tilde,
            RawTag::Question => TokenKind::Question,
            RawTag::QuestionEq => TokenKind::QuestionEq,
            RawTag::QuestionQuestion => TokenKind::QuestionQuestion,
            RawTag::QuestionQuestionEq => TokenKind::QuestionQuestionEq,
            RawTag::Dot => TokenKind::Dot,
            RawTag::DotDotDot => TokenKind::DotDotDot,
            RawTag::DotDotLess => TokenKind::DotDotLess,
            RawTag::KeyPath => TokenKind::KeyPath,
            RawTag::Colon => TokenKind::Colon,
            RawTag::Semicolon => TokenKind::Semicolon,
            RawTag::Comma => TokenKind::Comma,
            RawTag::LeftParen => TokenKind::LeftParen,
            RawTag::RightParen => TokenKind::RightParen,
            RawTag::LeftBracket => TokenKind::LeftBracket,
            RawTag::RightBracket => TokenKind::RightBracket,
            RawTag::LeftBrace => TokenKind::LeftBrace,
            RawTag::RightBrace => TokenKind::RightBrace,
            RawTag::At => TokenKind::At,
        }
    }

    /// Integer of any radix. `prefix` is the `0x`/`0o`/`0b` width.
    fn cook_int(&mut self, span: Span, prefix: u32, radix: u32) -> TokenKind {
        let run_span = Span::new(span.start() + prefix, span.end());
        let run = self.text(run_span).as_bytes();

        if let Err(offset) = validate_separators(run, radix) {
            let at = run_span.start() + u32::try_from(offset).unwrap_or(0);
            self.errors
                .push(LexError::invalid_numeric_separator(Span::new(at, at + 1)));
            return TokenKind::Error;
        }
        match parse_int(run, radix) {
            Ok(value) => TokenKind::Int(value),
            Err(IntParseError::Overflow) => {
                self.errors.push(LexError::numeric_overflow(span));
                TokenKind::Error
            }
            Err(IntParseError::InvalidDigit(offset)) => {
                let at = run_span.start() + u32::try_from(offset).unwrap_or(0);
                self.errors.push(
                    LexError::unrecognized_character(Span::new(at, at + 1)).with_suggestion(
                        LexSuggestion::text("digit out of range for this radix"),
                    ),
                );
                TokenKind::Error
            }
        }
    }

    fn cook_float(&mut self, span: Span) -> TokenKind {
        let text = self.text(span);
        if let Err(offset) = validate_separators(text.as_bytes(), 10) {
            let at = span.start() + u32::try_from(offset).unwrap_or(0);
            self.errors
                .push(LexError::invalid_numeric_separator(Span::new(at, at + 1)));
            return TokenKind::Error;
        }
        match parse_float(text) {
            Some(value) => TokenKind::float(value),
            None => {
                self.errors.push(LexError::numeric_overflow(span));
                TokenKind::Error
            }
        }
    }

    fn cook_string(
        &mut self,
        tag: RawTag,
        span: Span,
        multiline_indent: Option<(u32, u32)>,
    ) -> TokenKind {
        let shape = string_shape(tag);
        let content_span = Span::new(span.start() + shape.lead, span.end() - shape.trail);
        let content = self.text(content_span);

        if !shape.multiline {
            let mut cooked = String::with_capacity(content.len());
            decode_escapes(content, content_span.start(), &mut cooked, &mut self.errors);
            let name = self.interner.intern(&cooked);
            return (shape.kind)(name);
        }

        let prefix_span = match multiline_indent {
            Some((offset, len)) => Span::new(offset, offset + len),
            None => Span::point(span.start()),
        };
        let prefix = self.text(prefix_span);

        // Content starts after the newline that follows the opener; the
        // opener line is discarded when nothing but whitespace follows
        // the `"""`.
        let mut content = content;
        let mut base = content_span.start();
        if shape.opens {
            let ws = content.len() - content.trim_start_matches([' ', '\t']).len();
            let after_ws = &content[ws..];
            if let Some(rest) = after_ws.strip_prefix("\r\n") {
                content = rest;
                base += u32::try_from(ws + 2).unwrap_or(0);
            } else if let Some(rest) = after_ws.strip_prefix('\n') {
                content = rest;
                base += u32::try_from(ws + 1).unwrap_or(0);
            }
        }
        // ...and ends before the newline that precedes the closer. The
        // closing line's indentation is the dedent prefix, not content.
        if shape.closes {
            if !prefix.is_empty() {
                if let Some(rest) = content.strip_suffix(prefix) {
                    content = rest;
                }
            }
            if let Some(rest) = content.strip_suffix('\n') {
                content = rest.strip_suffix('\r').unwrap_or(rest);
            }
        }

        let pieces = dedent_lines(content, base, prefix, shape.opens, &mut self.errors);
        let mut cooked = String::with_capacity(content.len());
        for piece in &pieces {
            decode_escapes(piece.text, piece.offset, &mut cooked, &mut self.errors);
        }
        let name = self.interner.intern(&cooked);
        (shape.kind)(name)
    }
}

fn string_shape(tag: RawTag) -> StringShape {
    match tag {
        RawTag::String => StringShape {
            lead: 1,
            trail: 1,
            multiline: false,
            opens: false,
            closes: false,
            kind: TokenKind::String,
        },
        RawTag::StringHead => StringShape {
            lead: 1,
            trail: 2,
            multiline: false,
            opens: false,
            closes: false,
            kind: TokenKind::StringHead,
        },
        RawTag::StringMiddle => StringShape {
            lead: 1,
            trail: 2,
            multiline: false,
            opens: false,
            closes: false,
            kind: TokenKind::StringMiddle,
        },
        RawTag::StringTail => StringShape {
            lead: 1,
            trail: 1,
            multiline: false,
            opens: false,
            closes: false,
            kind: TokenKind::StringTail,
        },
        RawTag::MultilineString => StringShape {
            lead: 3,
            trail: 3,
            multiline: true,
            opens: true,
            closes: true,
            kind: TokenKind::String,
        },
        RawTag::MultilineStringHead => StringShape {
            lead: 3,
            trail: 2,
            multiline: true,
            opens: true,
            closes: false,
            kind: TokenKind::StringHead,
        },
        RawTag::MultilineStringMiddle => StringShape {
            lead: 1,
            trail: 2,
            multiline: true,
            opens: false,
            closes: false,
            kind: TokenKind::StringMiddle,
        },
        // Only the string-family tags reach this table.
        _ => StringShape {
            lead: 1,
            trail: 3,
            multiline: true,
            opens: false,
            closes: true,
            kind: TokenKind::StringTail,
        },
    }
}
