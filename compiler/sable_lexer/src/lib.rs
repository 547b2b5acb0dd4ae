//! Lexer for the Sable compiler.
//!
//! Tokenization runs in two layers. The `sable_lexer_core` crate scans a
//! sentinel-terminated buffer into raw `(tag, length)` tokens; this crate
//! cooks those into full [`Token`]s with interned identifiers, decoded
//! string contents, keyword recognition and checked numeric values.
//!
//! Lexing never fails. Malformed input cooks to [`TokenKind::Error`]
//! tokens while the details accumulate as [`LexError`] values, so a
//! single bad literal does not hide the rest of the file. The stream
//! always ends with exactly one [`TokenKind::Eof`].
//!
//! ```
//! use sable_lexer::{lex, Keyword, TokenKind};
//!
//! let out = lex("let x = 1_000");
//! assert!(out.errors.is_empty());
//! assert_eq!(out.tokens[0].kind, TokenKind::Keyword(Keyword::Let));
//! assert_eq!(out.tokens[2].kind, TokenKind::Eq);
//! assert_eq!(out.tokens[3].kind, TokenKind::Int(1000));
//! assert!(out.tokens[4].is_eof());
//! ```
//!
//! For streaming use, [`Lexer`] is an iterator over tokens; it borrows a
//! [`SourceBuffer`] so the caller controls the allocation:
//!
//! ```
//! use sable_lexer::{Lexer, SourceBuffer, TokenKind};
//!
//! let buffer = SourceBuffer::new("1 + 2");
//! let kinds: Vec<TokenKind> = Lexer::new(&buffer).map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![TokenKind::Int(1), TokenKind::Plus, TokenKind::Int(2), TokenKind::Eof]
//! );
//! ```

mod cook_escape;
mod cooker;
mod dedent;
mod interner;
mod keywords;
mod lex_error;
mod parse_helpers;
mod span;
mod token;

pub use interner::{Interner, Name};
pub use keywords::{keyword_lookup, Keyword};
pub use lex_error::{LexError, LexErrorKind, LexSuggestion};
pub use span::Span;
pub use token::{Token, TokenKind};

// Re-exported so downstream crates can resolve positions without
// depending on the core crate directly.
pub use sable_lexer_core::{Position, SourceBuffer};

use cooker::TokenCooker;
use sable_lexer_core::{RawScanner, RawTag};

/// Tokenization knobs.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexOptions {
    /// Stop after the first error: the offending token is emitted, then
    /// the stream ends with `Eof`. Default is to recover and continue.
    pub stop_on_first_error: bool,
    /// Emit `Comment` tokens instead of discarding comments with the
    /// rest of the trivia. Whitespace is always discarded.
    pub emit_comments: bool,
}

/// Streaming tokenizer. Yields every token including the final `Eof`,
/// then `None`.
pub struct Lexer<'a> {
    scanner: RawScanner<'a>,
    cooker: TokenCooker<'a>,
    options: LexOptions,
    /// First error seen under `stop_on_first_error`; emit `Eof` next.
    stopped: bool,
    /// `Eof` has been yielded; the iterator is exhausted.
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Self::with_options(buffer, LexOptions::default())
    }

    pub fn with_options(buffer: &'a SourceBuffer, options: LexOptions) -> Self {
        Self {
            scanner: RawScanner::new(buffer),
            cooker: TokenCooker::new(buffer),
            options,
            stopped: false,
            finished: false,
        }
    }

    /// Errors recorded so far.
    pub fn errors(&self) -> &[LexError] {
        self.cooker.errors()
    }

    /// The interner holding identifier and string payloads.
    pub fn interner(&self) -> &Interner {
        self.cooker.interner()
    }

    /// Consume the lexer, keeping the accumulated errors and interner.
    pub fn into_parts(self) -> (Vec<LexError>, Interner) {
        self.cooker.into_parts()
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        if self.stopped {
            self.finished = true;
            return Some(Token::new(TokenKind::Eof, Span::point(self.scanner.pos())));
        }
        loop {
            let start = self.scanner.pos();
            let raw = self.scanner.next_token();

            if raw.tag == RawTag::Eof {
                if self.scanner.open_interpolations() > 0 {
                    self.cooker
                        .push_error(LexError::unbalanced_interpolation(Span::point(start)));
                }
                self.finished = true;
                return Some(Token::new(TokenKind::Eof, Span::point(start)));
            }

            let span = Span::new(start, start + raw.len);
            let is_comment = matches!(raw.tag, RawTag::LineComment | RawTag::BlockComment);
            if raw.tag.is_trivia() && !(self.options.emit_comments && is_comment) {
                continue;
            }

            let errors_before = self.cooker.error_count();
            let kind = self.cooker.cook(raw, span, self.scanner.multiline_indent());
            if self.options.stop_on_first_error && self.cooker.error_count() > errors_before {
                self.stopped = true;
            }
            return Some(Token::new(kind, span));
        }
    }
}

/// Everything one lex pass produces.
#[derive(Debug)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
    pub interner: Interner,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Resolve an interned payload, e.g. from [`TokenKind::Ident`].
    pub fn resolve(&self, name: Name) -> &str {
        self.interner.resolve(name)
    }
}

/// Tokenize a source string with default options.
pub fn lex(source: &str) -> LexOutput {
    lex_with_options(source, LexOptions::default())
}

/// Tokenize a source string.
pub fn lex_with_options(source: &str, options: LexOptions) -> LexOutput {
    let buffer = SourceBuffer::new(source);
    let mut lexer = Lexer::with_options(&buffer, options);
    let tokens: Vec<Token> = lexer.by_ref().collect();
    let (errors, interner) = lexer.into_parts();
    LexOutput {
        tokens,
        errors,
        interner,
    }
}
