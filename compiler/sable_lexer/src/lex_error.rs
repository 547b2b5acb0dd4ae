//! Lexical error values.
//!
//! Errors are data, not control flow: the lexer records them in an
//! accumulator and keeps scanning, so one bad literal does not hide the
//! rest of the file. Each error carries a span, a kind, and optional
//! fix suggestions for diagnostics rendering.

use std::fmt;

use crate::Span;

/// A single lexical error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
    pub suggestions: Vec<LexSuggestion>,
}

/// What went wrong.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexErrorKind {
    /// Block comment without a closing `*/`.
    UnterminatedComment,
    /// String literal cut off by a line break or end of input.
    UnterminatedStringLiteral,
    /// Multiline string line not indented to the closing delimiter.
    InsufficientIndentation,
    /// `_` digit separator not between two digits.
    InvalidNumericSeparator,
    /// Integer literal does not fit in 64 bits.
    NumericOverflow,
    /// Input ended inside a `\(...)` interpolation.
    UnbalancedInterpolation,
    /// Unknown or malformed escape sequence.
    InvalidEscapeSequence,
    /// Character with no lexical meaning.
    UnrecognizedCharacter,
}

/// A suggested fix, attached to an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexSuggestion {
    pub message: String,
}

impl LexSuggestion {
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// Constructors are #[cold]: error paths should not pollute the hot
// scanning loop's instruction cache.
impl LexError {
    #[cold]
    pub fn unterminated_comment(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedComment,
            suggestions: vec![LexSuggestion::text("close the comment with `*/`")],
        }
    }

    #[cold]
    pub fn unterminated_string(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnterminatedStringLiteral,
            suggestions: vec![LexSuggestion::text("close the string with `\"`")],
        }
    }

    #[cold]
    pub fn insufficient_indentation(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::InsufficientIndentation,
            suggestions: vec![LexSuggestion::text(
                "indent this line to match the closing `\"\"\"`",
            )],
        }
    }

    #[cold]
    pub fn invalid_numeric_separator(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidNumericSeparator,
            suggestions: vec![LexSuggestion::text(
                "`_` must sit between two digits, as in `1_000`",
            )],
        }
    }

    #[cold]
    pub fn numeric_overflow(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::NumericOverflow,
            suggestions: Vec::new(),
        }
    }

    #[cold]
    pub fn unbalanced_interpolation(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnbalancedInterpolation,
            suggestions: vec![LexSuggestion::text("close the interpolation with `)`")],
        }
    }

    #[cold]
    pub fn invalid_escape(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::InvalidEscapeSequence,
            suggestions: vec![LexSuggestion::text(
                "supported escapes are \\n \\t \\r \\\\ \\\" \\0 and \\u{...}",
            )],
        }
    }

    #[cold]
    pub fn unrecognized_character(span: Span) -> Self {
        Self {
            span,
            kind: LexErrorKind::UnrecognizedCharacter,
            suggestions: Vec::new(),
        }
    }

    #[cold]
    pub fn with_suggestion(mut self, suggestion: LexSuggestion) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::UnterminatedComment => "unterminated block comment",
            Self::UnterminatedStringLiteral => "unterminated string literal",
            Self::InsufficientIndentation => {
                "insufficient indentation in multiline string literal"
            }
            Self::InvalidNumericSeparator => "misplaced `_` separator in numeric literal",
            Self::NumericOverflow => "integer literal overflows 64 bits",
            Self::UnbalancedInterpolation => "unbalanced `\\(...)` string interpolation",
            Self::InvalidEscapeSequence => "invalid escape sequence",
            Self::UnrecognizedCharacter => "unrecognized character",
        };
        f.write_str(message)
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error at {}: {}", self.span, self.kind)
    }
}

impl std::error::Error for LexError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_includes_span_and_kind() {
        let error = LexError::numeric_overflow(Span::new(3, 10));
        assert_eq!(error.to_string(), "error at 3..10: integer literal overflows 64 bits");
    }

    #[test]
    fn constructors_set_kinds() {
        assert_eq!(
            LexError::unterminated_comment(Span::point(0)).kind,
            LexErrorKind::UnterminatedComment
        );
        assert_eq!(
            LexError::invalid_escape(Span::point(0)).kind,
            LexErrorKind::InvalidEscapeSequence
        );
    }

    #[test]
    fn suggestions_attach() {
        let error = LexError::numeric_overflow(Span::point(0))
            .with_suggestion(LexSuggestion::text("use a smaller number"));
        assert_eq!(error.suggestions.len(), 1);
    }
}
