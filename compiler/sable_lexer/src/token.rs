//! Cooked tokens.

use crate::{Keyword, Name, Span};

/// A cooked token: classified kind plus source span.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn is_eof(self) -> bool {
        self.kind == TokenKind::Eof
    }

    pub fn is_error(self) -> bool {
        self.kind == TokenKind::Error
    }
}

/// Token classification with cooked payloads.
///
/// Identifiers, attributes and string contents are interned [`Name`]s;
/// resolve them through the [`Interner`](crate::Interner) that produced
/// the stream. Floats are stored as `f64` bits so the kind stays `Eq`
/// and `Hash`.
///
/// A string literal without interpolation is one `String` token. With
/// interpolation it becomes `StringHead`, the interpolated expression's
/// tokens, then `StringTail` (with `StringMiddle` between adjacent
/// interpolations). Multiline literals cook into the same kinds, already
/// dedented.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Identifier, including `` `backtick` `` and `$0` forms.
    Ident(Name),
    Keyword(Keyword),
    /// `@Name`, payload excludes the `@`.
    Attribute(Name),
    /// Integer literal value (any radix).
    Int(u64),
    /// Float literal as `f64` bits; see [`TokenKind::float`].
    Float(u64),
    /// Complete string literal, cooked content.
    String(Name),
    /// `"...\(` fragment, cooked content between the delimiters.
    StringHead(Name),
    /// `)...\(` fragment.
    StringMiddle(Name),
    /// `)..."` fragment.
    StringTail(Name),
    /// Comment text, emitted only when the caller opts in.
    Comment,

    // Operators
    Plus,
    PlusEq,
    Minus,
    MinusEq,
    Arrow,
    Star,
    StarEq,
    StarStar,
    StarStarEq,
    Slash,
    SlashEq,
    Percent,
    PercentEq,
    Eq,
    EqEq,
    EqEqEq,
    Bang,
    BangEq,
    BangEqEq,
    Lt,
    LtEq,
    Shl,
    ShlEq,
    Spaceship,
    Gt,
    GtEq,
    Shr,
    ShrEq,
    Amp,
    AmpEq,
    AmpAmp,
    AmpAmpEq,
    Pipe,
    PipeEq,
    PipePipe,
    PipePipeEq,
    Caret,
    CaretEq,
    Tilde,
    Question,
    QuestionEq,
    QuestionQuestion,
    QuestionQuestionEq,
    Dot,
    DotDotDot,
    DotDotLess,
    KeyPath,

    // Punctuation
    Colon,
    Semicolon,
    Comma,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    At,

    /// Malformed input; details live in the error accumulator.
    Error,
    /// End of input. Exactly one per stream, always last.
    Eof,
}

impl TokenKind {
    /// Build a `Float` from its value.
    pub fn float(value: f64) -> Self {
        Self::Float(value.to_bits())
    }

    /// Recover the `f64` from a `Float` kind.
    pub fn as_float(self) -> Option<f64> {
        match self {
            Self::Float(bits) => Some(f64::from_bits(bits)),
            _ => None,
        }
    }

    /// Does this kind open or continue a string interpolation?
    pub fn is_string_fragment(self) -> bool {
        matches!(
            self,
            Self::StringHead(_) | Self::StringMiddle(_) | Self::StringTail(_)
        )
    }
}

/// Tokens are passed around by value; keep them small.
const _: () = assert!(std::mem::size_of::<Token>() <= 24);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn float_bits_round_trip() {
        let kind = TokenKind::float(10.5);
        assert_eq!(kind.as_float(), Some(10.5));
        assert_eq!(TokenKind::Plus.as_float(), None);
    }

    #[test]
    fn float_kinds_compare_by_bits() {
        assert_eq!(TokenKind::float(1.5), TokenKind::float(1.5));
        assert_ne!(TokenKind::float(1.5), TokenKind::float(2.5));
    }

    #[test]
    fn eof_and_error_predicates() {
        let eof = Token::new(TokenKind::Eof, Span::point(3));
        assert!(eof.is_eof());
        assert!(!eof.is_error());
        let error = Token::new(TokenKind::Error, Span::new(0, 1));
        assert!(error.is_error());
    }
}
