//! Raw token tags produced by the scanner.
//!
//! A [`RawToken`] is a tag plus a byte length; offsets are implicit in the
//! scan order. Tags classify lexeme shape only. Text-dependent work such as
//! keyword recognition, escape decoding and numeric parsing happens in the
//! cooking layer, which slices the source by the accumulated offsets.
//!
//! Malformed input is represented as dedicated tags rather than a `Result`:
//! the scanner never fails, it emits an error-shaped token and keeps going.

/// A raw token: shape tag plus byte length.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

impl RawToken {
    #[inline]
    pub fn new(tag: RawTag, len: u32) -> Self {
        Self { tag, len }
    }
}

/// Shape classification of a raw lexeme.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RawTag {
    /// End of input. Always the final token, with length 0.
    Eof,

    // === Trivia ===
    /// Run of spaces and tabs.
    Whitespace,
    /// `\n`, `\r\n` or a lone `\r`.
    Newline,
    /// `// ...` up to (not including) the line terminator.
    LineComment,
    /// `/* ... */`, nesting allowed.
    BlockComment,
    /// Block comment that hit EOF before its closing `*/`.
    UnterminatedBlockComment,

    // === Names ===
    /// Identifier or keyword; the cooker tells them apart.
    Ident,
    /// `` `name` ``; always an identifier, never a keyword.
    BacktickIdent,
    /// Backtick with no closing backtick on the same construct.
    UnterminatedBacktickIdent,
    /// `@Name`.
    Attribute,

    // === Numbers ===
    /// Decimal integer literal.
    Int,
    /// `0x...` hexadecimal integer literal.
    HexInt,
    /// `0o...` octal integer literal.
    OctInt,
    /// `0b...` binary integer literal.
    BinInt,
    /// Decimal float literal (fraction and/or exponent).
    Float,

    // === Strings ===
    //
    // A literal without interpolation is a single `String` token. With
    // interpolation the literal splits into Head / Middle* / Tail fragments;
    // the expression tokens between fragments come from the main scanner
    // while an interpolation frame is open.
    /// `"..."` with no interpolation.
    String,
    /// `"...\(` opening fragment.
    StringHead,
    /// `)...\(` fragment between two interpolations.
    StringMiddle,
    /// `)..."` closing fragment.
    StringTail,
    /// `"""..."""` with no interpolation.
    MultilineString,
    /// `"""...\(` opening fragment of a multiline literal.
    MultilineStringHead,
    /// `)...\(` multiline fragment between two interpolations.
    MultilineStringMiddle,
    /// `)..."""` closing multiline fragment.
    MultilineStringTail,
    /// Single-line literal terminated by a line break or EOF.
    UnterminatedString,
    /// Multiline literal that hit EOF before its closing `"""`.
    UnterminatedMultilineString,

    // === Operators ===
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
    /// `\.` key path prefix.
    KeyPath,

    // === Punctuation ===
    Colon,
    Semicolon,
    Comma,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    /// `@` not followed by an identifier.
    At,

    // === Errors ===
    /// Byte or scalar with no lexical meaning.
    InvalidByte,
    /// `0x00` inside the source content (sentinel aliasing guard).
    InteriorNull,
}

impl RawTag {
    /// Whitespace, newlines and well-formed comments. These never reach the
    /// token stream unless the caller opts in to comment tokens.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace | RawTag::Newline | RawTag::LineComment | RawTag::BlockComment
        )
    }

    /// Tags that represent malformed input.
    pub fn is_error(self) -> bool {
        matches!(
            self,
            RawTag::UnterminatedBlockComment
                | RawTag::UnterminatedBacktickIdent
                | RawTag::UnterminatedString
                | RawTag::UnterminatedMultilineString
                | RawTag::InvalidByte
                | RawTag::InteriorNull
        )
    }
}

/// Raw tokens stay in two words; the scanner produces a lot of them.
const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
