//! Keyword recognition.
//!
//! Lookup is bucketed by length first: a length mismatch rejects most
//! identifiers before any byte of the text is compared. Backtick
//! identifiers never reach this table; `` `class` `` stays an identifier.

/// Reserved words.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Keyword {
    // Declarations
    Associatedtype,
    Class,
    Deinit,
    Enum,
    Extension,
    Fileprivate,
    Func,
    Import,
    Init,
    Inout,
    Internal,
    Let,
    Open,
    Operator,
    Precedencegroup,
    Private,
    Protocol,
    Public,
    Rethrows,
    Static,
    Struct,
    Subscript,
    Typealias,
    Var,
    // Statements
    Break,
    Case,
    Catch,
    Continue,
    Default,
    Defer,
    Do,
    Else,
    Fallthrough,
    For,
    Guard,
    If,
    In,
    Repeat,
    Return,
    Switch,
    Throw,
    Where,
    While,
    // Expressions and types
    Any,
    As,
    Await,
    False,
    Is,
    Nil,
    SelfValue,
    SelfType,
    Some,
    Super,
    Throws,
    True,
    Try,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Associatedtype => "associatedtype",
            Self::Class => "class",
            Self::Deinit => "deinit",
            Self::Enum => "enum",
            Self::Extension => "extension",
            Self::Fileprivate => "fileprivate",
            Self::Func => "func",
            Self::Import => "import",
            Self::Init => "init",
            Self::Inout => "inout",
            Self::Internal => "internal",
            Self::Let => "let",
            Self::Open => "open",
            Self::Operator => "operator",
            Self::Precedencegroup => "precedencegroup",
            Self::Private => "private",
            Self::Protocol => "protocol",
            Self::Public => "public",
            Self::Rethrows => "rethrows",
            Self::Static => "static",
            Self::Struct => "struct",
            Self::Subscript => "subscript",
            Self::Typealias => "typealias",
            Self::Var => "var",
            Self::Break => "break",
            Self::Case => "case",
            Self::Catch => "catch",
            Self::Continue => "continue",
            Self::Default => "default",
            Self::Defer => "defer",
            Self::Do => "do",
            Self::Else => "else",
            Self::Fallthrough => "fallthrough",
            Self::For => "for",
            Self::Guard => "guard",
            Self::If => "if",
            Self::In => "in",
            Self::Repeat => "repeat",
            Self::Return => "return",
            Self::Switch => "switch",
            Self::Throw => "throw",
            Self::Where => "where",
            Self::While => "while",
            Self::Any => "any",
            Self::As => "as",
            Self::Await => "await",
            Self::False => "false",
            Self::Is => "is",
            Self::Nil => "nil",
            Self::SelfValue => "self",
            Self::SelfType => "Self",
            Self::Some => "some",
            Self::Super => "super",
            Self::Throws => "throws",
            Self::True => "true",
            Self::Try => "try",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up a keyword by its text, or `None` for ordinary identifiers.
pub fn keyword_lookup(text: &str) -> Option<Keyword> {
    let keyword = match text.len() {
        2 => match text {
            "as" => Keyword::As,
            "do" => Keyword::Do,
            "if" => Keyword::If,
            "in" => Keyword::In,
            "is" => Keyword::Is,
            _ => return None,
        },
        3 => match text {
            "any" => Keyword::Any,
            "for" => Keyword::For,
            "let" => Keyword::Let,
            "nil" => Keyword::Nil,
            "try" => Keyword::Try,
            "var" => Keyword::Var,
            _ => return None,
        },
        4 => match text {
            "case" => Keyword::Case,
            "else" => Keyword::Else,
            "enum" => Keyword::Enum,
            "func" => Keyword::Func,
            "init" => Keyword::Init,
            "open" => Keyword::Open,
            "self" => Keyword::SelfValue,
            "Self" => Keyword::SelfType,
            "some" => Keyword::Some,
            "true" => Keyword::True,
            _ => return None,
        },
        5 => match text {
            "await" => Keyword::Await,
            "break" => Keyword::Break,
            "catch" => Keyword::Catch,
            "class" => Keyword::Class,
            "defer" => Keyword::Defer,
            "false" => Keyword::False,
            "guard" => Keyword::Guard,
            "inout" => Keyword::Inout,
            "super" => Keyword::Super,
            "throw" => Keyword::Throw,
            "where" => Keyword::Where,
            "while" => Keyword::While,
            _ => return None,
        },
        6 => match text {
            "deinit" => Keyword::Deinit,
            "import" => Keyword::Import,
            "public" => Keyword::Public,
            "repeat" => Keyword::Repeat,
            "return" => Keyword::Return,
            "static" => Keyword::Static,
            "struct" => Keyword::Struct,
            "switch" => Keyword::Switch,
            "throws" => Keyword::Throws,
            _ => return None,
        },
        7 => match text {
            "default" => Keyword::Default,
            "private" => Keyword::Private,
            _ => return None,
        },
        8 => match text {
            "continue" => Keyword::Continue,
            "internal" => Keyword::Internal,
            "operator" => Keyword::Operator,
            "protocol" => Keyword::Protocol,
            "rethrows" => Keyword::Rethrows,
            _ => return None,
        },
        9 => match text {
            "extension" => Keyword::Extension,
            "subscript" => Keyword::Subscript,
            "typealias" => Keyword::Typealias,
            _ => return None,
        },
        11 => match text {
            "fallthrough" => Keyword::Fallthrough,
            "fileprivate" => Keyword::Fileprivate,
            _ => return None,
        },
        14 => match text {
            "associatedtype" => Keyword::Associatedtype,
            _ => return None,
        },
        15 => match text {
            "precedencegroup" => Keyword::Precedencegroup,
            _ => return None,
        },
        _ => return None,
    };
    Some(keyword)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn recognizes_keywords() {
        assert_eq!(keyword_lookup("func"), Some(Keyword::Func));
        assert_eq!(keyword_lookup("return"), Some(Keyword::Return));
        assert_eq!(keyword_lookup("precedencegroup"), Some(Keyword::Precedencegroup));
    }

    #[test]
    fn self_is_case_sensitive() {
        assert_eq!(keyword_lookup("self"), Some(Keyword::SelfValue));
        assert_eq!(keyword_lookup("Self"), Some(Keyword::SelfType));
        assert_eq!(keyword_lookup("SELF"), None);
    }

    #[test]
    fn rejects_non_keywords() {
        assert_eq!(keyword_lookup("function"), None);
        assert_eq!(keyword_lookup("Let"), None);
        assert_eq!(keyword_lookup(""), None);
        assert_eq!(keyword_lookup("x"), None);
    }

    #[test]
    fn every_keyword_round_trips() {
        // as_str and the lookup table must agree.
        for text in [
            "associatedtype", "class", "deinit", "enum", "extension", "fileprivate",
            "func", "import", "init", "inout", "internal", "let", "open", "operator",
            "precedencegroup", "private", "protocol", "public", "rethrows", "static",
            "struct", "subscript", "typealias", "var", "break", "case", "catch",
            "continue", "default", "defer", "do", "else", "fallthrough", "for",
            "guard", "if", "in", "repeat", "return", "switch", "throw", "where",
            "while", "any", "as", "await", "false", "is", "nil", "self", "Self",
            "some", "super", "throws", "true", "try",
        ] {
            let keyword = keyword_lookup(text);
            assert!(keyword.is_some(), "{text} missing from lookup");
            if let Some(keyword) = keyword {
                assert_eq!(keyword.as_str(), text);
            }
        }
    }
}
