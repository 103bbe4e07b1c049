use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_KEYWORDS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("if");
        set.insert("else");
        set.insert("print");
        set.insert("get");
        set.insert("int");
        set.insert("double");
        set.insert("for");
        set
    };
    pub static ref VALID_OPERATORS: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("+");
        set.insert("++");
        set.insert("-");
        set.insert("*");
        set.insert("/");
        set.insert("=");
        set.insert("<");
        set.insert("<=");
        set.insert(">");
        set.insert(">=");
        set.insert("==");
        set.insert("!=");
        set
    };
}

/// Characters that may appear in an operator run.
pub const OPERATOR_SYMBOLS: [char; 8] = ['+', '-', '*', '/', '=', '<', '>', '!'];

pub const DELIMITERS: [char; 4] = ['(', ')', '{', '}'];

pub fn is_operator_symbol(ch: char) -> bool {
    OPERATOR_SYMBOLS.contains(&ch)
}

pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

/// Whitespace as the C locale sees it, vertical tab included.
pub fn is_whitespace(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0b'
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Int,
    Double,
    Operator,
    String,
    Delimiter,
    Semicolon,
    Comment,
    Error,
}

impl TokenKind {
    pub fn canonical_name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Int => "INT",
            TokenKind::Double => "DOUBLE",
            TokenKind::Operator => "OPERATOR",
            TokenKind::String => "STRING",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::Comment => "COMMENT",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Error => "ERROR",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical_name())
    }
}

/// A classified lexeme. `value` is the exact source text, quotes included
/// for strings.
///
/// Equality looks at `kind` and `value` only; the span is where the token
/// was found, not part of its identity.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl Eq for Token {}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            value: value.into(),
            span,
        }
    }

    /// A token with no source location, mostly useful for comparisons.
    pub fn detached(kind: TokenKind, value: impl Into<String>) -> Self {
        Token::new(kind, value, Span::null())
    }

    /// Canonical `<CATEGORY, "text">` form.
    pub fn render(&self) -> String {
        format!("<{}, \"{}\">", self.kind.canonical_name(), self.value)
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }
}
