use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, str::FromStr};

use crate::{errors::errors::Error, Span};

lazy_static! {
    pub static ref KIND_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("ID", TokenKind::Identifier);
        map.insert("INTEGER", TokenKind::Integer);
        map.insert("FLOAT", TokenKind::Float);
        map.insert("LOGICAL_AND", TokenKind::LogicalAnd);
        map.insert("LOGICAL_OR", TokenKind::LogicalOr);
        map.insert("BITWISE_AND", TokenKind::BitwiseAnd);
        map.insert("BITWISE_OR", TokenKind::BitwiseOr);
        map.insert("ERROR", TokenKind::Error);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Integer,
    Float,

    LogicalAnd, // &&
    LogicalOr,  // ||
    BitwiseAnd, // &
    BitwiseOr,  // |

    Error,
}

impl TokenKind {
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Identifier,
        TokenKind::Integer,
        TokenKind::Float,
        TokenKind::LogicalAnd,
        TokenKind::LogicalOr,
        TokenKind::BitwiseAnd,
        TokenKind::BitwiseOr,
        TokenKind::Error,
    ];

    /// Short symbolic name used when printing tokens.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "ID",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::LogicalAnd => "LOGICAL_AND",
            TokenKind::LogicalOr => "LOGICAL_OR",
            TokenKind::BitwiseAnd => "BITWISE_AND",
            TokenKind::BitwiseOr => "BITWISE_OR",
            TokenKind::Error => "ERROR",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KIND_LOOKUP
            .get(s.trim().to_ascii_uppercase().as_str())
            .copied()
            .ok_or_else(|| format!("unknown token kind `{}`", s))
    }
}

/// Why a span of text failed to form a token.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LexicalIssue {
    /// Starts with a character no token can start with.
    UnrecognisedSymbol,
    /// A digit run glued to letters, like `34RR`.
    MalformedNumber,
    /// Well-formed integer that does not fit in an `i64`.
    IntegerOverflow,
}

/// Token payload. The variant decides both the kind and the payload shape.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Index into the scanner's symbol table.
    Identifier(usize),
    Integer(i64),
    Float(f64),
    LogicalAnd,
    LogicalOr,
    BitwiseAnd,
    BitwiseOr,
    /// The offending text, without display quotes.
    Error { lexeme: String, issue: LexicalIssue },
}

impl TokenValue {
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenValue::Identifier(_) => TokenKind::Identifier,
            TokenValue::Integer(_) => TokenKind::Integer,
            TokenValue::Float(_) => TokenKind::Float,
            TokenValue::LogicalAnd => TokenKind::LogicalAnd,
            TokenValue::LogicalOr => TokenKind::LogicalOr,
            TokenValue::BitwiseAnd => TokenKind::BitwiseAnd,
            TokenValue::BitwiseOr => TokenKind::BitwiseOr,
            TokenValue::Error { .. } => TokenKind::Error,
        }
    }

    pub fn error(lexeme: &str, issue: LexicalIssue) -> Self {
        TokenValue::Error {
            lexeme: lexeme.to_string(),
            issue,
        }
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Identifier(index) => write!(f, "{}", index),
            TokenValue::Integer(value) => write!(f, "{}", value),
            TokenValue::Float(value) => write!(f, "{:?}", value),
            TokenValue::Error { lexeme, .. } => write!(f, "\"{}\"", lexeme),
            _ => write!(f, "nothing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.kind(), self.value)
    }
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        self.value.kind()
    }

    pub fn is_error(&self) -> bool {
        matches!(self.value, TokenValue::Error { .. })
    }

    /// The source text this token was scanned from.
    pub fn lexeme<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.start.0..self.span.end.0]
    }

    /// Builds a positioned diagnostic for error tokens.
    pub fn diagnostic(&self) -> Option<Error> {
        match &self.value {
            TokenValue::Error { lexeme, issue } => {
                Some(Error::from_issue(*issue, lexeme, self.span.start))
            }
            _ => None,
        }
    }
}
