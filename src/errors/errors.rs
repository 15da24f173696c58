use std::{fmt::Display, io, path::PathBuf};

use thiserror::Error;

use crate::{lexer::tokens::LexicalIssue, Position};

/// Failure to obtain the text to scan. Raised before a scanner exists.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("source {path:?} is unavailable: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("source {path:?} is not valid UTF-8 text")]
    NotText { path: PathBuf },
}

impl SourceError {
    pub fn from_io(path: PathBuf, error: io::Error) -> Self {
        if error.kind() == io::ErrorKind::InvalidData {
            SourceError::NotText { path }
        } else {
            SourceError::Unavailable {
                path,
                source: error,
            }
        }
    }
}

/// A positioned lexical diagnostic, derived from an error token.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn from_issue(issue: LexicalIssue, lexeme: &str, position: Position) -> Self {
        let lexeme = lexeme.to_string();
        let error_impl = match issue {
            LexicalIssue::UnrecognisedSymbol => ErrorImpl::UnrecognisedSymbol { lexeme },
            LexicalIssue::MalformedNumber => ErrorImpl::MalformedNumber { lexeme },
            LexicalIssue::IntegerOverflow => ErrorImpl::IntegerOverflow { lexeme },
        };
        Error::new(error_impl, position)
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedSymbol { .. } => "UnrecognisedSymbol",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedSymbol { .. } => ErrorTip::None,
            ErrorImpl::MalformedNumber { lexeme } => ErrorTip::Suggestion(format!(
                "`{}` starts with digits but continues with letters",
                lexeme
            )),
            ErrorImpl::IntegerOverflow { lexeme } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                lexeme
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at byte {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised symbol: {lexeme:?}")]
    UnrecognisedSymbol { lexeme: String },
    #[error("malformed number: {lexeme:?}")]
    MalformedNumber { lexeme: String },
    #[error("integer out of range: {lexeme:?}")]
    IntegerOverflow { lexeme: String },
}
