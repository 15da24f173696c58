//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, SourceError};
use crate::lexer::tokens::LexicalIssue;
use crate::Position;
use std::{io, path::PathBuf};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedSymbol {
            lexeme: "@".to_string(),
        },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedSymbol");
    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_position() {
    let error = Error::from_issue(LexicalIssue::MalformedNumber, "34RR", Position(42));

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_error_from_issue_names() {
    let cases = [
        (LexicalIssue::UnrecognisedSymbol, "UnrecognisedSymbol"),
        (LexicalIssue::MalformedNumber, "MalformedNumber"),
        (LexicalIssue::IntegerOverflow, "IntegerOverflow"),
    ];

    for (issue, name) in cases {
        let error = Error::from_issue(issue, "x", Position(0));
        assert_eq!(error.get_error_name(), name);
    }
}

#[test]
fn test_malformed_number_tip() {
    let error = Error::from_issue(LexicalIssue::MalformedNumber, "34RR", Position(0));

    assert_eq!(
        error.get_tip().to_string(),
        "`34RR` starts with digits but continues with letters"
    );
}

#[test]
fn test_overflow_tip() {
    let error = Error::from_issue(
        LexicalIssue::IntegerOverflow,
        "99999999999999999999",
        Position(0),
    );

    assert!(error.get_tip().to_string().contains("integer limit"));
}

#[test]
fn test_error_display() {
    let error = Error::from_issue(LexicalIssue::UnrecognisedSymbol, "#$", Position(3));

    assert_eq!(error.to_string(), "unrecognised symbol: \"#$\" at byte 3");
}

#[test]
fn test_empty_tip_displays_nothing() {
    assert_eq!(ErrorTip::None.to_string(), "");
}

#[test]
fn test_source_error_missing_file() {
    let error = SourceError::from_io(
        PathBuf::from("missing.txt"),
        io::Error::new(io::ErrorKind::NotFound, "no such file"),
    );

    assert!(matches!(error, SourceError::Unavailable { .. }));
    assert!(error.to_string().contains("missing.txt"));
}

#[test]
fn test_source_error_invalid_data() {
    let error = SourceError::from_io(
        PathBuf::from("binary.bin"),
        io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
    );

    assert!(matches!(error, SourceError::NotText { .. }));
}
