#![allow(clippy::module_inception)]

use std::fmt::Write;

use crate::errors::errors::{Error, ErrorTip};

pub mod driver;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod source;

pub use lexer::scanner::{tokenize, Scanner};
pub use lexer::symbols::SymbolTable;
pub use lexer::tokens::{LexicalIssue, Token, TokenKind, TokenValue};
pub use source::Source;

/// Byte offset into the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub usize);

/// Half-open byte range `[start, end)` of a lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: Position(start),
            end: Position(end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds the line holding byte `position`.
///
/// Returns the 1-based line number, the line text (with its terminator, if
/// any) and the 0-based character column of `position` within that line.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= content.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let column = line.get(..position - start)?.chars().count();
            return Some((index + 1, line.to_string(), column));
        }

        start = end;
    }

    None
}

/// Renders a caret-style report for a lexical diagnostic.
///
/// ```text
/// Error: MalformedNumber (`34RR` starts with digits but continues with letters)
/// -> input.txt
///    |
///  1 | x 45 34RR
///    | -----^
/// ```
pub fn render_diagnostic(error: &Error, source: &Source) -> String {
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", source.name());

    let Some((line, line_text, column)) = get_line_at_position(source.text(), error.get_position().0)
    else {
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_string, line_text_removed.trim_end());

    let arrows = column - removed_whitespace + 1;

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let trimmed = string.trim_start();
    let removed = string[..string.len() - trimmed.len()].chars().count();
    (trimmed, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokens::LexicalIssue;

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nsecond\n\n  Testing { }\n";

        let (line_number, line, line_pos) = get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(content, 32).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "  Testing { }\n");
        assert_eq!(line_pos, 10);

        assert!(get_line_at_position(content, content.len()).is_none());
    }

    #[test]
    fn test_line_column_counts_characters() {
        let content = "é 34RR";
        let (_, _, column) = get_line_at_position(content, 3).unwrap();
        assert_eq!(column, 2);
    }

    #[test]
    fn test_render_diagnostic() {
        let source = Source::from_string("input.txt", "x 45\n  34RR y\n");
        let error = Error::from_issue(LexicalIssue::MalformedNumber, "34RR", Position(7));
        let report = render_diagnostic(&error, &source);

        let expected = "\
Error: MalformedNumber (`34RR` starts with digits but continues with letters)
-> input.txt
  |
2 | 34RR y
  | ^
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(3, 7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
        assert!(Span::new(2, 2).is_empty());
    }
}
