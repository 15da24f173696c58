use tracing::trace;

use crate::{Position, Span, MK_TOKEN};

use super::{
    symbols::SymbolTable,
    tokens::{LexicalIssue, Token, TokenValue},
};

/// On-demand scanner over an in-memory text.
///
/// Each call to [`Scanner::next_token`] skips whitespace, consumes exactly one
/// lexeme and returns it as a token, or `None` once the text is exhausted.
/// The cursor only moves forward; scanning again means building a new
/// scanner, which also starts from an empty symbol table.
#[derive(Debug, Clone)]
pub struct Scanner {
    source: String,
    pos: usize,
    symbols: SymbolTable,
}

impl Scanner {
    pub fn new(source: impl Into<String>) -> Scanner {
        Scanner {
            source: source.into(),
            pos: 0,
            symbols: SymbolTable::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn position(&self) -> Position {
        Position(self.pos)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    /// Produces the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        self.eat_while(char::is_whitespace);

        let start = self.pos;
        let current = self.at()?;

        let value = match current {
            c if is_identifier_start(c) => self.identifier(start),
            c if c.is_ascii_digit() => self.number(start),
            '-' if self.peek().is_some_and(|c| c.is_ascii_digit()) => {
                self.negative_number(start)
            }
            '&' => self.pair('&', TokenValue::LogicalAnd, TokenValue::BitwiseAnd),
            '|' => self.pair('|', TokenValue::LogicalOr, TokenValue::BitwiseOr),
            _ => self.unrecognised(start),
        };

        let token = MK_TOKEN!(value, start, self.pos);
        trace!(start, end = self.pos, token = %token, "scanned token");
        Some(token)
    }

    fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().nth(1)
    }

    fn advance(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    fn eat_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.at() {
            if !predicate(c) {
                break;
            }
            self.advance(c);
        }
    }

    fn identifier(&mut self, start: usize) -> TokenValue {
        self.eat_while(is_identifier_continue);

        let name = &self.source[start..self.pos];
        TokenValue::Identifier(self.symbols.intern(name))
    }

    fn number(&mut self, start: usize) -> TokenValue {
        self.eat_while(|c| c.is_ascii_digit());

        // Only the digit-first path rejects a letter suffix.
        if self.at().is_some_and(is_identifier_start) {
            self.eat_while(is_identifier_continue);
            return TokenValue::error(&self.source[start..self.pos], LexicalIssue::MalformedNumber);
        }

        self.number_tail(start)
    }

    fn negative_number(&mut self, start: usize) -> TokenValue {
        self.advance('-');
        self.eat_while(|c| c.is_ascii_digit());
        self.number_tail(start)
    }

    /// Finishes a digit run at the cursor: an optional `.` and fraction make
    /// it a float, otherwise it is an integer.
    fn number_tail(&mut self, start: usize) -> TokenValue {
        if self.at() == Some('.') {
            self.advance('.');
            self.eat_while(|c| c.is_ascii_digit());

            let text = &self.source[start..self.pos];
            return match text.parse::<f64>() {
                Ok(value) => TokenValue::Float(value),
                Err(_) => TokenValue::error(text, LexicalIssue::MalformedNumber),
            };
        }

        let text = &self.source[start..self.pos];
        match text.parse::<i64>() {
            Ok(value) => TokenValue::Integer(value),
            Err(_) => TokenValue::error(text, LexicalIssue::IntegerOverflow),
        }
    }

    fn pair(&mut self, symbol: char, double: TokenValue, single: TokenValue) -> TokenValue {
        self.advance(symbol);

        if self.at() == Some(symbol) {
            self.advance(symbol);
            double
        } else {
            single
        }
    }

    /// Swallows everything up to the next whitespace or token start.
    fn unrecognised(&mut self, start: usize) -> TokenValue {
        if let Some(c) = self.at() {
            self.advance(c);
        }
        self.eat_while(|c| !c.is_whitespace() && !is_token_start(c));

        TokenValue::error(&self.source[start..self.pos], LexicalIssue::UnrecognisedSymbol)
    }
}

impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_token_start(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit() || matches!(c, '-' | '&' | '|')
}

/// Scans `source` to the end, returning every token and the final symbol table.
pub fn tokenize(source: &str) -> (Vec<Token>, SymbolTable) {
    let mut scanner = Scanner::new(source);
    let mut tokens = vec![];

    while let Some(token) = scanner.next_token() {
        tokens.push(token);
    }

    (tokens, scanner.into_symbols())
}
