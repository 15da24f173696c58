//! Menu-driven session that steps a scanner one token at a time.
//!
//! This sits outside the scanner: the only thing it adds is restarting from
//! the top of the text (with a fresh symbol table) once the end is reached.

use std::io::{self, Write};

use tracing::info;

use crate::{lexer::scanner::Scanner, source::Source};

pub const MENU: &str = "\nMenu:\n1. Call lex()\n2. Show symbol table\n3. Exit";
pub const PROMPT: &str = "Enter your choice (1-3): ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    NextToken,
    ShowSymbols,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::NextToken),
            "2" => Some(MenuChoice::ShowSymbols),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct Session {
    source: Source,
    scanner: Scanner,
}

impl Session {
    pub fn new(source: Source) -> Self {
        let scanner = source.scanner();
        Session { source, scanner }
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Runs one menu selection, writing its output to `out`.
    pub fn handle(&mut self, input: &str, out: &mut impl Write) -> io::Result<Flow> {
        let Some(choice) = MenuChoice::parse(input) else {
            writeln!(out, "Invalid choice. Please enter 1, 2, or 3.")?;
            return Ok(Flow::Continue);
        };

        match choice {
            MenuChoice::NextToken => match self.scanner.next_token() {
                Some(token) => writeln!(out, "{}", token)?,
                None => {
                    writeln!(out, "End of file reached.")?;
                    info!(source = self.source.name(), "restarting scan");
                    self.scanner = self.source.scanner();
                }
            },
            MenuChoice::ShowSymbols => {
                writeln!(out, "\nSymbol Table:")?;
                write!(out, "{}", self.scanner.symbols())?;
                writeln!(out)?;
            }
            MenuChoice::Exit => {
                writeln!(out, "Exiting program.")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }
}
