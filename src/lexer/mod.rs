//! Lexical analysis module.
//!
//! This module contains the hand-written scanner that turns text into
//! classified tokens, one at a time. It handles:
//!
//! - Identifiers, interned into a per-scanner symbol table
//! - Integer, float and negative number literals
//! - `&&` / `||` and their single-character bitwise forms
//! - Malformed input, reported as error tokens without stopping the scan

pub mod scanner;
pub mod symbols;
pub mod tokens;
