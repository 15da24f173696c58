//! Error types for the scanner.
//!
//! Two families live here:
//!
//! - `SourceError`, raised at the I/O boundary when the input text cannot be
//!   obtained. It prevents a scanner from being built at all.
//! - `Error`, a positioned diagnostic built from an error token. Lexical
//!   errors never abort a scan; this type only exists to report them.

pub mod errors;

#[cfg(test)]
mod tests;
