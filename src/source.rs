//! Loading the text to scan.
//!
//! Scanners never touch the filesystem. Callers read the whole input up
//! front with [`Source::from_path`] and hand the text over.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use crate::{errors::errors::SourceError, lexer::scanner::Scanner};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    name: String,
    text: String,
}

impl Source {
    /// Reads `path` completely into memory.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> Result<Source, SourceError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|error| SourceError::from_io(PathBuf::from(path), error))?;

        debug!(bytes = text.len(), "loaded source");

        Ok(Source {
            name: path.display().to_string(),
            text,
        })
    }

    pub fn from_string(name: impl Into<String>, text: impl Into<String>) -> Source {
        Source {
            name: name.into(),
            text: text.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// A fresh scanner over this text, with an empty symbol table.
    pub fn scanner(&self) -> Scanner {
        Scanner::new(self.text.as_str())
    }
}
