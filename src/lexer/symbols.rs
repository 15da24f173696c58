use std::{collections::HashMap, fmt::Display};

use tracing::debug;

/// Append-only registry of identifier spellings.
///
/// Indices are handed out in first-occurrence order starting at 0 and never
/// change. `names` keeps that order for dumping, `lookup` answers membership
/// in constant time.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    names: Vec<String>,
    lookup: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index of `name`, appending it first if it is new.
    pub fn intern(&mut self, name: &str) -> usize {
        if let Some(&index) = self.lookup.get(name) {
            return index;
        }

        let index = self.names.len();
        self.names.push(name.to_string());
        self.lookup.insert(name.to_string(), index);
        debug!(index, name, "interned new symbol");
        index
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.lookup.get(name).copied()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }

    /// `(index, name)` pairs in insertion order.
    pub fn dump(&self) -> Vec<(usize, String)> {
        self.iter().map(|(index, name)| (index, name.to_string())).collect()
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, name) in self.iter() {
            writeln!(f, "{}: {}", index, name)?;
        }
        Ok(())
    }
}
