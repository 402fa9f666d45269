//! Import statements.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use pyper_codegen::{CodeElement, SourceWriter};
use pyper_core::Result;

/// Tracks imports and deduplicates them.
///
/// Modules keep insertion order; symbols imported from a module are sorted
/// for deterministic output. Plain `import` lines are emitted before
/// `from ... import` lines.
///
/// # Example
///
/// ```
/// use pyper_codegen_python::Imports;
///
/// let mut imports = Imports::new();
/// imports.import("os");
/// imports.from_import("typing", "Optional");
/// imports.from_import("typing", "Any");
///
/// assert_eq!(imports.to_string(), "import os\nfrom typing import Any, Optional\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Imports {
    /// Module -> alias
    modules: IndexMap<String, Option<String>>,
    /// Module -> symbols
    symbols: IndexMap<String, BTreeSet<String>>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    /// `import module`
    pub fn import(&mut self, module: &str) {
        self.modules.entry(module.to_string()).or_default();
    }

    /// `import module as alias`. A later alias for the same module wins.
    pub fn import_as(&mut self, module: &str, alias: &str) {
        self.modules
            .insert(module.to_string(), Some(alias.to_string()));
    }

    /// `from module import symbol`
    pub fn from_import(&mut self, module: &str, symbol: &str) {
        self.symbols
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Merge another set of imports into this one.
    pub fn merge(&mut self, other: &Imports) {
        for (module, alias) in &other.modules {
            match alias {
                Some(alias) => self.import_as(module, alias),
                None => self.import(module),
            }
        }
        for (module, symbols) in &other.symbols {
            let entry = self.symbols.entry(module.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    pub fn has_module(&self, module: &str) -> bool {
        self.modules.contains_key(module) || self.symbols.contains_key(module)
    }

    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.symbols
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.symbols.is_empty()
    }

    /// Number of emitted lines.
    pub fn len(&self) -> usize {
        self.modules.len() + self.symbols.len()
    }
}

impl std::fmt::Display for Imports {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::fmt_element(self, f)
    }
}

impl CodeElement for Imports {
    fn emit(&self, writer: &mut SourceWriter<'_>) -> Result<()> {
        for (module, alias) in &self.modules {
            match alias {
                Some(alias) => write!(writer, "import {} as {}", module, alias)?,
                None => write!(writer, "import {}", module)?,
            };
            writer.line_feed()?;
        }
        for (module, symbols) in &self.symbols {
            let symbols: Vec<&str> = symbols.iter().map(String::as_str).collect();
            write!(writer, "from {} import {}", module, symbols.join(", "))?;
            writer.line_feed()?;
        }
        Ok(())
    }
}
