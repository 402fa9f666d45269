use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that render to a file on disk.
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file content
    fn render(&self) -> Result<String>;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let rules = self.rules();

        if rules.overwrite == Overwrite::IfMissing && path.exists() {
            tracing::debug!(path = %path.display(), "skipping existing file");
            return Ok(WriteResult::Skipped);
        }

        let content = rules.apply_header(self.render()?);
        write_file(&path, &content)?;
        Ok(WriteResult::Written)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists)
    Skipped,
}

/// A file with already rendered content.
pub struct File {
    path: PathBuf,
    content: String,
    rules: FileRules,
}

impl File {
    /// Create a new file with the given path and content (default rules: always overwrite)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            rules: FileRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: FileRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its rules
    pub fn write(&self) -> Result<WriteResult> {
        if self.rules.overwrite == Overwrite::IfMissing && self.exists() {
            return Ok(WriteResult::Skipped);
        }
        let content = self.rules.apply_header(self.content.clone());
        write_file(&self.path, &content)?;
        Ok(WriteResult::Written)
    }
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRules {
    pub overwrite: Overwrite,
    /// Line prepended to the content, followed by a blank line.
    pub header: Option<String>,
}

impl FileRules {
    fn apply_header(&self, content: String) -> String {
        match &self.header {
            Some(header) if content.is_empty() => format!("{}\n", header),
            Some(header) => format!("{}\n\n{}", header, content),
            None => content,
        }
    }
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (generated code)
    Always,
    /// Only create if file doesn't exist (stubs)
    IfMissing,
}
