use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Banner placed at the top of every generated C/C++ artifact.
pub const GENERATED_HEADER: &str = "/* Generated by glgen. DO NOT EDIT. */";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        write_with_rules(&path, &self.render(), &self.rules())
    }
}

fn write_with_rules(path: &Path, content: &str, rules: &FileRules) -> Result<WriteResult> {
    let content = match rules.header {
        Some(header) => format!("{}\n{}", header, content),
        None => content.to_string(),
    };

    match rules.overwrite {
        Overwrite::Always => {
            write_file(path, &content)?;
            Ok(WriteResult::Written)
        }
        Overwrite::IfChanged => {
            // Leave identical files untouched so build systems don't rebuild.
            if std::fs::read_to_string(path).is_ok_and(|existing| existing == content) {
                tracing::debug!(path = %path.display(), "unchanged, skipping");
                Ok(WriteResult::Unchanged)
            } else {
                write_file(path, &content)?;
                Ok(WriteResult::Written)
            }
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the rendered content
    Unchanged,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone)]
pub struct FileRules {
    pub overwrite: Overwrite,
    pub header: Option<&'static str>,
}

impl FileRules {
    pub fn if_changed() -> Self {
        Self {
            overwrite: Overwrite::IfChanged,
            header: None,
        }
    }

    pub fn with_header(mut self, header: &'static str) -> Self {
        self.header = Some(header);
        self
    }
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only write when the content differs from what is on disk
    IfChanged,
}

impl Default for FileRules {
    fn default() -> Self {
        Self {
            overwrite: Overwrite::Always,
            header: None,
        }
    }
}
