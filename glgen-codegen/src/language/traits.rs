//! Language-agnostic code generation traits.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use eyre::Result;
use glgen_core::{GeneratedFile, WriteResult};
use serde::Deserialize;

/// Trait for language-specific emitters.
///
/// Implement this trait to add support for generating bindings in a new language.
pub trait LanguageCodegen {
    /// Output language
    fn language(&self) -> Language;

    /// Render every generated file without writing to disk
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files that were (re)written
    pub written: Vec<PathBuf>,
    /// Files whose content was already up to date
    pub unchanged: Vec<PathBuf>,
}

impl GenerateResult {
    /// Write `file` under `base` and record the outcome.
    pub fn write(&mut self, file: &dyn GeneratedFile, base: &Path) -> Result<()> {
        let path = file.path(base);
        match file.write(base)? {
            WriteResult::Written => self.written.push(path),
            WriteResult::Unchanged => self.unchanged.push(path),
        }
        Ok(())
    }
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

impl PreviewFile {
    /// Preview a generated file rooted at the output directory, with the
    /// same header it would be written with.
    pub fn of(file: &dyn GeneratedFile) -> Self {
        let content = match file.rules().header {
            Some(header) => format!("{}\n{}", header, file.render()),
            None => file.render(),
        };
        Self {
            path: file.path(Path::new("")).display().to_string(),
            content,
        }
    }
}

/// Output language for generated bindings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    C,
    #[serde(alias = "c++")]
    Cpp,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cpp => "cpp",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "c" => Ok(Self::C),
            "cpp" | "c++" | "cxx" => Ok(Self::Cpp),
            other => Err(format!("unknown language '{}', expected 'c' or 'cpp'", other)),
        }
    }
}
