//! Core operations.
//!
//! Business logic for glgen commands, separated from argument parsing and
//! output rendering.

pub mod check;
pub mod generate;
pub mod info;

use std::path::{Path, PathBuf};

pub use check::check;
pub use generate::generate;
use glgen_registry::{KnownVersions, Registry, Repository, Result, Selection};
pub use info::info;

/// A fully resolved target: flags merged over `glgen.toml`.
#[derive(Debug)]
pub struct Target {
    pub registry: PathBuf,
    pub api: String,
    pub version: String,
    pub profile: Option<String>,
    pub known: KnownVersions,
}

impl Target {
    /// Validate api, version and profile against the known versions.
    pub fn selection(&self) -> Result<Selection> {
        Selection::resolve(
            &self.known,
            &self.api,
            &self.version,
            self.profile.as_deref(),
        )
    }
}

/// Load and index a registry file.
pub fn load_repository(path: &Path) -> Result<Repository> {
    tracing::info!(path = %path.display(), "loading registry");
    Ok(Repository::new(Registry::from_file(path)?))
}
