//! `glgen.toml` project configuration.
//!
//! Every value here can be overridden on the command line; see
//! [`SelectionArgs`](crate::commands::SelectionArgs).

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use glgen_codegen::Language;
use glgen_core::ApiVersion;
use glgen_registry::KnownVersions;
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "glgen.toml";

/// Registry path used when neither `--registry` nor `[registry] path` is set.
pub const DEFAULT_REGISTRY: &str = "OpenGL-Registry/xml/gl.xml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub registry: RegistryConfig,
    pub target: TargetConfig,
    pub output: OutputConfig,
    /// Replaces the built-in version list for each named api.
    pub versions: BTreeMap<String, Vec<ApiVersion>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Path to `gl.xml`
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TargetConfig {
    pub api: Option<String>,
    pub version: Option<String>,
    pub profile: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
    pub language: Option<Language>,
    pub prefix: Option<String>,
}

impl Config {
    /// Parse a config file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).wrap_err_with(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load an explicitly requested config, or `glgen.toml` if one exists.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::open(path),
            None if Path::new(DEFAULT_CONFIG).is_file() => Self::open(DEFAULT_CONFIG),
            None => {
                tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG);
                Ok(Self::default())
            }
        }
    }

    /// The `--registry` flag, else `[registry] path`, else the default.
    pub fn registry_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.registry.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REGISTRY))
    }

    /// Built-in versions with the `[versions]` overrides applied.
    pub fn known_versions(&self) -> KnownVersions {
        let mut known = KnownVersions::default();
        for (api, versions) in &self.versions {
            known.set(api.clone(), versions.clone());
        }
        known
    }
}
