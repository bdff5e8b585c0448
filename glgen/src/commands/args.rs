use std::path::PathBuf;

use clap::Args;
use eyre::{Result, eyre};

use crate::{config::Config, ops::Target};

const DEFAULT_API: &str = "gl";

/// Where the registry lives and which api/version/profile to consolidate.
#[derive(Args, Debug, Default)]
pub struct SelectionArgs {
    /// Path to glgen.toml (defaults to ./glgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the XML registry (gl.xml)
    #[arg(short, long)]
    pub registry: Option<PathBuf>,

    /// Api to generate for: gl, gles1, gles2 or glsc2
    #[arg(long)]
    pub api: Option<String>,

    /// Target version, e.g. 3.3
    #[arg(long = "version", value_name = "VERSION")]
    pub target_version: Option<String>,

    /// Profile filter for require/remove blocks, e.g. core or compatibility
    #[arg(long)]
    pub profile: Option<String>,
}

impl SelectionArgs {
    /// Load the config file and merge it with the flags.
    pub fn load(&self) -> Result<(Config, Target)> {
        let config = Config::discover(self.config.as_deref())?;
        let target = self.target(&config)?;
        Ok((config, target))
    }

    /// Flags take precedence over the config file.
    pub fn target(&self, config: &Config) -> Result<Target> {
        let version = self
            .target_version
            .clone()
            .or_else(|| config.target.version.clone())
            .ok_or_else(|| eyre!("No target version; pass --version or set [target] version"))?;

        Ok(Target {
            registry: config.registry_path(self.registry.as_deref()),
            api: self
                .api
                .clone()
                .or_else(|| config.target.api.clone())
                .unwrap_or_else(|| DEFAULT_API.to_string()),
            version,
            profile: self.profile.clone().or_else(|| config.target.profile.clone()),
            known: config.known_versions(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_REGISTRY;

    fn config() -> Config {
        Config::parse(
            "[registry]\npath = \"registry/gl.xml\"\n[target]\napi = \"gles2\"\nversion = \"2.0\"\n",
        )
        .unwrap()
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let target = SelectionArgs::default().target(&config()).unwrap();
        assert_eq!(target.registry, PathBuf::from("registry/gl.xml"));
        assert_eq!(target.api, "gles2");
        assert_eq!(target.version, "2.0");
        assert_eq!(target.profile, None);
    }

    #[test]
    fn test_flags_override_config() {
        let args = SelectionArgs {
            api: Some("gl".to_string()),
            target_version: Some("3.3".to_string()),
            profile: Some("core".to_string()),
            ..Default::default()
        };
        let target = args.target(&config()).unwrap();
        assert_eq!(target.api, "gl");
        assert_eq!(target.version, "3.3");
        assert_eq!(target.profile.as_deref(), Some("core"));
        assert_eq!(target.registry, PathBuf::from("registry/gl.xml"));
    }

    #[test]
    fn test_version_is_required() {
        let err = SelectionArgs::default()
            .target(&Config::default())
            .unwrap_err();
        assert!(err.to_string().contains("--version"));
    }

    #[test]
    fn test_defaults() {
        let args = SelectionArgs {
            target_version: Some("1.0".to_string()),
            ..Default::default()
        };
        let target = args.target(&Config::default()).unwrap();
        assert_eq!(target.api, "gl");
        assert_eq!(target.registry, PathBuf::from(DEFAULT_REGISTRY));
    }
}
