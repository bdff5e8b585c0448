//! API selection: which api, version and profile to generate for.

use glgen_core::ApiVersion;
use indexmap::IndexMap;

use crate::{ConsolidatedRequire, Error, IdentifierKind, Repository, Result};

/// Accepted versions per API name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownVersions {
    apis: IndexMap<String, Vec<ApiVersion>>,
}

impl Default for KnownVersions {
    fn default() -> Self {
        Self::new()
            .with_api(
                "gl",
                &[
                    "1.0", "1.1", "1.2", "1.3", "1.4", "1.5", "2.0", "2.1", "3.0", "3.1", "3.2",
                    "3.3", "4.0", "4.1", "4.2", "4.3", "4.4", "4.5", "4.6",
                ],
            )
            .with_api("gles1", &["1.0"])
            .with_api("gles2", &["2.0", "3.0", "3.1", "3.2"])
            .with_api("glsc2", &["2.0"])
    }
}

impl KnownVersions {
    /// An empty table that accepts nothing.
    pub fn new() -> Self {
        Self {
            apis: IndexMap::new(),
        }
    }

    fn with_api(mut self, api: &str, versions: &[&str]) -> Self {
        let versions = versions
            .iter()
            .filter_map(|v| v.parse().ok())
            .collect();
        self.apis.insert(api.to_string(), versions);
        self
    }

    /// Replace (or add) the accepted versions of one api.
    pub fn set(&mut self, api: impl Into<String>, versions: Vec<ApiVersion>) {
        self.apis.insert(api.into(), versions);
    }

    pub fn versions(&self, api: &str) -> Option<&[ApiVersion]> {
        self.apis.get(api).map(Vec::as_slice)
    }

    pub fn apis(&self) -> impl Iterator<Item = &str> {
        self.apis.keys().map(String::as_str)
    }
}

/// A validated target: api, version and optional profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    api: String,
    version: ApiVersion,
    profile: Option<String>,
}

impl Selection {
    /// Validate `api` and `version` against the known-versions table.
    pub fn resolve(
        known: &KnownVersions,
        api: &str,
        version: &str,
        profile: Option<&str>,
    ) -> Result<Self> {
        let accepted = known.versions(api).ok_or_else(|| {
            Error::unknown(
                IdentifierKind::Api,
                api,
                format!("known apis: {}", known.apis().collect::<Vec<_>>().join(", ")),
            )
        })?;

        let listing = || {
            let versions: Vec<String> = accepted.iter().map(ToString::to_string).collect();
            format!("versions of {}: {}", api, versions.join(", "))
        };

        let parsed: ApiVersion = version
            .parse()
            .map_err(|_| Error::unknown(IdentifierKind::Version, version, listing()))?;
        if !accepted.contains(&parsed) {
            return Err(Error::unknown(IdentifierKind::Version, version, listing()));
        }

        Ok(Self {
            api: api.to_string(),
            version: parsed,
            profile: profile.filter(|p| !p.is_empty()).map(str::to_string),
        })
    }

    pub fn api(&self) -> &str {
        &self.api
    }

    pub fn version(&self) -> &ApiVersion {
        &self.version
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Consolidate this selection, filtering by profile when one is set.
    pub fn consolidate(&self, repository: &Repository) -> Result<ConsolidatedRequire> {
        match &self.profile {
            Some(profile) => repository.consolidate_profile(&self.api, &self.version, profile),
            None => repository.consolidate(&self.api, &self.version),
        }
    }
}
