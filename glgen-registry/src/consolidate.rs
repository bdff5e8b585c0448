//! Feature consolidation: which commands, enums and types exist for a
//! given API at a given version.

use glgen_core::ApiVersion;

use crate::{
    Error, IdentifierKind, Repository, Result,
    model::{Feature, NameSet},
};

/// The names that must appear in the generated bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsolidatedRequire {
    pub commands: NameSet,
    pub enums: NameSet,
    /// Types named by require blocks. Types are never removed.
    pub types: NameSet,
}

impl ConsolidatedRequire {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.enums.is_empty() && self.types.is_empty()
    }
}

impl Repository {
    /// Union every require block of `api` up to `version`, then erase every
    /// remove block over the same features.
    ///
    /// Profile tags are ignored: all blocks apply.
    pub fn consolidate(&self, api: &str, version: &ApiVersion) -> Result<ConsolidatedRequire> {
        self.consolidate_with(api, version, |_| true)
    }

    /// Like [`Repository::consolidate`] but skips blocks tagged with a
    /// profile other than `profile`. Untagged blocks always apply.
    pub fn consolidate_profile(
        &self,
        api: &str,
        version: &ApiVersion,
        profile: &str,
    ) -> Result<ConsolidatedRequire> {
        self.consolidate_with(api, version, |tag| tag.is_none_or(|t| t == profile))
    }

    fn consolidate_with(
        &self,
        api: &str,
        version: &ApiVersion,
        applies: impl Fn(Option<&str>) -> bool,
    ) -> Result<ConsolidatedRequire> {
        let declared = self.features_for_api(api);
        if declared.is_empty() {
            let known: Vec<&str> = self.apis().collect();
            return Err(Error::unknown(
                IdentifierKind::Api,
                api,
                format!("apis declared by the registry: {}", known.join(", ")),
            ));
        }

        let features: Vec<&Feature> = declared
            .into_iter()
            .filter(|f| f.number <= *version)
            .collect();

        let mut consolidated = ConsolidatedRequire::default();

        for feature in &features {
            tracing::debug!(feature = %feature.name, number = %feature.number, "applying requires");
            for require in feature.requires.iter().filter(|r| applies(r.profile.as_deref())) {
                consolidated.commands.extend_from(&require.commands);
                consolidated.enums.extend_from(&require.enums);
                consolidated.types.extend_from(&require.types);
            }
        }

        for feature in &features {
            for remove in feature.removes.iter().filter(|r| applies(r.profile.as_deref())) {
                for name in &remove.commands {
                    tracing::trace!(feature = %feature.name, command = name, "removing");
                    consolidated.commands.erase(name).map_err(|_| {
                        Error::unknown(
                            IdentifierKind::RemovedCommand,
                            name,
                            format!("{} removes a command no earlier feature required", feature.name),
                        )
                    })?;
                }
                for name in &remove.enums {
                    tracing::trace!(feature = %feature.name, constant = name, "removing");
                    consolidated.enums.erase(name).map_err(|_| {
                        Error::unknown(
                            IdentifierKind::RemovedEnum,
                            name,
                            format!("{} removes an enum no earlier feature required", feature.name),
                        )
                    })?;
                }
            }
        }

        tracing::debug!(
            api,
            version = %version,
            features = features.len(),
            commands = consolidated.commands.len(),
            enums = consolidated.enums.len(),
            "consolidated"
        );
        Ok(consolidated)
    }
}
