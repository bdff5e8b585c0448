//! The data handed to an emitter.

use eyre::Result;
use glgen_registry::{Command, ConsolidatedRequire, Enum, Repository, Selection, Type};

/// Default name used for the include directory and loader symbols.
pub const DEFAULT_PREFIX: &str = "glgen";

/// An enum group referenced by the consolidated commands.
#[derive(Debug, Clone)]
pub struct ReferencedGroup<'a> {
    pub name: &'a str,
    pub enums: Vec<&'a Enum>,
    pub bitmask: bool,
}

/// Everything an emitter needs, passed explicitly: the indexed registry,
/// the validated selection, and the names consolidated for it.
#[derive(Debug)]
pub struct EmitContext<'a> {
    repository: &'a Repository,
    selection: Selection,
    consolidated: ConsolidatedRequire,
    prefix: String,
}

impl<'a> EmitContext<'a> {
    /// Consolidate `selection` against `repository`.
    pub fn new(repository: &'a Repository, selection: Selection) -> Result<Self> {
        let consolidated = selection.consolidate(repository)?;
        Ok(Self::from_parts(repository, selection, consolidated))
    }

    /// Build a context from an already consolidated set.
    pub fn from_parts(
        repository: &'a Repository,
        selection: Selection,
        consolidated: ConsolidatedRequire,
    ) -> Self {
        Self {
            repository,
            selection,
            consolidated,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Lowercase prefix for paths and loader functions, e.g. `oglhpp`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn repository(&self) -> &'a Repository {
        self.repository
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn consolidated(&self) -> &ConsolidatedRequire {
        &self.consolidated
    }

    /// `gl 3.3 core`, used in section comments.
    pub fn label(&self) -> String {
        let selection = &self.selection;
        match selection.profile() {
            Some(profile) => format!("{} {} {}", selection.api(), selection.version(), profile),
            None => format!("{} {}", selection.api(), selection.version()),
        }
    }

    /// Consolidated commands in consolidation order.
    pub fn commands(&self) -> Result<Vec<&'a Command>> {
        let mut commands = Vec::with_capacity(self.consolidated.commands.len());
        for name in &self.consolidated.commands {
            commands.push(self.repository.command_by_name(name)?);
        }
        Ok(commands)
    }

    /// Consolidated enum constants in consolidation order.
    pub fn enums(&self) -> Result<Vec<&'a Enum>> {
        let mut enums = Vec::with_capacity(self.consolidated.enums.len());
        for name in &self.consolidated.enums {
            enums.push(self.repository.enum_by_name(name)?);
        }
        Ok(enums)
    }

    /// Type definitions to print, dependencies first.
    pub fn types(&self) -> Result<Vec<&'a Type>> {
        Ok(self.repository.referenced_types(&self.consolidated)?)
    }

    /// Groups referenced by consolidated command parameters, with every
    /// member enum the registry declares for them.
    pub fn groups(&self) -> Result<Vec<ReferencedGroup<'a>>> {
        let names = self.repository.referenced_groups(&self.consolidated)?;
        names
            .into_iter()
            .map(|name| -> Result<ReferencedGroup<'a>> {
                Ok(ReferencedGroup {
                    name,
                    enums: self.repository.group(name)?,
                    bitmask: self.repository.is_bitmask_group(name),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use glgen_core::ApiVersion;
    use glgen_registry::{EnumCollection, Feature, KnownVersions, Parameter, Registry, Require};

    use super::*;

    fn repository() -> Repository {
        Repository::new(
            Registry::new()
                .with_type(Type::new("GLbitfield", "typedef unsigned int GLbitfield;"))
                .with_enums(
                    EnumCollection::new("GL")
                        .kind("bitmask")
                        .entry(Enum::new("GL_COLOR_BUFFER_BIT", "0x4000").groups("ClearBufferMask")),
                )
                .with_command(
                    Command::new("glClear", "GL")
                        .param(Parameter::new("mask", "GLbitfield").group("ClearBufferMask")),
                )
                .with_feature(
                    Feature::new("gl", "GL_VERSION_1_0", ApiVersion::new(1, 0)).require(
                        Require::new()
                            .commands(["glClear"])
                            .enums(["GL_COLOR_BUFFER_BIT"]),
                    ),
                ),
        )
    }

    #[test]
    fn test_context_resolves_names() {
        let repo = repository();
        let selection = Selection::resolve(&KnownVersions::default(), "gl", "1.0", None).unwrap();
        let ctx = EmitContext::new(&repo, selection).unwrap().with_prefix("oglhpp");

        assert_eq!(ctx.prefix(), "oglhpp");
        assert_eq!(ctx.label(), "gl 1.0");
        assert_eq!(ctx.commands().unwrap()[0].name, "glClear");
        assert_eq!(ctx.enums().unwrap()[0].value, "0x4000");
        assert_eq!(ctx.types().unwrap()[0].name, "GLbitfield");

        let groups = ctx.groups().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "ClearBufferMask");
        assert!(groups[0].bitmask);
    }

    #[test]
    fn test_dangling_enum_is_an_error() {
        let repo = repository();
        let selection = Selection::resolve(&KnownVersions::default(), "gl", "1.0", None).unwrap();
        let mut consolidated = ConsolidatedRequire::default();
        consolidated.enums.insert("GL_MISSING");
        let ctx = EmitContext::from_parts(&repo, selection, consolidated);

        let err = ctx.enums().unwrap_err();
        assert!(err.to_string().contains("GL_MISSING"));
    }
}
