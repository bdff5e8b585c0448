//! Resolution from a consolidated name set to the groups and types the
//! emitters need.

use indexmap::{IndexMap, IndexSet};

use crate::{ConsolidatedRequire, Repository, Result, model::Type};

impl Repository {
    /// Groups referenced by parameters of the consolidated commands, in
    /// first-seen order.
    ///
    /// Groups with no member enums are skipped. A consolidated command name
    /// the registry does not declare is a `NotFound` error.
    pub fn referenced_groups(&self, consolidated: &ConsolidatedRequire) -> Result<Vec<&str>> {
        let mut groups = IndexSet::new();
        for name in &consolidated.commands {
            let command = self.command_by_name(name)?;
            for group in command.params.iter().filter_map(|p| p.group_name()) {
                if self.has_group(group) {
                    groups.insert(group);
                }
            }
        }
        Ok(groups.into_iter().collect())
    }

    /// Type definitions needed by the consolidated set, dependencies first.
    ///
    /// Starts from the explicitly required types and every parameter or
    /// return base type that names a registry type, then follows `requires`.
    pub fn referenced_types(&self, consolidated: &ConsolidatedRequire) -> Result<Vec<&Type>> {
        let mut seeds: Vec<&Type> = Vec::new();
        for name in &consolidated.types {
            seeds.push(self.type_by_name(name)?);
        }

        for name in &consolidated.commands {
            let command = self.command_by_name(name)?;
            let bases = command
                .return_base
                .iter()
                .chain(command.params.iter().map(|p| &p.ty));
            for base in bases {
                if let Ok(ty) = self.type_by_name(base) {
                    seeds.push(ty);
                }
            }
        }

        let mut ordered = IndexMap::new();
        let mut visiting = Vec::new();
        for ty in seeds {
            self.visit_type(ty, &mut ordered, &mut visiting);
        }
        Ok(ordered.into_values().collect())
    }

    fn visit_type<'a>(
        &'a self,
        ty: &'a Type,
        ordered: &mut IndexMap<&'a str, &'a Type>,
        visiting: &mut Vec<&'a str>,
    ) {
        if ordered.contains_key(ty.name.as_str()) || visiting.contains(&ty.name.as_str()) {
            return;
        }

        visiting.push(&ty.name);
        if let Some(dependency) = &ty.requires {
            match self.type_by_name(dependency) {
                Ok(dep) => self.visit_type(dep, ordered, visiting),
                Err(_) => {
                    tracing::debug!(ty = %ty.name, requires = %dependency, "dependency is not a registry type")
                }
            }
        }
        visiting.pop();

        ordered.insert(&ty.name, ty);
    }
}

#[cfg(test)]
mod tests {
    use glgen_core::ApiVersion;

    use super::*;
    use crate::{
        Error, LookupKind,
        model::{Command, Enum, EnumCollection, Feature, NameSet, Parameter, Registry, Require},
    };

    fn consolidated(commands: &[&str]) -> ConsolidatedRequire {
        ConsolidatedRequire {
            commands: commands.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn repository() -> Repository {
        Repository::new(
            Registry::new()
                .with_type(Type::new("khrplatform", "#include <KHR/khrplatform.h>"))
                .with_type(
                    Type::new("GLuint", "typedef unsigned int GLuint;").requires("khrplatform"),
                )
                .with_type(Type::new("GLenum", "typedef unsigned int GLenum;"))
                .with_type(Type::new("GLsync", "typedef struct __GLsync *GLsync;"))
                .with_enums(
                    EnumCollection::new("GL")
                        .entry(Enum::new("GL_TEXTURE_2D", "0x0DE1").groups("TextureTarget"))
                        .entry(Enum::new("GL_RGBA", "0x1908").groups("PixelFormat")),
                )
                .with_command(
                    Command::new("glBindTexture", "GL")
                        .param(Parameter::new("target", "GLenum").group("TextureTarget"))
                        .param(Parameter::new("texture", "GLuint").group("Texture")),
                )
                .with_command(
                    Command::new("glTexImage2D", "GL")
                        .param(Parameter::new("target", "GLenum").group("TextureTarget"))
                        .param(Parameter::new("format", "GLenum").group("PixelFormat"))
                        .param(Parameter::new("pixels", "void").constant().pointer()),
                )
                .with_feature(
                    Feature::new("gl", "GL_VERSION_1_0", ApiVersion::new(1, 0))
                        .require(Require::new().commands(["glBindTexture"])),
                ),
        )
    }

    #[test]
    fn test_groups_in_first_seen_order() {
        let repo = repository();
        let groups = repo
            .referenced_groups(&consolidated(&["glTexImage2D", "glBindTexture"]))
            .unwrap();
        assert_eq!(groups, ["TextureTarget", "PixelFormat"]);
    }

    #[test]
    fn test_groups_without_enums_are_skipped() {
        let repo = repository();
        let groups = repo
            .referenced_groups(&consolidated(&["glBindTexture"]))
            .unwrap();
        assert_eq!(groups, ["TextureTarget"]);
    }

    #[test]
    fn test_dangling_command_is_not_found() {
        let repo = repository();
        let err = repo
            .referenced_groups(&consolidated(&["glMissing"]))
            .unwrap_err();
        assert!(matches!(
            *err,
            Error::NotFound {
                kind: LookupKind::Command,
                ..
            }
        ));
    }

    #[test]
    fn test_types_dependencies_first() {
        let repo = repository();
        let types: Vec<_> = repo
            .referenced_types(&consolidated(&["glBindTexture"]))
            .unwrap()
            .into_iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(types, ["GLenum", "khrplatform", "GLuint"]);
    }

    #[test]
    fn test_required_types_come_first() {
        let repo = repository();
        let mut set = consolidated(&["glTexImage2D"]);
        set.types = ["GLsync"].into_iter().collect::<NameSet>();
        let types: Vec<_> = repo
            .referenced_types(&set)
            .unwrap()
            .into_iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(types, ["GLsync", "GLenum"]);
    }

    #[test]
    fn test_unknown_required_type_is_not_found() {
        let repo = repository();
        let mut set = ConsolidatedRequire::default();
        set.types.insert("GLmissing");
        assert!(repo.referenced_types(&set).is_err());
    }
}
