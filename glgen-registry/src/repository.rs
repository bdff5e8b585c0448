//! Read-only indexes over a loaded [`Registry`].

use indexmap::{IndexMap, IndexSet};

use crate::{
    Error, LookupKind, Result,
    model::{Command, Enum, EnumCollection, Feature, Registry, Type},
};

/// Position of an enum: (collection index, entry index).
type EnumSlot = (usize, usize);

/// A registry plus the lookup tables built from it.
///
/// All indexes are computed once in [`Repository::new`] and never change, so a
/// repository can serve any number of consolidation calls.
#[derive(Debug)]
pub struct Repository {
    registry: Registry,
    commands: IndexMap<String, usize>,
    enums: IndexMap<String, EnumSlot>,
    types: IndexMap<String, usize>,
    /// Group name to member enums, keyed by enum name so each appears once.
    groups: IndexMap<String, IndexMap<String, EnumSlot>>,
    bitmask_groups: IndexSet<String>,
    classes: IndexMap<String, Vec<usize>>,
    features: IndexMap<String, Vec<usize>>,
}

impl Repository {
    pub fn new(registry: Registry) -> Self {
        let mut commands = IndexMap::new();
        for (i, command) in registry.commands.iter().enumerate() {
            if commands.contains_key(&command.name) {
                tracing::warn!(command = %command.name, "duplicate command, keeping the first");
                continue;
            }
            commands.insert(command.name.clone(), i);
        }

        let mut types = IndexMap::new();
        for (i, ty) in registry.types.iter().enumerate() {
            if types.contains_key(&ty.name) {
                tracing::debug!(name = %ty.name, api = ?ty.api, "duplicate type, keeping the first");
                continue;
            }
            types.insert(ty.name.clone(), i);
        }

        let mut enums = IndexMap::new();
        let mut groups: IndexMap<String, IndexMap<String, EnumSlot>> = IndexMap::new();
        let mut bitmask_groups = IndexSet::new();
        for (c, collection) in registry.enum_collections.iter().enumerate() {
            if collection.is_bitmask() {
                if let Some(group) = &collection.group {
                    bitmask_groups.insert(group.clone());
                }
            }

            for (e, entry) in collection.enums.iter().enumerate() {
                if enums.contains_key(&entry.name) {
                    tracing::debug!(name = %entry.name, api = ?entry.api, "duplicate enum, keeping the first");
                } else {
                    enums.insert(entry.name.clone(), (c, e));
                }

                for group in &entry.groups {
                    if collection.is_bitmask() {
                        bitmask_groups.insert(group.clone());
                    }
                    groups
                        .entry(group.clone())
                        .or_default()
                        .entry(entry.name.clone())
                        .or_insert((c, e));
                }
            }
        }

        let mut classes: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (i, command) in registry.commands.iter().enumerate() {
            if let Some(class) = command.owning_class() {
                classes.entry(class.to_string()).or_default().push(i);
            }
        }

        let mut features: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (i, feature) in registry.features.iter().enumerate() {
            features.entry(feature.api.clone()).or_default().push(i);
        }

        tracing::debug!(
            commands = commands.len(),
            enums = enums.len(),
            groups = groups.len(),
            classes = classes.len(),
            apis = features.len(),
            "indexed registry"
        );

        Self {
            registry,
            commands,
            enums,
            types,
            groups,
            bitmask_groups,
            classes,
            features,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn types(&self) -> &[Type] {
        &self.registry.types
    }

    pub fn commands(&self) -> &[Command] {
        &self.registry.commands
    }

    pub fn enum_collections(&self) -> &[EnumCollection] {
        &self.registry.enum_collections
    }

    /// Look up a command by exact name.
    pub fn command_by_name(&self, name: &str) -> Result<&Command> {
        self.commands
            .get(name)
            .map(|&i| &self.registry.commands[i])
            .ok_or_else(|| Error::not_found(LookupKind::Command, name))
    }

    /// Look up an enum by exact name. The first declaration wins.
    pub fn enum_by_name(&self, name: &str) -> Result<&Enum> {
        self.enums
            .get(name)
            .map(|&slot| self.enum_at(slot))
            .ok_or_else(|| Error::not_found(LookupKind::Enum, name))
    }

    /// Look up a type by exact name. The first declaration wins.
    pub fn type_by_name(&self, name: &str) -> Result<&Type> {
        self.types
            .get(name)
            .map(|&i| &self.registry.types[i])
            .ok_or_else(|| Error::not_found(LookupKind::Type, name))
    }

    /// Every enum tagged with `group`, in declaration order.
    ///
    /// An unknown group yields an empty list; use [`Repository::group`] when
    /// a miss should be an error.
    pub fn enums_for_group(&self, group: &str) -> Vec<&Enum> {
        self.group(group).unwrap_or_default()
    }

    /// Strict group lookup.
    pub fn group(&self, group: &str) -> Result<Vec<&Enum>> {
        let members = self
            .groups
            .get(group)
            .ok_or_else(|| Error::not_found(LookupKind::Group, group))?;
        Ok(members.values().map(|&slot| self.enum_at(slot)).collect())
    }

    pub fn has_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    /// Whether any member of `group` is declared in a bitmask collection.
    pub fn is_bitmask_group(&self, group: &str) -> bool {
        self.bitmask_groups.contains(group)
    }

    /// Commands whose first parameter carries `class`, in declaration order.
    pub fn commands_by_owning_class(&self, class: &str) -> Vec<&Command> {
        self.classes
            .get(class)
            .map(|indices| indices.iter().map(|&i| &self.registry.commands[i]).collect())
            .unwrap_or_default()
    }

    /// Owning classes in first-seen order.
    pub fn owning_classes(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    /// Features declared for `api`, in declaration order.
    pub fn features_for_api(&self, api: &str) -> Vec<&Feature> {
        self.features
            .get(api)
            .map(|indices| indices.iter().map(|&i| &self.registry.features[i]).collect())
            .unwrap_or_default()
    }

    /// API names that declare at least one feature, in first-seen order.
    pub fn apis(&self) -> impl Iterator<Item = &str> {
        self.features.keys().map(String::as_str)
    }

    fn enum_at(&self, (collection, entry): EnumSlot) -> &Enum {
        &self.registry.enum_collections[collection].enums[entry]
    }
}

#[cfg(test)]
mod tests {
    use glgen_core::ApiVersion;

    use super::*;
    use crate::model::{Parameter, Require};

    fn repository() -> Repository {
        let registry = Registry::new()
            .with_type(Type::new("GLenum", "typedef unsigned int GLenum;"))
            .with_enums(
                EnumCollection::new("GL")
                    .entry(Enum::new("E1", "0x01").groups("G"))
                    .entry(Enum::new("E2", "0x02").groups("G,H"))
                    .entry(Enum::new("Z", "0x03")),
            )
            .with_enums(
                EnumCollection::new("GL")
                    .group("AttribMask")
                    .kind("bitmask")
                    .entry(Enum::new("GL_DEPTH_BUFFER_BIT", "0x100").groups("AttribMask")),
            )
            .with_command(
                Command::new("glBindTexture", "GL")
                    .param(Parameter::new("target", "GLenum").group("G"))
                    .param(Parameter::new("texture", "GLuint").class("texture")),
            )
            .with_command(
                Command::new("glDeleteTextures", "GL")
                    .param(Parameter::new("textures", "GLuint").class("texture")),
            )
            .with_command(Command::new("glFlush", "GL"))
            .with_feature(
                Feature::new("gl", "GL_VERSION_1_0", ApiVersion::new(1, 0))
                    .require(Require::new().commands(["glFlush"])),
            )
            .with_feature(Feature::new("gles2", "GL_ES_VERSION_2_0", ApiVersion::new(2, 0)))
            .with_feature(Feature::new("gl", "GL_VERSION_1_1", ApiVersion::new(1, 1)));
        Repository::new(registry)
    }

    #[test]
    fn test_command_by_name() {
        let repo = repository();
        assert_eq!(repo.command_by_name("glFlush").unwrap().name, "glFlush");

        let err = repo.command_by_name("glNope").unwrap_err();
        assert!(matches!(
            *err,
            Error::NotFound {
                kind: LookupKind::Command,
                ..
            }
        ));
    }

    #[test]
    fn test_group_inversion() {
        let repo = repository();
        let names = |g: &str| {
            repo.enums_for_group(g)
                .into_iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(names("G"), ["E1", "E2"]);
        assert_eq!(names("H"), ["E2"]);
        assert!(names("Missing").is_empty());
        assert!(!repo.has_group(""));
    }

    #[test]
    fn test_strict_group_lookup() {
        let repo = repository();
        assert_eq!(repo.group("H").unwrap().len(), 1);
        assert!(repo.group("Missing").is_err());
    }

    #[test]
    fn test_bitmask_group() {
        let repo = repository();
        assert!(repo.is_bitmask_group("AttribMask"));
        assert!(!repo.is_bitmask_group("G"));
    }

    #[test]
    fn test_owning_class_index() {
        let repo = repository();
        let names: Vec<_> = repo
            .commands_by_owning_class("texture")
            .into_iter()
            .map(|c| c.name.as_str())
            .collect();
        // glBindTexture tags its second parameter only
        assert_eq!(names, ["glDeleteTextures"]);
        assert!(repo.commands_by_owning_class("buffer").is_empty());
        assert_eq!(repo.owning_classes().collect::<Vec<_>>(), ["texture"]);
    }

    #[test]
    fn test_features_per_api_keep_order() {
        let repo = repository();
        let names: Vec<_> = repo
            .features_for_api("gl")
            .into_iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["GL_VERSION_1_0", "GL_VERSION_1_1"]);
        assert_eq!(repo.apis().collect::<Vec<_>>(), ["gl", "gles2"]);
        assert!(repo.features_for_api("vulkan").is_empty());
    }

    #[test]
    fn test_duplicate_enum_first_wins() {
        let registry = Registry::new()
            .with_enums(EnumCollection::new("GL").entry(Enum::new("GL_X", "1").api("gl")))
            .with_enums(EnumCollection::new("GL").entry(Enum::new("GL_X", "2").api("gles2")));
        let repo = Repository::new(registry);
        assert_eq!(repo.enum_by_name("GL_X").unwrap().value, "1");
        assert!(repo.type_by_name("GLenum").is_err());
    }
}
