//! Scoped enumerations for registry enum groups.

use glgen_codegen::{CodeFragment, ReferencedGroup, Renderable};

use crate::naming::CPP_NAMING;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumerator {
    pub name: String,
    pub value: String,
}

/// `enum class <name> : <base> { ... };`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumClass {
    pub name: String,
    pub base: String,
    pub enumerators: Vec<Enumerator>,
}

impl EnumClass {
    pub fn new(name: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: base.into(),
            enumerators: Vec::new(),
        }
    }

    pub fn enumerator(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.enumerators.push(Enumerator {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// Underlying type for a group's enum class.
pub fn base_type(group: &str, bitmask: bool) -> &'static str {
    if group == "Boolean" {
        "GLboolean"
    } else if bitmask {
        "GLbitfield"
    } else {
        "GLenum"
    }
}

impl From<&ReferencedGroup<'_>> for EnumClass {
    fn from(group: &ReferencedGroup<'_>) -> Self {
        group.enums.iter().fold(
            Self::new(group.name, base_type(group.name, group.bitmask)),
            |class, entry| {
                class.enumerator(CPP_NAMING.enumerator_name(&entry.name), &entry.value)
            },
        )
    }
}

impl Renderable for EnumClass {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .enumerators
            .iter()
            .map(|e| CodeFragment::line(format!("{} = {},", e.name, e.value)))
            .collect();
        vec![CodeFragment::block(
            format!("enum class {} : {} {{", self.name, self.base),
            body,
            Some("};".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use glgen_codegen::CodeBuilder;
    use glgen_registry::Enum;

    use super::*;

    #[test]
    fn test_base_types() {
        assert_eq!(base_type("Boolean", false), "GLboolean");
        assert_eq!(base_type("ClearBufferMask", true), "GLbitfield");
        assert_eq!(base_type("TextureTarget", false), "GLenum");
    }

    #[test]
    fn test_from_group() {
        let depth = Enum::new("GL_DEPTH_BUFFER_BIT", "0x00000100");
        let color = Enum::new("GL_COLOR_BUFFER_BIT", "0x00004000");
        let group = ReferencedGroup {
            name: "ClearBufferMask",
            enums: vec![&depth, &color],
            bitmask: true,
        };

        let mut builder = CodeBuilder::c();
        builder.emit(&EnumClass::from(&group));
        insta::assert_snapshot!(builder.build(), @r"
        enum class ClearBufferMask : GLbitfield {
            eDEPTH_BUFFER_BIT = 0x00000100,
            eCOLOR_BUFFER_BIT = 0x00004000,
        };
        ");
    }
}
