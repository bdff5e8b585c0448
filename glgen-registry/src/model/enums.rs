/// A single `<enum>` constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    /// Constant name, e.g. `GL_TEXTURE_2D`.
    pub name: String,
    /// Literal value as written, e.g. `0x0DE1`.
    pub value: String,
    /// Groups this constant belongs to, unique and in declaration order.
    pub groups: Vec<String>,
    pub api: Option<String>,
    pub alias: Option<String>,
}

impl Enum {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            groups: Vec::new(),
            api: None,
            alias: None,
        }
    }

    /// Add a group membership. Empty and repeated names are ignored.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        let group = group.trim();
        if !group.is_empty() && !self.in_group(group) {
            self.groups.push(group.to_string());
        }
        self
    }

    /// Add every group of a comma-separated `group` attribute.
    pub fn groups(self, list: &str) -> Self {
        list.split(',').fold(self, |e, g| e.group(g))
    }

    pub fn api(mut self, api: impl Into<String>) -> Self {
        self.api = Some(api.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }
}

/// A namespaced `<enums>` block sharing metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCollection {
    pub namespace: String,
    pub group: Option<String>,
    /// The block's `type` attribute; `bitmask` marks flag constants.
    pub kind: Option<String>,
    pub vendor: Option<String>,
    pub enums: Vec<Enum>,
}

impl EnumCollection {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            group: None,
            kind: None,
            vendor: None,
            enums: Vec::new(),
        }
    }

    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = Some(vendor.into());
        self
    }

    pub fn entry(mut self, entry: Enum) -> Self {
        self.enums.push(entry);
        self
    }

    pub fn is_bitmask(&self) -> bool {
        self.kind.as_deref() == Some("bitmask")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_split_and_dedupe() {
        let e = Enum::new("GL_ZERO", "0").groups("BlendingFactor, StencilOp,BlendingFactor");
        assert_eq!(e.groups, ["BlendingFactor", "StencilOp"]);
    }

    #[test]
    fn test_empty_group_attribute_means_no_groups() {
        let e = Enum::new("GL_TIMEOUT_IGNORED", "0xFFFFFFFFFFFFFFFF").groups("");
        assert!(e.groups.is_empty());
        assert!(!e.in_group(""));
    }

    #[test]
    fn test_collection_bitmask() {
        let c = EnumCollection::new("GL").kind("bitmask");
        assert!(c.is_bitmask());
        assert!(!EnumCollection::new("GL").is_bitmask());
    }
}
