use glgen_core::ApiVersion;

use super::NameSet;

/// Names a feature makes available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Require {
    pub enums: NameSet,
    pub commands: NameSet,
    pub types: NameSet,
    /// Profile this block is restricted to (`core`, `compatibility`).
    pub profile: Option<String>,
    pub comment: Option<String>,
}

impl Require {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enums<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        names.into_iter().for_each(|n| {
            self.enums.insert(n);
        });
        self
    }

    pub fn commands<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        names.into_iter().for_each(|n| {
            self.commands.insert(n);
        });
        self
    }

    pub fn types<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        names.into_iter().for_each(|n| {
            self.types.insert(n);
        });
        self
    }

    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }
}

/// Names a feature retires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Remove {
    pub enums: NameSet,
    pub commands: NameSet,
    pub profile: Option<String>,
    pub comment: Option<String>,
}

impl Remove {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enums<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        names.into_iter().for_each(|n| {
            self.enums.insert(n);
        });
        self
    }

    pub fn commands<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        names.into_iter().for_each(|n| {
            self.commands.insert(n);
        });
        self
    }

    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }
}

/// Everything added and retired by one API version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// API family, e.g. `gl` or `gles2`.
    pub api: String,
    /// Feature name, e.g. `GL_VERSION_3_3`.
    pub name: String,
    pub number: ApiVersion,
    pub requires: Vec<Require>,
    pub removes: Vec<Remove>,
}

impl Feature {
    pub fn new(api: impl Into<String>, name: impl Into<String>, number: ApiVersion) -> Self {
        Self {
            api: api.into(),
            name: name.into(),
            number,
            requires: Vec::new(),
            removes: Vec::new(),
        }
    }

    pub fn require(mut self, require: Require) -> Self {
        self.requires.push(require);
        self
    }

    pub fn remove(mut self, remove: Remove) -> Self {
        self.removes.push(remove);
        self
    }
}
