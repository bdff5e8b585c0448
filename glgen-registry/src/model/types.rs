/// A type definition from the registry's `<types>` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    /// Type name, e.g. `GLenum`.
    pub name: String,
    /// Raw C declaration text, e.g. `typedef unsigned int GLenum;`.
    pub definition: String,
    /// Another type this definition depends on.
    pub requires: Option<String>,
    pub comment: Option<String>,
    /// API the definition is restricted to, when the registry tags one.
    pub api: Option<String>,
}

impl Type {
    pub fn new(name: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definition: definition.into(),
            requires: None,
            comment: None,
            api: None,
        }
    }

    pub fn requires(mut self, requires: impl Into<String>) -> Self {
        self.requires = Some(requires.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn api(mut self, api: impl Into<String>) -> Self {
        self.api = Some(api.into());
        self
    }
}
