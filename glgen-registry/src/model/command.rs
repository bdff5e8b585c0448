/// A command parameter with its C qualifiers split out of the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    /// Base type name only, e.g. `GLchar` for `const GLchar *`.
    pub ty: String,
    pub is_const: bool,
    /// Number of `*` levels; zero for by-value parameters.
    pub indirection: u8,
    /// Object kind tag (`class` attribute). Only the first parameter's tag
    /// is used to assign a command to an owning class.
    pub owning_class: Option<String>,
    /// Enum group restricting this parameter's values.
    pub group: Option<String>,
    /// Array length expression, informational only.
    pub len: Option<String>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_const: false,
            indirection: 0,
            owning_class: None,
            group: None,
            len: None,
        }
    }

    pub fn constant(mut self) -> Self {
        self.is_const = true;
        self
    }

    pub fn pointer(mut self) -> Self {
        self.indirection += 1;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.owning_class = Some(class.into());
        self
    }

    /// Set the enum group. An empty name means no group.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        self.group = if group.is_empty() { None } else { Some(group) };
        self
    }

    pub fn len_expr(mut self, len: impl Into<String>) -> Self {
        self.len = Some(len.into());
        self
    }

    pub fn is_pointer(&self) -> bool {
        self.indirection > 0
    }

    pub fn has_group(&self) -> bool {
        self.group_name().is_some()
    }

    /// The enum group, treating an empty name as absent.
    pub fn group_name(&self) -> Option<&str> {
        self.group.as_deref().filter(|g| !g.is_empty())
    }
}

/// A `<command>` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    /// Full return type text, e.g. `const GLubyte *`.
    pub return_type: String,
    /// Base return type when the prototype names one with `<ptype>`.
    pub return_base: Option<String>,
    /// Enum group of the return value.
    pub return_group: Option<String>,
    pub params: Vec<Parameter>,
    pub namespace: String,
    pub alias: Option<String>,
}

impl Command {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: "void".to_string(),
            return_base: None,
            return_group: None,
            params: Vec::new(),
            namespace: namespace.into(),
            alias: None,
        }
    }

    pub fn returns(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = return_type.into();
        self
    }

    pub fn return_base(mut self, base: impl Into<String>) -> Self {
        self.return_base = Some(base.into());
        self
    }

    pub fn return_group(mut self, group: impl Into<String>) -> Self {
        self.return_group = Some(group.into());
        self
    }

    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The object kind this command operates on, taken from the first
    /// parameter's class tag. Later parameters are never consulted.
    pub fn owning_class(&self) -> Option<&str> {
        self.params.first().and_then(|p| p.owning_class.as_deref())
    }

    pub fn returns_void(&self) -> bool {
        self.return_type == "void"
    }
}
