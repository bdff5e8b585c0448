use glgen_codegen::{CodeFragment, Renderable};
use glgen_registry::Enum;

/// A `#define NAME VALUE` constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Define {
    pub name: String,
    pub value: String,
}

impl Define {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<&Enum> for Define {
    fn from(entry: &Enum) -> Self {
        Self::new(&entry.name, &entry.value)
    }
}

impl Renderable for Define {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("#define {} {}", self.name, self.value))]
    }
}
