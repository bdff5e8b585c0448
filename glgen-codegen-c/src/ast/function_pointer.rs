//! Function pointer declarations for dynamically loaded commands.

use glgen_codegen::{CodeFragment, Renderable, c_declaration, pfn_type_name};
use glgen_registry::Command;

/// A command exposed as a function pointer variable of the same name.
///
/// Renders as the header pair:
///
/// ```c
/// typedef GLAPI void (GLCALLCONV *PFNGLCLEARPROC)(GLbitfield mask);
/// extern PFNGLCLEARPROC glClear;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionPointer {
    pub name: String,
    pub return_type: String,
    pub params: Vec<String>,
}

impl FunctionPointer {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, declaration: impl Into<String>) -> Self {
        self.params.push(declaration.into());
        self
    }

    /// `PFN<NAME>PROC`
    pub fn type_name(&self) -> String {
        pfn_type_name(&self.name)
    }

    fn param_list(&self) -> String {
        if self.params.is_empty() {
            "void".to_string()
        } else {
            self.params.join(", ")
        }
    }

    pub fn typedef(&self) -> String {
        format!(
            "typedef GLAPI {} (GLCALLCONV *{})({});",
            self.return_type,
            self.type_name(),
            self.param_list()
        )
    }

    pub fn extern_declaration(&self) -> String {
        format!("extern {} {};", self.type_name(), self.name)
    }

    /// Storage for the pointer in the source file.
    pub fn definition(&self) -> String {
        format!("{} {};", self.type_name(), self.name)
    }

    /// Loader assignment using the given `getProcAddress` parameter name.
    pub fn load_statement(&self, loader: &str) -> String {
        format!(
            "{} = ({}){}(\"{}\");",
            self.name,
            self.type_name(),
            loader,
            self.name
        )
    }
}

impl From<&Command> for FunctionPointer {
    fn from(command: &Command) -> Self {
        command.params.iter().fold(
            Self::new(&command.name, &command.return_type),
            |pointer, p| pointer.param(c_declaration(p.is_const, &p.ty, p.indirection, &p.name)),
        )
    }
}

impl Renderable for FunctionPointer {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![
            CodeFragment::line(self.typedef()),
            CodeFragment::line(self.extern_declaration()),
        ]
    }
}
