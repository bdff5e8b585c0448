//! Inline C++ wrappers forwarding to the loaded C function pointers.

use glgen_codegen::{CodeFragment, Renderable, c_declaration};
use glgen_registry::{Command, Parameter};

use crate::naming::CPP_NAMING;

/// One wrapper parameter. `group` is set when the parameter is typed by an
/// emitted enum class and has to be cast back to `ty` when forwarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperParam {
    pub name: String,
    pub ty: String,
    pub is_const: bool,
    pub indirection: u8,
    pub group: Option<String>,
}

impl WrapperParam {
    /// `has_class` decides whether the parameter's group became an enum class.
    pub fn from_parameter(param: &Parameter, has_class: impl Fn(&str) -> bool) -> Self {
        Self {
            name: CPP_NAMING.param_name(&param.name),
            ty: param.ty.clone(),
            is_const: param.is_const,
            indirection: param.indirection,
            group: param
                .group_name()
                .filter(|g| has_class(*g))
                .map(str::to_string),
        }
    }

    /// Declaration in the wrapper signature.
    pub fn declaration(&self) -> String {
        let ty = self.group.as_deref().unwrap_or(&self.ty);
        c_declaration(self.is_const, ty, self.indirection, &self.name)
    }

    /// Expression passed to the C function pointer.
    pub fn argument(&self) -> String {
        if self.group.is_none() {
            return self.name.clone();
        }
        if self.indirection == 0 {
            return format!("static_cast<{}>({})", self.ty, self.name);
        }
        let constness = if self.is_const { "const " } else { "" };
        format!(
            "reinterpret_cast<{}{} {}>({})",
            constness,
            self.ty,
            "*".repeat(self.indirection as usize),
            self.name
        )
    }
}

/// `inline <ret> <name>(<params>) { [return] <command>(<args>); }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    pub name: String,
    pub command: String,
    pub return_type: String,
    pub params: Vec<WrapperParam>,
}

impl Wrapper {
    pub fn from_command(command: &Command, has_class: impl Fn(&str) -> bool) -> Self {
        Self {
            name: CPP_NAMING.function_name(&command.name),
            command: command.name.clone(),
            return_type: command.return_type.clone(),
            params: command
                .params
                .iter()
                .map(|p| WrapperParam::from_parameter(p, &has_class))
                .collect(),
        }
    }

    fn signature(&self) -> String {
        let params: Vec<_> = self.params.iter().map(WrapperParam::declaration).collect();
        format!(
            "inline {} {}({}) {{",
            self.return_type,
            self.name,
            params.join(", ")
        )
    }

    fn call(&self) -> String {
        let args: Vec<_> = self.params.iter().map(WrapperParam::argument).collect();
        let call = format!("{}({});", self.command, args.join(", "));
        if self.return_type == "void" {
            call
        } else {
            format!("return {}", call)
        }
    }
}

impl Renderable for Wrapper {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            self.signature(),
            vec![CodeFragment::line(self.call())],
            Some("}".to_string()),
        )]
    }
}
