//! Naming conventions shared by the C-family emitters.

/// Language-specific naming conventions.
///
/// Defines how to transform registry names and handle reserved words.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform a command name into a function name (e.g., "glBindTexture" -> "bindTexture")
    pub command_to_function: fn(&str) -> String,
    /// Transform an enum constant into an enumerator (e.g., "GL_TEXTURE_2D" -> "eTEXTURE_2D")
    pub constant_to_enumerator: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
    /// Escape a reserved word (e.g., "near" -> "near_")
    pub escape_reserved: fn(&str) -> String,
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            (self.escape_reserved)(name)
        } else {
            name.to_string()
        }
    }

    pub fn function_name(&self, command: &str) -> String {
        self.safe_name(&(self.command_to_function)(command))
    }

    pub fn enumerator_name(&self, constant: &str) -> String {
        self.safe_name(&(self.constant_to_enumerator)(constant))
    }

    /// Make a parameter name safe.
    pub fn param_name(&self, name: &str) -> String {
        self.safe_name(name)
    }
}

/// Function pointer typedef name for a command: `glGetString` -> `PFNGLGETSTRINGPROC`.
pub fn pfn_type_name(command: &str) -> String {
    format!("PFN{}PROC", command.to_uppercase())
}

/// A C declarator such as `const GLchar **string` or `GLenum target`.
pub fn c_declaration(is_const: bool, ty: &str, indirection: u8, name: &str) -> String {
    let constness = if is_const { "const " } else { "" };
    if indirection == 0 {
        format!("{}{} {}", constness, ty, name)
    } else {
        format!(
            "{}{} {}{}",
            constness,
            ty,
            "*".repeat(indirection as usize),
            name
        )
    }
}
