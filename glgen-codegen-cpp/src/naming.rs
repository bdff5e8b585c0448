use glgen_codegen::NamingConvention;
use glgen_core::{lower_first, strip_namespace};

/// C++ naming: `glBindTexture` -> `bindTexture`, `GL_TEXTURE_2D` -> `eTEXTURE_2D`.
pub const CPP_NAMING: NamingConvention = NamingConvention {
    command_to_function,
    constant_to_enumerator,
    reserved_words: CPP_KEYWORDS,
    escape_reserved,
};

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "asm", "auto", "bool", "break", "case", "catch", "char",
    "class", "const", "constexpr", "continue", "default", "delete", "do", "double", "else",
    "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto", "if",
    "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "nullptr",
    "operator", "or", "private", "protected", "public", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "template", "this", "throw", "true",
    "try", "typedef", "typename", "union", "unsigned", "using", "virtual", "void", "volatile",
    "while", "xor",
];

fn command_to_function(name: &str) -> String {
    lower_first(strip_namespace(name, "gl"))
}

fn constant_to_enumerator(name: &str) -> String {
    format!("e{}", strip_namespace(name, "GL"))
}

fn escape_reserved(name: &str) -> String {
    format!("{}_", name)
}
