//! Shared string helpers for code generation.

/// Convert a space or underscore separated name to PascalCase
/// (e.g., "program pipeline" -> "ProgramPipeline").
pub fn to_pascal_case(s: &str) -> String {
    s.split([' ', '_'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert an identifier to UPPER_SNAKE_CASE for use in macro names
/// (e.g., "oglhpp" -> "OGLHPP", "my-gl" -> "MY_GL").
pub fn to_upper_snake(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect()
}

/// Strip a registry namespace prefix from a symbol, case-insensitively.
///
/// `strip_namespace("glBindTexture", "GL")` returns `"BindTexture"`. Symbols
/// that don't carry the prefix are returned unchanged.
pub fn strip_namespace<'a>(symbol: &'a str, namespace: &str) -> &'a str {
    let len = namespace.len();
    match symbol.get(..len) {
        Some(head) if len > 0 && head.eq_ignore_ascii_case(namespace) && symbol.len() > len => {
            symbol[len..].trim_start_matches('_')
        }
        _ => symbol,
    }
}

/// Lowercase the first character (e.g., "BindTexture" -> "bindTexture").
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}
