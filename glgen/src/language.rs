//! Unified language dispatch.

use glgen_codegen::{EmitContext, Language, LanguageCodegen};
use glgen_codegen_c::Generator as CGenerator;
use glgen_codegen_cpp::Generator as CppGenerator;

/// Language-specific support for code generation.
pub struct LanguageSupport {
    language: Language,
    /// Header a consumer includes, relative to `include/<prefix>/`.
    pub header: &'static str,
}

impl LanguageSupport {
    pub fn get(language: Language) -> Self {
        match language {
            Language::C => Self {
                language,
                header: "gl.h",
            },
            Language::Cpp => Self {
                language,
                header: "gl.hpp",
            },
        }
    }

    /// Create a generator for this language.
    pub fn generator<'a>(&self, ctx: &'a EmitContext<'a>) -> Box<dyn LanguageCodegen + 'a> {
        match self.language {
            Language::C => Box::new(CGenerator::new(ctx)),
            Language::Cpp => Box::new(CppGenerator::new(ctx)),
        }
    }
}
