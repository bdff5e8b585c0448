use std::{collections::HashSet, path::Path};

use eyre::Result;
use glgen_codegen::{EmitContext, GenerateResult, Language, LanguageCodegen, PreviewFile};

use crate::{
    ast::{EnumClass, Wrapper},
    files::GlHpp,
};

/// C++ generator. Emits the C header and loader it wraps, then `gl.hpp`.
pub struct Generator<'a> {
    ctx: &'a EmitContext<'a>,
    c: glgen_codegen_c::Generator<'a>,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> Language {
        Language::Cpp
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        let mut files = self.c.preview()?;
        files.push(PreviewFile::of(&self.header()?));
        Ok(files)
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = self.c.generate(output_dir)?;
        result.write(&self.header()?, output_dir)?;
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(ctx: &'a EmitContext<'a>) -> Self {
        Self {
            ctx,
            c: glgen_codegen_c::Generator::new(ctx),
        }
    }

    pub fn header(&self) -> Result<GlHpp> {
        let groups = self.ctx.groups()?;
        let emitted: HashSet<&str> = groups.iter().map(|g| g.name).collect();

        let enum_classes = groups.iter().map(EnumClass::from).collect();
        let wrappers = self
            .ctx
            .commands()?
            .into_iter()
            .map(|command| Wrapper::from_command(command, |g| emitted.contains(g)))
            .collect();

        Ok(GlHpp::new(self.ctx.prefix(), self.ctx.label())
            .with_enum_classes(enum_classes)
            .with_wrappers(wrappers))
    }
}
