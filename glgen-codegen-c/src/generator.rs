use std::path::Path;

use eyre::Result;
use glgen_codegen::{EmitContext, GenerateResult, Language, LanguageCodegen, PreviewFile};

use crate::{
    ast::{Define, FunctionPointer},
    files::{GlC, GlH},
};

/// C generator producing a header and a loader source file.
pub struct Generator<'a> {
    ctx: &'a EmitContext<'a>,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> Language {
        Language::C
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(vec![
            PreviewFile::of(&self.header()?),
            PreviewFile::of(&self.source()?),
        ])
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        result.write(&self.header()?, output_dir)?;
        result.write(&self.source()?, output_dir)?;
        Ok(result)
    }
}

impl<'a> Generator<'a> {
    pub fn new(ctx: &'a EmitContext<'a>) -> Self {
        Self { ctx }
    }

    fn pointers(&self) -> Result<Vec<FunctionPointer>> {
        Ok(self
            .ctx
            .commands()?
            .into_iter()
            .map(FunctionPointer::from)
            .collect())
    }

    pub fn header(&self) -> Result<GlH> {
        let types = self
            .ctx
            .types()?
            .into_iter()
            .map(|t| t.definition.clone())
            .collect();
        let defines = self.ctx.enums()?.into_iter().map(Define::from).collect();

        Ok(GlH::new(self.ctx.prefix(), self.ctx.label())
            .with_types(types)
            .with_defines(defines)
            .with_pointers(self.pointers()?))
    }

    pub fn source(&self) -> Result<GlC> {
        Ok(GlC::new(self.ctx.prefix(), self.pointers()?))
    }
}
