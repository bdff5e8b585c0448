//! Generate operation - emit or preview bindings.

use std::path::Path;

use eyre::{Context, Result};
use glgen_codegen::{EmitContext, Language};

use crate::{
    language::LanguageSupport,
    reports::{GenerateReport, GenerationResult},
};

/// Run the emitter for `language`, writing under `output` unless `dry_run`.
pub fn generate(
    ctx: &EmitContext<'_>,
    language: Language,
    output: &Path,
    dry_run: bool,
) -> Result<GenerateReport> {
    let support = LanguageSupport::get(language);
    let generator = support.generator(ctx);

    let result = if dry_run {
        GenerationResult::Preview(generator.preview().wrap_err("Failed to render bindings")?)
    } else {
        let result = generator
            .generate(output)
            .wrap_err_with(|| format!("Failed to write bindings to {}", output.display()))?;
        GenerationResult::Written(result)
    };

    Ok(GenerateReport {
        label: ctx.label(),
        language,
        include: format!("{}/{}", ctx.prefix(), support.header),
        output_dir: output.to_path_buf(),
        result,
    })
}
