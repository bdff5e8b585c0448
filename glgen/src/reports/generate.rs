//! Generate command report.

use std::path::PathBuf;

use glgen_codegen::{GenerateResult, Language, PreviewFile};

use super::output::{Output, Report};

#[derive(Debug)]
pub struct GenerateReport {
    /// Selection label, e.g. `gl 3.3 core`.
    pub label: String,
    pub language: Language,
    /// Header path consumers include, e.g. `glgen/gl.hpp`.
    pub include: String,
    pub output_dir: PathBuf,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(GenerateResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &GenerateResult) {
        out.preformatted(&format!("{} bindings for {}", self.language, self.label));
        out.newline();

        if !written.written.is_empty() {
            out.section("Written");
            for path in &written.written {
                out.added_item(&path.display().to_string());
            }
        }
        if !written.unchanged.is_empty() {
            out.section("Unchanged");
            for path in &written.unchanged {
                out.list_item(&path.display().to_string());
            }
        }

        out.newline();
        out.key_value("Include", &format!("<{}>", self.include));
        out.key_value(
            "Include path",
            &self.output_dir.join("include").display().to_string(),
        );
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}
