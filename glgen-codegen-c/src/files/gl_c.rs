use std::path::{Path, PathBuf};

use glgen_codegen::CodeBuilder;
use glgen_core::{FileRules, GENERATED_HEADER, GeneratedFile, to_upper_snake};

use super::LOADER_PARAM;
use crate::ast::FunctionPointer;

/// The loader source, `src/gl.c`.
#[derive(Debug, Clone)]
pub struct GlC {
    pub prefix: String,
    pub pointers: Vec<FunctionPointer>,
}

impl GlC {
    pub fn new(prefix: impl Into<String>, pointers: Vec<FunctionPointer>) -> Self {
        Self {
            prefix: prefix.into(),
            pointers,
        }
    }
}

impl GeneratedFile for GlC {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("src").join("gl.c")
    }

    fn rules(&self) -> FileRules {
        FileRules::if_changed().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        let upper = to_upper_snake(&self.prefix);

        let mut builder = CodeBuilder::c()
            .line(&format!("#include <{}/gl.h>", self.prefix))
            .blank();

        if !self.pointers.is_empty() {
            for pointer in &self.pointers {
                builder.push_line(&pointer.definition());
            }
            builder.push_blank();
        }

        builder
            .block_with_close(
                &format!(
                    "void {}_load_functions({}_GETPROCADDRESS {}) {{",
                    self.prefix, upper, LOADER_PARAM
                ),
                "}",
                |b| {
                    b.each(&self.pointers, |b, pointer| {
                        b.line(&pointer.load_statement(LOADER_PARAM))
                    })
                },
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source() {
        let source = GlC::new(
            "glgen",
            vec![
                FunctionPointer::new("glClear", "void").param("GLbitfield mask"),
                FunctionPointer::new("glFlush", "void"),
            ],
        );

        insta::assert_snapshot!(source.render(), @r#"
        #include <glgen/gl.h>

        PFNGLCLEARPROC glClear;
        PFNGLFLUSHPROC glFlush;

        void glgen_load_functions(GLGEN_GETPROCADDRESS getProcAddress) {
            glClear = (PFNGLCLEARPROC)getProcAddress("glClear");
            glFlush = (PFNGLFLUSHPROC)getProcAddress("glFlush");
        }
        "#);
    }

    #[test]
    fn test_empty_loader() {
        let source = GlC::new("glgen", Vec::new()).render();
        assert_eq!(
            source,
            "#include <glgen/gl.h>\n\nvoid glgen_load_functions(GLGEN_GETPROCADDRESS getProcAddress) {\n}\n"
        );
    }
}
