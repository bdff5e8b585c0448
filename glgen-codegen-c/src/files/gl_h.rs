use std::path::{Path, PathBuf};

use glgen_codegen::CodeBuilder;
use glgen_core::{FileRules, GENERATED_HEADER, GeneratedFile, to_upper_snake};

use super::LOADER_PARAM;
use crate::ast::{Define, FunctionPointer};

/// The public header, `include/<prefix>/gl.h`.
#[derive(Debug, Clone)]
pub struct GlH {
    pub prefix: String,
    /// Human-readable selection, e.g. `gl 3.3 core`.
    pub label: String,
    pub types: Vec<String>,
    pub defines: Vec<Define>,
    pub pointers: Vec<FunctionPointer>,
}

impl GlH {
    pub fn new(prefix: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            label: label.into(),
            types: Vec::new(),
            defines: Vec::new(),
            pointers: Vec::new(),
        }
    }

    pub fn with_types(mut self, types: Vec<String>) -> Self {
        self.types = types;
        self
    }

    pub fn with_defines(mut self, defines: Vec<Define>) -> Self {
        self.defines = defines;
        self
    }

    pub fn with_pointers(mut self, pointers: Vec<FunctionPointer>) -> Self {
        self.pointers = pointers;
        self
    }

    fn guard(&self) -> String {
        format!("{}_GL_H", to_upper_snake(&self.prefix))
    }
}

impl GeneratedFile for GlH {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("include").join(&self.prefix).join("gl.h")
    }

    fn rules(&self) -> FileRules {
        FileRules::if_changed().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        let upper = to_upper_snake(&self.prefix);
        let guard = self.guard();

        let mut builder = CodeBuilder::c()
            .line("#pragma once")
            .blank()
            .line(&format!("#ifndef {}", guard))
            .line(&format!("#define {}", guard))
            .blank()
            .line("#if defined(__gl_h_) || defined(__GL_H__)")
            .line(&format!(
                "#error \"include <{}/gl.h> instead of the system OpenGL header\"",
                self.prefix
            ))
            .line("#endif")
            .blank()
            .line("#define __gl_h_")
            .line("#define __GL_H__")
            .blank()
            .line("#if defined(_WIN32)")
            .line("#define GLAPI")
            .line("#define GLCALLCONV __stdcall")
            .line("#else")
            .line("#define GLAPI")
            .line("#define GLCALLCONV")
            .line("#endif")
            .blank()
            .line("#ifdef __cplusplus")
            .line("extern \"C\" {")
            .line("#endif")
            .blank()
            .comment("loader declarations")
            .line(&format!("typedef void (*{}_PROC)(void);", upper))
            .line(&format!(
                "typedef {upper}_PROC (*{upper}_GETPROCADDRESS)(const char *name);"
            ))
            .line(&format!(
                "extern void {}_load_functions({}_GETPROCADDRESS {});",
                self.prefix, upper, LOADER_PARAM
            ));

        if !self.types.is_empty() {
            builder = builder.blank().comment("type definitions");
            for definition in &self.types {
                for line in definition.lines() {
                    builder = builder.line(line);
                }
            }
        }

        if !self.defines.is_empty() {
            builder = builder
                .blank()
                .comment(&format!("{} constants", self.label));
            for define in &self.defines {
                builder.emit(define);
            }
        }

        if !self.pointers.is_empty() {
            builder = builder
                .blank()
                .comment(&format!("{} commands", self.label));
            for pointer in &self.pointers {
                builder.emit(pointer);
            }
        }

        builder
            .blank()
            .line("#ifdef __cplusplus")
            .line("}")
            .line("#endif")
            .blank()
            .line(&format!("#endif /* {} */", guard))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path() {
        let header = GlH::new("oglhpp", "gl 1.0");
        assert_eq!(
            header.path(Path::new("out")),
            PathBuf::from("out/include/oglhpp/gl.h")
        );
    }

    #[test]
    fn test_loader_declarations_use_prefix() {
        let content = GlH::new("oglhpp", "gl 1.0").render();
        assert!(content.contains("typedef void (*OGLHPP_PROC)(void);\n"));
        assert!(content.contains(
            "typedef OGLHPP_PROC (*OGLHPP_GETPROCADDRESS)(const char *name);\n"
        ));
        assert!(content.contains(
            "extern void oglhpp_load_functions(OGLHPP_GETPROCADDRESS getProcAddress);\n"
        ));
        assert!(content.starts_with("#pragma once\n\n#ifndef OGLHPP_GL_H\n"));
        assert!(content.ends_with("#endif /* OGLHPP_GL_H */\n"));
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let content = GlH::new("glgen", "gl 1.0").render();
        assert!(!content.contains("type definitions"));
        assert!(!content.contains("constants"));
        assert!(!content.contains("commands"));
    }

    #[test]
    fn test_sections_in_order() {
        let content = GlH::new("glgen", "gl 1.1")
            .with_types(vec!["typedef unsigned int GLenum;".to_string()])
            .with_defines(vec![Define::new("GL_TRUE", "1")])
            .with_pointers(vec![FunctionPointer::new("glFlush", "void")])
            .render();

        let types = content.find("typedef unsigned int GLenum;").unwrap();
        let defines = content.find("/* gl 1.1 constants */\n#define GL_TRUE 1\n").unwrap();
        let pointers = content
            .find("/* gl 1.1 commands */\ntypedef GLAPI void (GLCALLCONV *PFNGLFLUSHPROC)(void);\nextern PFNGLFLUSHPROC glFlush;\n")
            .unwrap();
        assert!(types < defines && defines < pointers);
    }
}
