use std::path::{Path, PathBuf};

use glgen_codegen::CodeBuilder;
use glgen_core::{FileRules, GENERATED_HEADER, GeneratedFile, to_upper_snake};

use crate::ast::{EnumClass, Wrapper};

/// The C++ header, `include/<prefix>/gl.hpp`.
#[derive(Debug, Clone)]
pub struct GlHpp {
    pub prefix: String,
    pub label: String,
    pub enum_classes: Vec<EnumClass>,
    pub wrappers: Vec<Wrapper>,
}

impl GlHpp {
    pub fn new(prefix: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            label: label.into(),
            enum_classes: Vec::new(),
            wrappers: Vec::new(),
        }
    }

    pub fn with_enum_classes(mut self, enum_classes: Vec<EnumClass>) -> Self {
        self.enum_classes = enum_classes;
        self
    }

    pub fn with_wrappers(mut self, wrappers: Vec<Wrapper>) -> Self {
        self.wrappers = wrappers;
        self
    }
}

impl GeneratedFile for GlHpp {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("include").join(&self.prefix).join("gl.hpp")
    }

    fn rules(&self) -> FileRules {
        FileRules::if_changed().with_header(GENERATED_HEADER)
    }

    fn render(&self) -> String {
        let guard = format!("{}_GL_HPP", to_upper_snake(&self.prefix));

        let mut builder = CodeBuilder::c()
            .line("#pragma once")
            .blank()
            .line(&format!("#ifndef {}", guard))
            .line(&format!("#define {}", guard))
            .blank()
            .line(&format!("#include <{}/gl.h>", self.prefix))
            .blank()
            .line("namespace gl {");

        if !self.enum_classes.is_empty() {
            builder = builder
                .blank()
                .comment(&format!("{} enum groups", self.label));
            for (i, class) in self.enum_classes.iter().enumerate() {
                if i > 0 {
                    builder.push_blank();
                }
                builder.emit(class);
            }
        }

        if !self.wrappers.is_empty() {
            builder = builder.blank().comment(&format!("{} commands", self.label));
            for (i, wrapper) in self.wrappers.iter().enumerate() {
                if i > 0 {
                    builder.push_blank();
                }
                builder.emit(wrapper);
            }
        }

        builder
            .blank()
            .line("} // namespace gl")
            .blank()
            .line(&format!("#endif /* {} */", guard))
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_header() {
        insta::assert_snapshot!(GlHpp::new("oglhpp", "gl 1.0").render(), @r"
        #pragma once

        #ifndef OGLHPP_GL_HPP
        #define OGLHPP_GL_HPP

        #include <oglhpp/gl.h>

        namespace gl {

        } // namespace gl

        #endif /* OGLHPP_GL_HPP */
        ");
    }

    #[test]
    fn test_path() {
        assert_eq!(
            GlHpp::new("glgen", "gl 1.0").path(Path::new("out")),
            PathBuf::from("out/include/glgen/gl.hpp")
        );
    }
}
