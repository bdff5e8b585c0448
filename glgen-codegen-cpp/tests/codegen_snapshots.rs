//! Snapshot tests for C++ code generation against the trimmed registry fixture.

use std::str::FromStr;

use glgen_codegen::{EmitContext, Language};
use glgen_codegen_cpp::{Generator, LanguageCodegen};
use glgen_core::GeneratedFile;
use glgen_registry::{KnownVersions, Registry, Repository, Selection};

const MINI_GL: &str = include_str!("../../glgen-registry/tests/fixtures/mini_gl.xml");

fn repository() -> Repository {
    Repository::new(Registry::from_str(MINI_GL).expect("Failed to load fixture"))
}

fn context<'a>(
    repo: &'a Repository,
    api: &str,
    version: &str,
    profile: Option<&str>,
) -> EmitContext<'a> {
    let selection = Selection::resolve(&KnownVersions::default(), api, version, profile)
        .expect("Failed to resolve selection");
    EmitContext::new(repo, selection).expect("Failed to consolidate")
}

#[test]
fn test_gles2_header() {
    let repo = repository();
    let ctx = context(&repo, "gles2", "2.0", None);
    let header = Generator::new(&ctx).header().unwrap();

    insta::assert_snapshot!(header.render(), @r"
    #pragma once

    #ifndef GLGEN_GL_HPP
    #define GLGEN_GL_HPP

    #include <glgen/gl.h>

    namespace gl {

    /* gles2 2.0 enum groups */
    enum class ClearBufferMask : GLbitfield {
        eDEPTH_BUFFER_BIT = 0x00000100,
        eCOLOR_BUFFER_BIT = 0x00004000,
    };

    enum class TextureTarget : GLenum {
        eTEXTURE_2D = 0x0DE1,
    };

    enum class PrimitiveType : GLenum {
        eTRIANGLES = 0x0004,
        eQUADS = 0x0007,
    };

    /* gles2 2.0 commands */
    inline void clear(ClearBufferMask mask) {
        glClear(static_cast<GLbitfield>(mask));
    }

    inline void bindTexture(TextureTarget target, GLuint texture) {
        glBindTexture(static_cast<GLenum>(target), texture);
    }

    inline void drawArrays(PrimitiveType mode, GLint first, GLsizei count) {
        glDrawArrays(static_cast<GLenum>(mode), first, count);
    }

    } // namespace gl

    #endif /* GLGEN_GL_HPP */
    ");
}

#[test]
fn test_core_profile_wrappers() {
    let repo = repository();
    let ctx = context(&repo, "gl", "3.3", Some("core"));
    let header = Generator::new(&ctx).header().unwrap().render();

    assert!(!header.contains("inline void begin("));
    // enum classes carry every registry member of the group
    assert!(header.contains("    eQUADS = 0x0007,\n"));
    assert!(header.contains("enum class Boolean : GLboolean {\n    eFALSE = 0,\n    eTRUE = 1,\n};"));
    assert!(header.contains(
        "inline void getBooleanv(GLenum pname, Boolean *data) {\n    glGetBooleanv(pname, reinterpret_cast<GLboolean *>(data));\n}"
    ));
    assert!(header.contains(
        "inline const GLubyte * getString(StringName name) {\n    return glGetString(static_cast<GLenum>(name));\n}"
    ));
    assert!(header.contains(
        "inline GLboolean isBuffer(GLuint buffer) {\n    return glIsBuffer(buffer);\n}"
    ));
}

#[test]
fn test_enum_class_per_referenced_group() {
    let repo = repository();
    let ctx = context(&repo, "gl", "1.5", None);
    let header = Generator::new(&ctx).header().unwrap();

    let names: Vec<_> = header.enum_classes.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "PrimitiveType",
            "ClearBufferMask",
            "StringName",
            "EnableCap",
            "Boolean",
            "TextureTarget",
            "BufferTargetARB",
        ]
    );
    assert_eq!(header.wrappers.len(), 10);
}

#[test]
fn test_generate_includes_c_files() {
    let repo = repository();
    let ctx = context(&repo, "gl", "1.1", None).with_prefix("oglhpp");
    let generator = Generator::new(&ctx);
    assert_eq!(generator.language(), Language::Cpp);

    let paths: Vec<_> = generator
        .preview()
        .unwrap()
        .into_iter()
        .map(|f| f.path)
        .collect();
    assert_eq!(
        paths,
        ["include/oglhpp/gl.h", "src/gl.c", "include/oglhpp/gl.hpp"]
    );

    let temp = tempfile::tempdir().unwrap();
    let first = generator.generate(temp.path()).unwrap();
    assert_eq!(first.written.len(), 3);
    let hpp = std::fs::read_to_string(temp.path().join("include/oglhpp/gl.hpp")).unwrap();
    assert!(hpp.starts_with("/* Generated by glgen. DO NOT EDIT. */\n#pragma once\n"));
    assert!(hpp.contains("#include <oglhpp/gl.h>"));

    let second = generator.generate(temp.path()).unwrap();
    assert!(second.written.is_empty());
    assert_eq!(second.unchanged.len(), 3);
}
