//! C bindings for a consolidated registry selection.
//!
//! Produces `include/<prefix>/gl.h` (types, `#define` constants, function
//! pointer typedefs and their `extern` variables) and `src/gl.c` (pointer
//! definitions and the loader that fills them).

mod generator;

pub mod ast;
pub mod files;

pub use generator::Generator;
pub use glgen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
