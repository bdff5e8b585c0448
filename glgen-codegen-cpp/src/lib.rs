//! C++ bindings layered over the C loader.
//!
//! Produces `include/<prefix>/gl.hpp` with one `enum class` per referenced
//! enum group and one inline wrapper per command, alongside the C header and
//! loader it forwards to.

mod generator;
mod naming;

pub mod ast;
pub mod files;

pub use generator::Generator;
pub use glgen_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use naming::CPP_NAMING;
