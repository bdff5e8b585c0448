//! Shared code generation utilities for glgen emitters.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Emitter abstractions (LanguageCodegen, NamingConvention, etc.)
//! - [`EmitContext`] - The selection and consolidated names handed to an emitter

pub mod builder;
mod context;
pub mod language;

pub use builder::{CodeBuilder, CodeFragment, Indent, Renderable};
pub use context::{DEFAULT_PREFIX, EmitContext, ReferencedGroup};
pub use language::{
    GenerateResult, Language, LanguageCodegen, NamingConvention, PreviewFile, c_declaration,
    pfn_type_name,
};
