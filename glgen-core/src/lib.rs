//! Core utilities and types for the glgen bindings generator.
//!
//! This crate provides fundamental types and utilities used across
//! the glgen workspace.

mod file;
mod utils;
mod version;

// File operations
pub use file::{FileRules, GENERATED_HEADER, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{lower_first, strip_namespace, to_pascal_case, to_upper_snake};
pub use version::ApiVersion;
