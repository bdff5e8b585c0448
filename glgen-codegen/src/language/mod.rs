//! Emitter abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language emitters
//! - [`Language`] - Output language selector
//! - [`NamingConvention`] - Language-specific naming rules
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod naming;
mod traits;

pub use naming::{NamingConvention, c_declaration, pfn_type_name};
pub use traits::{GenerateResult, Language, LanguageCodegen, PreviewFile};
