mod gl_c;
mod gl_h;

pub use gl_c::GlC;
pub use gl_h::GlH;

/// Name of the loader function parameter in generated code.
pub(crate) const LOADER_PARAM: &str = "getProcAddress";
