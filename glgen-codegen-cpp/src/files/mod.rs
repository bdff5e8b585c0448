mod gl_hpp;

pub use gl_hpp::GlHpp;
