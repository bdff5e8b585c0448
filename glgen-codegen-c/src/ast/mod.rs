//! C declaration builders rendered through `CodeBuilder`.

mod define;
mod function_pointer;

pub use define::Define;
pub use function_pointer::FunctionPointer;
