mod enum_class;
mod wrapper;

pub use enum_class::{EnumClass, Enumerator};
pub use wrapper::{Wrapper, WrapperParam};
