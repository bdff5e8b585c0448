//! Registry entity model.
//!
//! Records are built once by the loader (or by hand in tests) and only read
//! afterwards. Builder-style constructors keep optional fields explicit.

mod command;
mod enums;
mod feature;
mod name_set;
mod types;

pub use command::{Command, Parameter};
pub use enums::{Enum, EnumCollection};
pub use feature::{Feature, Remove, Require};
pub use name_set::{NameSet, NotPresent};
pub use types::Type;

/// All entities loaded from one registry document, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub types: Vec<Type>,
    pub enum_collections: Vec<EnumCollection>,
    pub commands: Vec<Command>,
    pub features: Vec<Feature>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, ty: Type) -> Self {
        self.types.push(ty);
        self
    }

    pub fn with_enums(mut self, collection: EnumCollection) -> Self {
        self.enum_collections.push(collection);
        self
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }

    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }
}
