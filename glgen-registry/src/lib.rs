// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod consolidate;
mod error;
mod loader;
pub mod model;
mod repository;
mod resolve;
mod selection;

pub use consolidate::ConsolidatedRequire;
pub use error::{Error, IdentifierKind, LookupKind, Result, SourceContext};
pub use loader::load_registry;
pub use model::{
    Command, Enum, EnumCollection, Feature, NameSet, NotPresent, Parameter, Registry, Remove,
    Require, Type,
};
pub use repository::Repository;
pub use selection::{KnownVersions, Selection};
