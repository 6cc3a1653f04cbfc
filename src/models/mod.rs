// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod definition;
pub mod grouped;

pub use definition::{Definition, SourcedDefinition};
pub use grouped::{GroupedDefinitions, group_by_dictionary};
