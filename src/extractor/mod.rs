// file: src/extractor/mod.rs
// description: definition extraction module exports
// reference: internal module structure

pub mod patterns;
pub mod wordnik;

pub use wordnik::DefinitionExtractor;
