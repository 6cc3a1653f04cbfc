// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod extractor;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod utils;

pub use app::{App, RunSummary, USAGE};
pub use client::{HttpFetcher, PageFetcher, RawResponse};
pub use config::{Config, FailurePolicy, LookupConfig, OutputConfig};
pub use error::{LookupError, Result, TransportError};
pub use extractor::DefinitionExtractor;
pub use models::{Definition, GroupedDefinitions, SourcedDefinition, group_by_dictionary};
pub use pipeline::{LookupOrchestrator, PendingLookup, WordLookup};
pub use render::{TabAligner, TextStyle, render, render_banner};
pub use utils::Validator;
