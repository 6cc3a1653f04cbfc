// file: src/render/mod.rs
// description: terminal rendering module exports
// reference: internal module structure

pub mod align;
pub mod style;
pub mod terminal;

pub use align::TabAligner;
pub use style::TextStyle;
pub use terminal::{render, render_banner};
