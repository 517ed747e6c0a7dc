//! Document renderers.

pub mod licences;
mod markdown;

pub use markdown::MarkdownRenderer;
