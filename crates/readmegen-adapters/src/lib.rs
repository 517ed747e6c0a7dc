//! Infrastructure adapters for readmegen.
//!
//! This crate implements the ports defined in `readmegen-core::application::ports`.
//! It contains all filesystem I/O and the Markdown template.

pub mod filesystem;
pub mod prompt;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use prompt::ScriptedPrompter;
pub use renderer::MarkdownRenderer;
