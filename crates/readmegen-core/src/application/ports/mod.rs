//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Prompter`: Terminal questions
//!   - `Filesystem`: File operations
//!   - `DocumentRenderer`: Answer set to Markdown

pub mod output;

pub use output::{DocumentRenderer, Filesystem, PromptRequest, Prompter};

#[cfg(test)]
pub use output::{MockFilesystem, MockPrompter};
