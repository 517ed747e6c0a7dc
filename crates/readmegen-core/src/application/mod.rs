//! Application layer for readmegen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (AnswerCollector, ReadmeService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types

pub mod error;
pub mod ports;
pub mod services;

pub use services::{AnswerCollector, Published, ReadmeService, WriteOutcome};

pub use ports::{DocumentRenderer, Filesystem, PromptRequest, Prompter};

pub use error::ApplicationError;
