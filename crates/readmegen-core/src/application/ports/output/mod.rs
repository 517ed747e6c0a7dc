//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `readmegen-adapters` crate and the CLI provide implementations.

use std::path::Path;

use crate::domain::{AnswerSet, Modality, Question, RenderContext, RenderDocument};
use crate::error::ReadmeResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `readmegen_adapters::filesystem::LocalFilesystem` (production)
/// - `readmegen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ReadmeResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ReadmeResult<()>;

    /// Read a file to a string.
    fn read_file(&self, path: &Path) -> ReadmeResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// A single presentation of a question to the prompt engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    pub message: String,
    pub modality: Modality,
    /// Returned by the engine when the user submits empty input.
    pub default: Option<String>,
    /// Pre-filled input, e.g. the answer that was just rejected.
    pub initial: Option<String>,
    /// Message from the validator that rejected the previous attempt.
    pub error: Option<String>,
}

impl PromptRequest {
    pub fn new(question: &Question, default: Option<String>) -> Self {
        Self {
            message: question.message.to_string(),
            modality: question.modality,
            default,
            initial: None,
            error: None,
        }
    }

    /// The same request, re-issued after `rejected` failed validation.
    pub fn retry(mut self, rejected: String, error: String) -> Self {
        self.initial = self.modality.preserves_input().then_some(rejected);
        self.error = Some(error);
        self
    }

    pub fn choices(&self) -> &'static [&'static str] {
        self.modality.choices()
    }
}

/// Port over the interactive prompt engine.
///
/// Implemented by:
/// - `readmegen::prompt::TerminalPrompter` (dialoguer, CLI crate)
/// - `readmegen_adapters::prompt::ScriptedPrompter` (testing, replay)
///
/// Implementations return the raw answer and never validate; the collector
/// owns the re-prompt loop. Aborts map to `ApplicationError::Aborted`.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter: Send + Sync {
    /// Ask for free text (single or multi line).
    fn input(&self, request: &PromptRequest) -> ReadmeResult<String>;

    /// Ask for one of `request.choices()`; returns the selected index.
    fn select(&self, request: &PromptRequest) -> ReadmeResult<usize>;
}

/// Port for document rendering.
///
/// Implemented by:
/// - `readmegen_adapters::renderer::MarkdownRenderer`
pub trait DocumentRenderer: Send + Sync {
    /// Render an answer set. Must be deterministic for equal inputs.
    fn render(&self, answers: &AnswerSet, context: &RenderContext)
    -> ReadmeResult<RenderDocument>;
}
