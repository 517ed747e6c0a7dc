//! Application layer errors.
//!
//! These errors represent failures in orchestration: the prompt engine, the
//! filesystem, and the user backing out. Answer problems are `DomainError`
//! from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The user aborted the question sequence.
    #[error("Prompt aborted by user")]
    Aborted,

    /// The prompt engine could not talk to the terminal.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// The user declined to overwrite an existing README.
    #[error("User aborted file write to {path}")]
    WriteAborted { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Adapter state could not be accessed (lock poisoned, etc.).
    #[error("Adapter state is unavailable: {name}")]
    AdapterUnavailable { name: &'static str },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Aborted => vec![
                "Question sequence was cancelled".into(),
                "No files were written".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "readmegen needs an interactive terminal to ask questions or confirm an overwrite".into(),
                "When replaying --answers, remove the existing README.md or set targetDir to a new directory".into(),
                "Otherwise run readmegen generate from a terminal".into(),
            ],
            Self::WriteAborted { path } => vec![
                format!("The existing {} was left untouched", path.display()),
                "Choose a different target directory to keep both".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::AdapterUnavailable { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Aborted | Self::WriteAborted { .. } => ErrorCategory::Aborted,
            Self::PromptFailed { .. } => ErrorCategory::NoTerminal,
            Self::Filesystem { .. } => ErrorCategory::Io,
            Self::AdapterUnavailable { .. } => ErrorCategory::Internal,
        }
    }
}
