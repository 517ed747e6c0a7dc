//! Unified error handling for readmegen Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for readmegen Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReadmeError {
    /// Errors from the domain layer (invalid answers, unknown licences).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (prompting, filesystem, aborts).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl ReadmeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for failures that belong to the write stage.
    ///
    /// The CLI reports these and carries on instead of failing the process.
    pub fn is_write_failure(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::Filesystem { .. })
                | Self::Application(ApplicationError::WriteAborted { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Aborted,
    /// A question had to be asked but no terminal was available.
    NoTerminal,
    Io,
    Internal,
}

/// Convenient result type alias.
pub type ReadmeResult<T> = Result<T, ReadmeError>;
