use thiserror::Error;

use crate::domain::value_objects::Field;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid answer for '{field}': {message}")]
    InvalidAnswer { field: Field, message: String },

    #[error("Unknown licence '{0}'")]
    UnknownLicence(String),

    #[error("Unknown answer field '{0}'")]
    UnknownField(String),

    #[error("Choice {index} is out of range for '{field}' ({available} choices)")]
    ChoiceOutOfRange {
        field: Field,
        index: usize,
        available: usize,
    },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidAnswer { field, message } => vec![
                format!("Fix the '{}' answer: {}", field, message),
                "Run without --answers to be prompted interactively".into(),
            ],
            Self::UnknownLicence(_) => {
                let mut out = vec!["Choose one of:".to_string()];
                out.extend(
                    crate::domain::Licence::ALL
                        .iter()
                        .map(|l| format!("  • {}", l.as_str())),
                );
                out
            }
            Self::UnknownField(_) => vec![
                "Valid fields:".into(),
                format!(
                    "  {}",
                    Field::ALL
                        .iter()
                        .map(|f| f.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ],
            Self::ChoiceOutOfRange { .. } => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidAnswer { .. } | Self::UnknownLicence(_) | Self::UnknownField(_) => {
                ErrorCategory::Validation
            }
            Self::ChoiceOutOfRange { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
