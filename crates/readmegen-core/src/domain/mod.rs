//! Core domain layer for readmegen.
//!
//! This module contains pure logic with no I/O. Prompting, rendering and
//! filesystem access are handled via ports (traits) defined in the
//! application layer.
//!
//! - **No I/O**: validators and path resolution are plain functions
//! - **Immutable entities**: questions are built once and consumed
//! - **Closed sets**: fields and licences are enums, not strings

pub mod entities;
pub mod error;
pub mod validation;
pub mod value_objects;

pub use entities::{
    AnswerSet, DEFAULT_TARGET_DIR, Question, README_FILE_NAME, RenderContext, RenderDocument,
    TargetPath, overwrite_question, readme_questions,
};

pub use error::{DomainError, ErrorCategory};

pub use validation::Validator;
pub use value_objects::{Field, Licence, Modality};
