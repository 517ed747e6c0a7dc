//! readmegen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the readmegen
//! README generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          readmegen-cli (CLI)            │
//! │   (dialoguer prompter, config, output)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (AnswerCollector, ReadmeService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │  (Prompter, Filesystem, DocumentRenderer)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   readmegen-adapters (Infrastructure)   │
//! │ (LocalFilesystem, MarkdownRenderer, ..) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Question, AnswerSet, Licence, Target)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use readmegen_core::{
//!     application::{AnswerCollector, ReadmeService},
//!     domain::{RenderContext, TargetPath, readme_questions},
//! };
//!
//! // 1. Collect answers through a prompter
//! let answers = AnswerCollector::new(&prompter).collect(&readme_questions())?;
//!
//! // 2. Render and write through the service (with injected adapters)
//! let service = ReadmeService::new(prompter, renderer, filesystem);
//! let document = service.render(&answers, &RenderContext::new(2026))?;
//! let target = TargetPath::from_answers(&answers);
//! service.write(&target, &document)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AnswerCollector, ReadmeService, WriteOutcome,
        ports::{DocumentRenderer, Filesystem, PromptRequest, Prompter},
    };
    pub use crate::domain::{
        AnswerSet, Field, Licence, Modality, Question, RenderContext, RenderDocument, TargetPath,
        overwrite_question, readme_questions,
    };
    pub use crate::error::{ReadmeError, ReadmeResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
