//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! collect → render → write workflow.

pub mod collector;
pub mod readme_service;

pub use collector::AnswerCollector;
pub use readme_service::{Published, ReadmeService, WriteOutcome};
