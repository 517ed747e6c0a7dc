//! Prompter adapters.
//!
//! The interactive terminal prompter lives in the CLI crate, next to
//! dialoguer. This module holds the non-interactive ones.

mod scripted;

pub use scripted::ScriptedPrompter;
