//! README Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Collect answers
//! 2. Render the document
//! 3. Resolve the target path and write, confirming overwrites

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError, AnswerCollector,
        ports::{DocumentRenderer, Filesystem, Prompter},
    },
    domain::{AnswerSet, Question, RenderContext, RenderDocument, TargetPath, overwrite_question},
    error::ReadmeResult,
};

/// What the write step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The directory was missing; it was created and the file written.
    CreatedDirectory,
    /// The directory existed and the file did not.
    Written,
    /// The file existed and the user confirmed the overwrite.
    Overwritten,
}

/// Result of [`ReadmeService::publish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published {
    pub target: TargetPath,
    pub outcome: WriteOutcome,
}

/// Main README service.
pub struct ReadmeService {
    prompter: Box<dyn Prompter>,
    renderer: Box<dyn DocumentRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ReadmeService {
    /// Create a new service with the given adapters.
    pub fn new(
        prompter: Box<dyn Prompter>,
        renderer: Box<dyn DocumentRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            prompter,
            renderer,
            filesystem,
        }
    }

    /// Ask `questions` through the service's prompter.
    pub fn collect(&self, questions: &[Question]) -> ReadmeResult<AnswerSet> {
        AnswerCollector::new(self.prompter.as_ref()).collect(questions)
    }

    /// Render `answers` to Markdown.
    pub fn render(
        &self,
        answers: &AnswerSet,
        context: &RenderContext,
    ) -> ReadmeResult<RenderDocument> {
        self.renderer.render(answers, context)
    }

    /// Render `answers` and write them to the target directory they name.
    #[instrument(skip_all)]
    pub fn publish(&self, answers: &AnswerSet, context: &RenderContext) -> ReadmeResult<Published> {
        let document = self.render(answers, context)?;
        let target = TargetPath::from_answers(answers);
        let outcome = self.write(&target, &document)?;
        Ok(Published { target, outcome })
    }

    /// Persist `document` at `target`.
    ///
    /// - directory missing: create it (recursively), then write
    /// - file absent: write
    /// - file present: ask the overwrite question; `n` aborts the write
    #[instrument(skip_all, fields(target = %target))]
    pub fn write(&self, target: &TargetPath, document: &RenderDocument) -> ReadmeResult<WriteOutcome> {
        if !self.filesystem.exists(target.directory()) {
            self.filesystem.create_dir_all(target.directory())?;
            info!(directory = %target.directory().display(), "Created directory");
            self.filesystem.write_file(target.file(), document.as_str())?;
            return Ok(WriteOutcome::CreatedDirectory);
        }

        if self.filesystem.exists(target.file()) {
            if !self.confirm_overwrite()? {
                warn!("Overwrite declined");
                return Err(ApplicationError::WriteAborted {
                    path: target.file().to_path_buf(),
                }
                .into());
            }
            self.filesystem.write_file(target.file(), document.as_str())?;
            info!("Overwrote existing file");
            return Ok(WriteOutcome::Overwritten);
        }

        self.filesystem.write_file(target.file(), document.as_str())?;
        info!("Wrote file");
        Ok(WriteOutcome::Written)
    }

    fn confirm_overwrite(&self) -> ReadmeResult<bool> {
        let answer = AnswerCollector::new(self.prompter.as_ref())
            .ask(&overwrite_question(), &AnswerSet::new())?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }
}
