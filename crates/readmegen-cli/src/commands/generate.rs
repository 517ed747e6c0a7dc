//! Implementation of the `readmegen generate` command.
//!
//! Responsibility: pick the answer source, call the core service, and report
//! the write outcome. No business logic lives here.

use std::path::Path;

use chrono::Datelike as _;
use tracing::{debug, info, instrument, warn};

use readmegen_adapters::{LocalFilesystem, MarkdownRenderer};
use readmegen_core::{
    application::{Published, ReadmeService, WriteOutcome, ports::Prompter},
    domain::{AnswerSet, Question, RenderContext},
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `readmegen generate` command.
///
/// 1. Collect answers (prompt, or replay `--answers`)
/// 2. Save them if `--save-answers` was given
/// 3. Render; print and stop on `--dry-run`
/// 4. Write README.md, reporting write failures without failing the run
#[instrument(skip_all, fields(dry_run = args.dry_run))]
pub fn execute(
    args: GenerateArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let questions = config.questions();
    let service = ReadmeService::new(
        prompter(&output),
        Box::new(MarkdownRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    let answers = match &args.answers {
        Some(path) => load_answers(path, &questions)?,
        None => {
            ensure_interactive()?;
            service.collect(&questions)?
        }
    };
    debug!(answers = answers.len(), "Answers ready");

    if let Some(path) = &args.save_answers {
        save_answers(path, &answers)?;
        output.info(&format!("Saved answers to {}", path.display()))?;
    }

    let context = RenderContext::new(chrono::Local::now().year());

    if args.dry_run {
        let document = service.render(&answers, &context)?;
        output.document(document.as_str())?;
        return Ok(());
    }

    match service.publish(&answers, &context) {
        Ok(published) => report(&published, &output),
        Err(e) if e.is_write_failure() => {
            warn!(error = %e, "Write failed");
            output.error(&format!("Failed to write file\nError text: {e}"))?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn report(published: &Published, output: &OutputManager) -> CliResult<()> {
    let file = published.target.file().display();
    match published.outcome {
        WriteOutcome::CreatedDirectory => {
            output.success(&format!(
                "Successfully created path: {}",
                published.target.directory().display()
            ))?;
            output.success(&format!("Successfully wrote file as {file}"))?;
        }
        WriteOutcome::Written => output.success(&format!("Successfully wrote file as {file}"))?,
        WriteOutcome::Overwritten => output.success(&format!("Successfully overwrote file {file}"))?,
    }
    info!(path = %file, outcome = ?published.outcome, "README written");
    Ok(())
}

#[cfg(feature = "interactive")]
fn prompter(output: &OutputManager) -> Box<dyn Prompter> {
    Box::new(crate::prompt::TerminalPrompter::new(!output.supports_color()))
}

// Without a terminal prompter any question (the overwrite check included)
// fails with `PromptFailed`.
#[cfg(not(feature = "interactive"))]
fn prompter(_output: &OutputManager) -> Box<dyn Prompter> {
    Box::new(readmegen_adapters::ScriptedPrompter::empty())
}

fn ensure_interactive() -> CliResult<()> {
    if cfg!(feature = "interactive") {
        Ok(())
    } else {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

/// Read an answers file and check it exactly like typed answers.
///
/// Blank or missing answers take the question's default, as an empty
/// prompt submission would.
pub fn load_answers(path: &Path, questions: &[Question]) -> CliResult<AnswerSet> {
    let raw = std::fs::read_to_string(path)
        .with_cli_context(|| format!("Failed to read answers from {}", path.display()))?;

    let mut answers: AnswerSet =
        serde_json::from_str(&raw).map_err(|e| CliError::InvalidAnswers {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    for question in questions {
        if !answers.get(question.field).is_empty() {
            continue;
        }
        if let Some(default) = question.resolved_default(&answers) {
            answers.insert(question.field, default);
        }
    }

    answers
        .validate(questions)
        .map_err(|e| CliError::InvalidAnswers {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(answers)
}

fn save_answers(path: &Path, answers: &AnswerSet) -> CliResult<()> {
    let json = serde_json::to_string_pretty(answers).map_err(|e| CliError::InvalidInput {
        message: format!("Failed to serialise answers: {e}"),
        source: Some(Box::new(e)),
    })?;
    std::fs::write(path, json)
        .with_cli_context(|| format!("Failed to save answers to {}", path.display()))
}
