//! Terminal prompter backed by `dialoguer`.

use std::io;

use console::Term;
use dialoguer::{Editor, Input, Select, theme::ColorfulTheme};
use owo_colors::OwoColorize;
use tracing::trace;

use readmegen_core::{
    application::{
        ApplicationError,
        ports::{PromptRequest, Prompter},
    },
    domain::Modality,
    error::ReadmeResult,
};

/// Asks questions on the controlling terminal.
///
/// Line questions use an inline input, multi-line questions open `$EDITOR`
/// and choices render as an arrow-key menu.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
    term: Term,
    no_color: bool,
}

impl TerminalPrompter {
    pub fn new(no_color: bool) -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stderr(),
            no_color,
        }
    }

    fn show_rejection(&self, request: &PromptRequest) -> ReadmeResult<()> {
        let Some(error) = request.error.as_deref() else {
            return Ok(());
        };
        let line = if self.no_color {
            format!("\u{2717} {error}")
        } else {
            format!("{} {}", "\u{2717}".red().bold(), error.red())
        };
        self.term.write_line(&line).map_err(prompt_failed)
    }

    fn line(&self, request: &PromptRequest) -> ReadmeResult<String> {
        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(request.message.as_str())
            .allow_empty(true);
        if let Some(default) = &request.default {
            input = input.default(default.clone());
        }
        if let Some(initial) = &request.initial {
            input = input.with_initial_text(initial.as_str());
        }
        input.interact_text_on(&self.term).map_err(dialoguer_error)
    }

    fn multiline(&self, request: &PromptRequest) -> ReadmeResult<String> {
        self.term
            .write_line(&format!("{} (opens your editor)", request.message))
            .map_err(prompt_failed)?;

        let seed = request
            .initial
            .as_deref()
            .or(request.default.as_deref())
            .unwrap_or_default();
        let edited = Editor::new().edit(seed).map_err(dialoguer_error)?;

        // Closing the editor without saving keeps the default.
        let text = match edited {
            Some(text) => text,
            None => request.default.clone().unwrap_or_default(),
        };
        Ok(text.trim_end().to_string())
    }
}

impl Prompter for TerminalPrompter {
    fn input(&self, request: &PromptRequest) -> ReadmeResult<String> {
        self.show_rejection(request)?;
        let answer = match request.modality {
            Modality::Multiline => self.multiline(request)?,
            Modality::Line | Modality::Choice(_) => self.line(request)?,
        };
        trace!(message = %request.message, "Answer received");
        Ok(answer)
    }

    fn select(&self, request: &PromptRequest) -> ReadmeResult<usize> {
        let choices = request.choices();
        let default = request
            .default
            .as_deref()
            .and_then(|default| choices.iter().position(|choice| *choice == default))
            .unwrap_or(0);

        Select::with_theme(&self.theme)
            .with_prompt(request.message.as_str())
            .items(choices)
            .default(default)
            .interact_on(&self.term)
            .map_err(dialoguer_error)
    }
}

fn dialoguer_error(err: dialoguer::Error) -> readmegen_core::error::ReadmeError {
    match err {
        dialoguer::Error::IO(e) => prompt_failed(e),
    }
}

fn prompt_failed(err: io::Error) -> readmegen_core::error::ReadmeError {
    match err.kind() {
        io::ErrorKind::Interrupted => ApplicationError::Aborted.into(),
        _ => ApplicationError::PromptFailed {
            reason: err.to_string(),
        }
        .into(),
    }
}
