//! Prompter that replays a fixed script of answers.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use readmegen_core::{
    application::{
        ApplicationError,
        ports::{PromptRequest, Prompter},
    },
    error::ReadmeResult,
};
use tracing::debug;

/// Answers questions from a queue, the way a user typing them would.
///
/// - empty input yields the request's default, like a terminal prompt
/// - a choice is answered by its text or its index
/// - running out of answers fails with `PromptFailed`
///
/// Clones share the queue and the request log.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    inner: Arc<Mutex<ScriptedInner>>,
}

#[derive(Debug, Default)]
struct ScriptedInner {
    script: VecDeque<String>,
    requests: Vec<PromptRequest>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(script: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inner: Arc::new(Mutex::new(ScriptedInner {
                script: script.into_iter().map(Into::into).collect(),
                requests: Vec::new(),
            })),
        }
    }

    /// A prompter with nothing to say; every question fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every request seen so far, in order.
    pub fn requests(&self) -> Vec<PromptRequest> {
        self.inner
            .lock()
            .map(|inner| inner.requests.clone())
            .unwrap_or_default()
    }

    /// Answers not consumed yet.
    pub fn remaining(&self) -> usize {
        self.inner
            .lock()
            .map(|inner| inner.script.len())
            .unwrap_or_default()
    }

    fn next(&self, request: &PromptRequest) -> ReadmeResult<String> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::AdapterUnavailable { name: "scripted prompter" })?;
        inner.requests.push(request.clone());
        let answer = inner
            .script
            .pop_front()
            .ok_or_else(|| ApplicationError::PromptFailed {
                reason: format!("no answer available for \"{}\"", request.message),
            })?;
        debug!(message = %request.message, %answer, "Scripted answer");
        Ok(answer)
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, request: &PromptRequest) -> ReadmeResult<String> {
        let answer = self.next(request)?;
        match (&request.default, answer.is_empty()) {
            (Some(default), true) => Ok(default.clone()),
            _ => Ok(answer),
        }
    }

    fn select(&self, request: &PromptRequest) -> ReadmeResult<usize> {
        let answer = self.next(request)?;
        let choices = request.choices();

        let by_text = |text: &str| choices.iter().position(|choice| *choice == text);
        let index = if answer.is_empty() {
            request.default.as_deref().and_then(by_text).or(Some(0))
        } else {
            by_text(&answer).or_else(|| answer.parse().ok())
        };

        index.ok_or_else(|| {
            ApplicationError::PromptFailed {
                reason: format!("\"{answer}\" is not one of the choices"),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use readmegen_core::domain::{Field, Licence, Modality, Question};
    use readmegen_core::error::ReadmeError;

    fn line(default: Option<&str>) -> PromptRequest {
        let question = Question::new(Field::Title, "Title of project:", Modality::Line);
        PromptRequest::new(&question, default.map(String::from))
    }

    fn licence(default: Option<&str>) -> PromptRequest {
        let question = Question::new(Field::Licence, "licence", Modality::Choice(&Licence::NAMES));
        PromptRequest::new(&question, default.map(String::from))
    }

    #[test]
    fn answers_in_order_and_records_requests() {
        let prompter = ScriptedPrompter::new(["one", "two"]);
        assert_eq!(prompter.input(&line(None)).unwrap(), "one");
        assert_eq!(prompter.input(&line(None)).unwrap(), "two");
        assert_eq!(prompter.requests().len(), 2);
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn empty_answer_takes_default() {
        let prompter = ScriptedPrompter::new([""]);
        assert_eq!(prompter.input(&line(Some("./output/Demo"))).unwrap(), "./output/Demo");
    }

    #[test]
    fn select_by_text_index_or_default() {
        let prompter = ScriptedPrompter::new(["MIT Licence", "6", ""]);
        assert_eq!(prompter.select(&licence(None)).unwrap(), 2);
        assert_eq!(prompter.select(&licence(None)).unwrap(), 6);
        assert_eq!(prompter.select(&licence(Some("GNU GPL 3.0"))).unwrap(), 1);
    }

    #[test]
    fn unknown_choice_fails() {
        let prompter = ScriptedPrompter::new(["WTFPL"]);
        assert!(prompter.select(&licence(None)).is_err());
    }

    #[test]
    fn exhausted_script_fails_with_prompt_error() {
        let err = ScriptedPrompter::empty().input(&line(None)).unwrap_err();
        assert!(matches!(
            err,
            ReadmeError::Application(ApplicationError::PromptFailed { .. })
        ));
    }
}
