//! Answer Collector - drives the question sequence.
//!
//! Questions are asked strictly in order. Each one is re-asked until its
//! validator passes; the rejected input and the validator's message travel
//! with the retried request.

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{PromptRequest, Prompter},
    domain::{AnswerSet, DomainError, Modality, Question},
    error::ReadmeResult,
};

/// Collects a complete [`AnswerSet`] from a [`Prompter`].
pub struct AnswerCollector<'a> {
    prompter: &'a dyn Prompter,
}

impl<'a> AnswerCollector<'a> {
    pub fn new(prompter: &'a dyn Prompter) -> Self {
        Self { prompter }
    }

    /// Ask every question in order and return the finalized answers.
    ///
    /// Fails only if the prompter fails (abort, closed terminal).
    #[instrument(skip_all, fields(questions = questions.len()))]
    pub fn collect(&self, questions: &[Question]) -> ReadmeResult<AnswerSet> {
        let mut answers = AnswerSet::new();
        for question in questions {
            let answer = self.ask(question, &answers)?;
            answers.insert(question.field, answer);
        }
        info!(answers = answers.len(), "Answers collected");
        Ok(answers)
    }

    /// Ask a single question until it yields a valid answer.
    ///
    /// `answers` are the answers given so far; they fill `{field}`
    /// placeholders in the question's default.
    #[instrument(skip_all, fields(field = %question.field))]
    pub fn ask(&self, question: &Question, answers: &AnswerSet) -> ReadmeResult<String> {
        let mut request = PromptRequest::new(question, question.resolved_default(answers));

        if let Modality::Choice(choices) = question.modality {
            let index = self.prompter.select(&request)?;
            let choice = choices.get(index).ok_or(DomainError::ChoiceOutOfRange {
                field: question.field,
                index,
                available: choices.len(),
            })?;
            debug!(choice, "Choice selected");
            return Ok((*choice).to_string());
        }

        let mut rejected = 0usize;
        loop {
            let raw = self.prompter.input(&request)?;
            match question.validate(&raw) {
                Ok(()) => {
                    debug!(rejected, "Answer accepted");
                    return Ok(raw);
                }
                Err(message) => {
                    rejected += 1;
                    debug!(%message, "Answer rejected");
                    request = request.retry(raw, message);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use super::*;
    use crate::application::ports::MockPrompter;
    use crate::domain::{Field, Licence, readme_questions};
    use crate::error::ReadmeError;
    use crate::application::ApplicationError;

    fn name_question() -> Question {
        readme_questions().remove(0)
    }

    #[test]
    fn valid_answer_is_accepted_first_time() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_input()
            .times(1)
            .returning(|_| Ok("Jo".into()));

        let answer = AnswerCollector::new(&prompter)
            .ask(&name_question(), &AnswerSet::new())
            .unwrap();
        assert_eq!(answer, "Jo");
    }

    #[test]
    fn invalid_answer_is_reasked_with_message_and_previous_input() {
        let mut prompter = MockPrompter::new();
        let mut seq = Sequence::new();
        prompter
            .expect_input()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r| r.error.is_none() && r.initial.is_none())
            .returning(|_| Ok("ab".into()));
        prompter
            .expect_input()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r| {
                r.error.as_deref() == Some("Title can not be less than 3 characters.")
                    && r.initial.as_deref() == Some("ab")
            })
            .returning(|_| Ok("abc".into()));

        let title = readme_questions()
            .into_iter()
            .find(|q| q.field == Field::Title)
            .unwrap();
        let answer = AnswerCollector::new(&prompter)
            .ask(&title, &AnswerSet::new())
            .unwrap();
        assert_eq!(answer, "abc");
    }

    #[test]
    fn never_advances_while_invalid() {
        let mut prompter = MockPrompter::new();
        let mut attempts = vec!["", "", "", "Jo"].into_iter();
        prompter
            .expect_input()
            .times(4)
            .returning(move |_| Ok(attempts.next().unwrap_or_default().to_string()));

        let answer = AnswerCollector::new(&prompter)
            .ask(&name_question(), &AnswerSet::new())
            .unwrap();
        assert_eq!(answer, "Jo");
    }

    #[test]
    fn choice_maps_index_to_name() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_select()
            .withf(|r| r.choices().len() == Licence::NAMES.len())
            .times(1)
            .returning(|_| Ok(2));

        let licence = readme_questions()
            .into_iter()
            .find(|q| q.field == Field::Licence)
            .unwrap();
        let answer = AnswerCollector::new(&prompter)
            .ask(&licence, &AnswerSet::new())
            .unwrap();
        assert_eq!(answer, "MIT Licence");
    }

    #[test]
    fn out_of_range_choice_is_error() {
        let mut prompter = MockPrompter::new();
        prompter.expect_select().returning(|_| Ok(99));

        let licence = readme_questions()
            .into_iter()
            .find(|q| q.field == Field::Licence)
            .unwrap();
        let err = AnswerCollector::new(&prompter)
            .ask(&licence, &AnswerSet::new())
            .unwrap_err();
        assert!(matches!(
            err,
            ReadmeError::Domain(DomainError::ChoiceOutOfRange { index: 99, .. })
        ));
    }

    #[test]
    fn default_is_expanded_from_earlier_answers() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_input()
            .withf(|r| r.default.as_deref() == Some("./output/Demo"))
            .times(1)
            .returning(|r| Ok(r.default.clone().unwrap_or_default()));

        let target_dir = readme_questions().pop().unwrap();
        let answers = AnswerSet::new().with(Field::Title, "Demo");
        let answer = AnswerCollector::new(&prompter)
            .ask(&target_dir, &answers)
            .unwrap();
        assert_eq!(answer, "./output/Demo");
    }

    #[test]
    fn collects_every_question_in_order() {
        let mut prompter = MockPrompter::new();
        let mut inputs = vec![
            "Jo",
            "jo@x.com",
            "jo",
            "Demo",
            "A demo.",
            "npm i demo",
            "run it now",
            "",
            "",
            "rust",
            "",
            "./docs",
        ]
        .into_iter();
        prompter
            .expect_input()
            .times(12)
            .returning(move |_| Ok(inputs.next().unwrap_or_default().to_string()));
        prompter.expect_select().times(1).returning(|_| Ok(6));

        let answers = AnswerCollector::new(&prompter)
            .collect(&readme_questions())
            .unwrap();

        assert_eq!(answers.len(), Field::ALL.len());
        assert_eq!(answers.get(Field::Title), "Demo");
        assert_eq!(answers.get(Field::Licence), "No Licence");
        assert_eq!(answers.get(Field::TargetDir), "./docs");
        assert!(answers.validate(&readme_questions()).is_ok());
    }

    #[test]
    fn abort_stops_collection() {
        let mut prompter = MockPrompter::new();
        prompter
            .expect_input()
            .times(1)
            .returning(|_| Err(ApplicationError::Aborted.into()));

        let err = AnswerCollector::new(&prompter)
            .collect(&readme_questions())
            .unwrap_err();
        assert_eq!(err, ReadmeError::Application(ApplicationError::Aborted));
    }
}
