//! Question descriptors and the fixed README question list.

use std::borrow::Cow;

use crate::domain::{
    entities::answers::AnswerSet,
    value_objects::{Field, Licence, Modality},
    validation::{self, Validator},
};

/// Default target directory, expanded against the answers given so far.
pub const DEFAULT_TARGET_DIR: &str = "./output/{title}";

/// One question in the collection sequence.
///
/// Immutable once built; the `with_*` methods consume and return a new value
/// so callers can adjust defaults from configuration before collection starts.
#[derive(Debug, Clone)]
pub struct Question {
    pub field: Field,
    pub message: Cow<'static, str>,
    pub modality: Modality,
    pub default: Option<Cow<'static, str>>,
    pub validator: Option<Validator>,
}

impl Question {
    pub fn new(field: Field, message: impl Into<Cow<'static, str>>, modality: Modality) -> Self {
        Self {
            field,
            message: message.into(),
            modality,
            default: None,
            validator: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Cow<'static, str>>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Run the validator. Questions without one accept anything.
    pub fn validate(&self, input: &str) -> Result<(), String> {
        match self.validator {
            Some(validator) => validator(input),
            None => Ok(()),
        }
    }

    /// Default with `{field}` placeholders replaced by earlier answers.
    pub fn resolved_default(&self, answers: &AnswerSet) -> Option<String> {
        let template = self.default.as_deref()?;
        let mut out = template.to_string();
        for (field, value) in answers.iter() {
            let placeholder = format!("{{{}}}", field.as_str());
            if out.contains(&placeholder) {
                out = out.replace(&placeholder, value);
            }
        }
        Some(out)
    }

    /// Index of the default among the choices, if this is a choice question.
    pub fn default_choice(&self) -> Option<usize> {
        let default = self.default.as_deref()?;
        self.modality
            .choices()
            .iter()
            .position(|choice| *choice == default)
    }
}

/// The README question list, in the order it is asked.
pub fn readme_questions() -> Vec<Question> {
    vec![
        Question::new(
            Field::Name,
            "Please enter your full name (for copyright marks):",
            Modality::Line,
        )
        .with_validator(validation::name),
        Question::new(
            Field::Email,
            "Please enter your email address:",
            Modality::Line,
        )
        .with_validator(validation::email),
        Question::new(
            Field::Github,
            "Provide your Github username:",
            Modality::Line,
        )
        .with_validator(validation::github),
        Question::new(Field::Title, "Title of project:", Modality::Line)
            .with_validator(validation::title),
        Question::new(
            Field::Description,
            "Please enter a brief description of your project:",
            Modality::Multiline,
        )
        .with_validator(validation::description),
        Question::new(
            Field::Installation,
            "Please describe the installation process for your project:",
            Modality::Multiline,
        )
        .with_default("1. \n2. \n3. ")
        .with_validator(validation::installation),
        Question::new(
            Field::Usage,
            "Provide some usage examples for your project:",
            Modality::Multiline,
        )
        .with_default("```\n\n```")
        .with_validator(validation::usage),
        Question::new(
            Field::Tests,
            "Provide an overview of how to test the application:",
            Modality::Multiline,
        ),
        Question::new(
            Field::Collaborators,
            "Name your project contributors, separated with commas:",
            Modality::Line,
        ),
        // Accepts anything, empty included.
        Question::new(
            Field::Tech,
            "List the technologies that you used in the project, separated with commas:",
            Modality::Line,
        ),
        Question::new(
            Field::Licence,
            "Select a licence to apply to the project:",
            Modality::Choice(&Licence::NAMES),
        ),
        Question::new(
            Field::Contribute,
            "Describe the contribution guidelines for the project:",
            Modality::Multiline,
        ),
        Question::new(
            Field::TargetDir,
            "What directory do you want to write the output to?",
            Modality::Line,
        )
        .with_default(DEFAULT_TARGET_DIR)
        .with_validator(validation::target_dir),
    ]
}

/// Asked by the write service when `README.md` already exists.
pub fn overwrite_question() -> Question {
    Question::new(
        Field::TargetDir,
        "File already exists, do you want to overwrite? (y for yes, n for no)",
        Modality::Line,
    )
    .with_validator(validation::yes_no)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn questions_follow_field_order() {
        let fields: Vec<Field> = readme_questions().iter().map(|q| q.field).collect();
        assert_eq!(fields, Field::ALL.to_vec());
    }

    #[test]
    fn licence_question_offers_seven_choices() {
        let questions = readme_questions();
        let licence = questions
            .iter()
            .find(|q| q.field == Field::Licence)
            .unwrap();
        let choices = licence.modality.choices();
        assert_eq!(choices.len(), 7);
        assert!(choices.contains(&"No Licence"));
        assert!(choices.contains(&"MIT Licence"));
    }

    #[test]
    fn unvalidated_questions_accept_empty() {
        for q in readme_questions() {
            if matches!(
                q.field,
                Field::Tests | Field::Collaborators | Field::Tech | Field::Contribute
            ) {
                assert!(q.validate("").is_ok(), "{} should accept empty", q.field);
            }
        }
    }

    #[test]
    fn target_dir_default_expands_title() {
        let question = readme_questions().pop().unwrap();
        let answers = AnswerSet::new().with(Field::Title, "Demo");
        assert_eq!(
            question.resolved_default(&answers).as_deref(),
            Some("./output/Demo")
        );
    }

    #[test]
    fn default_without_answers_keeps_placeholder() {
        let question = readme_questions().pop().unwrap();
        assert_eq!(
            question.resolved_default(&AnswerSet::new()).as_deref(),
            Some(DEFAULT_TARGET_DIR)
        );
    }

    #[test]
    fn default_choice_finds_configured_licence() {
        let question = Question::new(
            Field::Licence,
            "licence",
            Modality::Choice(&Licence::NAMES),
        )
        .with_default("MIT Licence");
        assert_eq!(question.default_choice(), Some(2));

        let unknown = question.with_default("WTFPL");
        assert_eq!(unknown.default_choice(), None);
    }

    #[test]
    fn overwrite_question_only_takes_y_or_n() {
        let q = overwrite_question();
        assert!(q.validate("y").is_ok());
        assert!(q.validate("N").is_ok());
        assert!(q.validate("maybe").is_err());
    }
}
