//! The answer set produced by collection and consumed by rendering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::question::Question,
    error::DomainError,
    value_objects::{Field, Licence},
};

/// Mapping from question field to answer.
///
/// Keys iterate in question order. Missing fields read as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<Field, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: Field, value: impl Into<String>) {
        self.answers.insert(field, value.into());
    }

    pub fn get(&self, field: Field) -> &str {
        self.answers.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, field: Field) -> bool {
        self.answers.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.answers.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Parsed licence answer.
    pub fn licence(&self) -> Result<Licence, DomainError> {
        self.get(Field::Licence).parse()
    }

    /// Comma-separated answer split into trimmed, non-empty entries.
    pub fn list(&self, field: Field) -> Vec<&str> {
        self.get(field)
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect()
    }

    /// Check every question's answer as if it had just been typed in.
    ///
    /// Used for answer sets that did not come through the collector
    /// (e.g. a replayed answers file). Missing answers validate as empty.
    pub fn validate(&self, questions: &[Question]) -> Result<(), DomainError> {
        for question in questions {
            let value = self.get(question.field);
            question
                .validate(value)
                .map_err(|message| DomainError::InvalidAnswer {
                    field: question.field,
                    message,
                })?;

            let choices = question.modality.choices();
            if !choices.is_empty() && !choices.contains(&value) {
                return Err(DomainError::InvalidAnswer {
                    field: question.field,
                    message: format!("must be one of: {}", choices.join(", ")),
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(Field, String)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::question::readme_questions;

    fn valid() -> AnswerSet {
        AnswerSet::new()
            .with(Field::Name, "Jo")
            .with(Field::Email, "jo@x.com")
            .with(Field::Github, "jo")
            .with(Field::Title, "Demo")
            .with(Field::Description, "A demo.")
            .with(Field::Installation, "npm i demo run")
            .with(Field::Usage, "run it now")
            .with(Field::Licence, "MIT Licence")
            .with(Field::Collaborators, "")
            .with(Field::TargetDir, "./docs")
    }

    #[test]
    fn missing_field_reads_empty() {
        let answers = AnswerSet::new();
        assert_eq!(answers.get(Field::Tests), "");
        assert!(!answers.contains(Field::Tests));
    }

    #[test]
    fn iterates_in_question_order() {
        let answers = AnswerSet::new()
            .with(Field::TargetDir, "./x")
            .with(Field::Name, "Jo")
            .with(Field::Title, "Demo");
        let order: Vec<Field> = answers.iter().map(|(f, _)| f).collect();
        assert_eq!(order, vec![Field::Name, Field::Title, Field::TargetDir]);
    }

    #[test]
    fn list_trims_and_drops_empty_entries() {
        let answers = AnswerSet::new().with(Field::Tech, " rust, ,serde ,");
        assert_eq!(answers.list(Field::Tech), vec!["rust", "serde"]);
        assert!(AnswerSet::new().list(Field::Collaborators).is_empty());
    }

    #[test]
    fn valid_answers_pass_validation() {
        assert!(valid().validate(&readme_questions()).is_ok());
    }

    #[test]
    fn invalid_email_is_reported_with_field() {
        let answers = valid().with(Field::Email, "foo@bar");
        let err = answers.validate(&readme_questions()).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidAnswer {
                field: Field::Email,
                message: "Please enter a valid email address.".into(),
            }
        );
    }

    #[test]
    fn unknown_licence_fails_validation() {
        let answers = valid().with(Field::Licence, "WTFPL");
        assert!(matches!(
            answers.validate(&readme_questions()),
            Err(DomainError::InvalidAnswer {
                field: Field::Licence,
                ..
            })
        ));
    }

    #[test]
    fn json_uses_field_names() {
        let json = serde_json::to_string(&AnswerSet::new().with(Field::TargetDir, "./out")).unwrap();
        assert_eq!(json, r#"{"targetDir":"./out"}"#);

        let parsed: AnswerSet = serde_json::from_str(r#"{"title":"Demo","licence":"No Licence"}"#).unwrap();
        assert_eq!(parsed.get(Field::Title), "Demo");
        assert_eq!(parsed.licence().unwrap(), Licence::None);
    }
}
