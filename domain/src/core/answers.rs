//! Answers to the clarifying questions

use super::error::DomainError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Reviewer answers keyed by the clarifying question they respond to.
///
/// Forwarded verbatim (as JSON) into the query prompt, in the order the
/// questions were answered. An empty set is valid: the reviewer may skip
/// the clarification step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(IndexMap<String, String>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse answers from a JSON object of string values.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|_| DomainError::InvalidAnswers)
    }

    pub fn with_answer(mut self, question: impl Into<String>, answer: impl Into<String>) -> Self {
        self.0.insert(question.into(), answer.into());
        self
    }

    /// JSON rendering used inside prompts.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn get(&self, question: &str) -> Option<&str> {
        self.0.get(question).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for Answers {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_object() {
        let answers =
            Answers::from_json(r#"{"What device type?": "Insulin pump", "Age range?": "Adults"}"#)
                .unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get("Age range?"), Some("Adults"));
    }

    #[test]
    fn test_from_json_rejects_non_objects() {
        assert_eq!(Answers::from_json("[1, 2]"), Err(DomainError::InvalidAnswers));
        assert_eq!(Answers::from_json("not json"), Err(DomainError::InvalidAnswers));
        assert_eq!(
            Answers::from_json(r#"{"q": 3}"#),
            Err(DomainError::InvalidAnswers)
        );
    }

    #[test]
    fn test_to_json_keeps_answer_order() {
        let answers = Answers::new()
            .with_answer("b", "2")
            .with_answer("a", "1");
        assert_eq!(answers.to_json(), r#"{"b":"2","a":"1"}"#);
        assert_eq!(Answers::new().to_json(), "{}");
    }

    #[test]
    fn test_from_json_keeps_input_order() {
        let answers =
            Answers::from_json(r#"{"Which device?": "Pump", "Age range?": "Adults"}"#).unwrap();
        assert_eq!(
            answers.to_json(),
            r#"{"Which device?":"Pump","Age range?":"Adults"}"#
        );
    }
}
