//! Clarifying question list

use serde::{Deserialize, Serialize};

/// Ordered clarifying questions extracted from one completion.
///
/// The default value (no questions) is the fallback payload of a failed
/// extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionList {
    questions: Vec<String>,
}

impl QuestionList {
    /// Number of questions the prompt asks the model for.
    ///
    /// Advisory only: the extractor does not truncate to it.
    pub const REQUESTED_MAX: usize = 5;

    pub fn new(questions: Vec<String>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<String> {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Whether the model ignored the requested upper bound.
    pub fn exceeds_requested_max(&self) -> bool {
        self.questions.len() > Self::REQUESTED_MAX
    }

    /// Keep at most `max` questions, dropping from the end.
    pub fn truncate(&mut self, max: usize) {
        self.questions.truncate(max);
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.questions.iter().map(String::as_str)
    }
}
