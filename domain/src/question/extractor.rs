//! Clarifying-question extraction from free-form model output.
//!
//! Models asked for "a list of questions" answer with bullets, numbered
//! lists, `Q:` prefixes or plain lines, often mixed. Each non-blank line is
//! classified once and stripped of exactly one marker:
//!
//! | Marker | Example | Stripping |
//! |--------|---------|-----------|
//! | Bullet | `- Age range?` / `* Age range?` | drop the two marker characters |
//! | Digit | `1. What device?` | keep what follows the first `.`; no `.` is an error |
//! | `Q:` | `Q: Any comparator?` | keep what follows the first `:` |
//! | Bare | `Free line` | kept as is |
//!
//! Markers are checked in the order bullet, digit, `Q:`, so a line can
//! never be stripped twice. A line opening with a digit is read as a list
//! item, so `1) ...` or `3D-printed ...` fails the whole extraction.

use super::entities::QuestionList;
use crate::envelope::ResponseEnvelope;
use thiserror::Error;

/// Reasons a completion yields no questions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Empty response from model")]
    EmptyResponse,

    #[error("No valid questions generated")]
    NoValidQuestions,

    #[error("Numbered line without a period: {line:?}")]
    UnterminatedNumber { line: String },
}

/// Line marker recognised by the extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Bullet,
    Digit,
    QPrefix,
    Bare,
}

impl Marker {
    fn classify(line: &str) -> Self {
        if line.starts_with("- ") || line.starts_with("* ") {
            Marker::Bullet
        } else if line.starts_with(char::is_numeric) {
            Marker::Digit
        } else if line.starts_with("Q:") {
            Marker::QPrefix
        } else {
            Marker::Bare
        }
    }

    fn strip(self, line: &str) -> Result<&str, ExtractError> {
        Ok(match self {
            // Both bullet markers are two ASCII bytes.
            Marker::Bullet => line[2..].trim(),
            Marker::Digit => line
                .split_once('.')
                .map(|(_, rest)| rest.trim())
                .ok_or_else(|| ExtractError::UnterminatedNumber {
                    line: line.to_string(),
                })?,
            Marker::QPrefix => line
                .split_once(':')
                .map_or(line, |(_, rest)| rest.trim()),
            Marker::Bare => line,
        })
    }
}

/// Converts a multi-line completion into an ordered [`QuestionList`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionExtractor;

impl QuestionExtractor {
    /// Extract questions, reporting failures as typed errors.
    pub fn extract(raw: &str) -> Result<QuestionList, ExtractError> {
        if raw.trim().is_empty() {
            return Err(ExtractError::EmptyResponse);
        }

        let mut questions = Vec::new();
        for line in raw.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let question = Marker::classify(line).strip(line)?;
            if !question.is_empty() {
                questions.push(question.to_string());
            }
        }

        if questions.is_empty() {
            return Err(ExtractError::NoValidQuestions);
        }

        Ok(QuestionList::new(questions))
    }

    /// Extract questions into a response envelope.
    ///
    /// Failures carry an empty question list as their fallback payload.
    pub fn parse(raw: &str) -> ResponseEnvelope<QuestionList> {
        match Self::extract(raw) {
            Ok(list) => ResponseEnvelope::success(list),
            Err(e) => ResponseEnvelope::failure(e.to_string(), QuestionList::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(raw: &str) -> Vec<String> {
        QuestionExtractor::extract(raw).unwrap().into_questions()
    }

    #[test]
    fn test_mixed_markers_in_order() {
        let raw = "1. What device type?\n- Age range?\nQ: Any comparator?\nFree line";
        assert_eq!(
            questions(raw),
            ["What device type?", "Age range?", "Any comparator?", "Free line"]
        );
    }

    #[test]
    fn test_star_bullets_and_blank_lines() {
        let raw = "\n* First?\n\n   * Second?   \n";
        assert_eq!(questions(raw), ["First?", "Second?"]);
    }

    #[test]
    fn test_digit_splits_on_first_dot_only() {
        assert_eq!(
            questions("10. Is version 2.1 of the device in scope?"),
            ["Is version 2.1 of the device in scope?"]
        );
    }

    #[test]
    fn test_digit_without_dot_fails() {
        assert_eq!(
            QuestionExtractor::extract("1. Fine?\n2) Which outcome?"),
            Err(ExtractError::UnterminatedNumber {
                line: "2) Which outcome?".to_string()
            })
        );
    }

    #[test]
    fn test_digit_without_dot_becomes_failure_envelope() {
        let envelope = QuestionExtractor::parse("1) Which outcome?\n3D-printed implants only?");
        assert!(!envelope.is_success());
        assert_eq!(
            envelope.error(),
            Some("Numbered line without a period: \"1) Which outcome?\"")
        );
        assert!(envelope.payload().is_empty());
    }

    #[test]
    fn test_unicode_digit_marker() {
        assert_eq!(questions("２. Which outcome?"), ["Which outcome?"]);
        assert_eq!(questions("٣. Which comparator?"), ["Which comparator?"]);
    }

    #[test]
    fn test_q_prefix_splits_on_first_colon() {
        assert_eq!(
            questions("Q: Outcome: mortality or morbidity?"),
            ["Outcome: mortality or morbidity?"]
        );
    }

    #[test]
    fn test_bullet_takes_precedence_over_q_prefix() {
        // Stripped once as a bullet; the "Q:" survives.
        assert_eq!(questions("- Q: Which body part?"), ["Q: Which body part?"]);
    }

    #[test]
    fn test_marker_only_lines_are_dropped() {
        let raw = "1.\nQ:\nWhat population?";
        assert_eq!(questions(raw), ["What population?"]);
    }

    #[test]
    fn test_lone_dash_is_a_bare_line() {
        // "- " trims to "-", which no longer carries the bullet marker.
        assert_eq!(questions("- \nWhat population?"), ["-", "What population?"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(questions("1. One?\r\n2. Two?\r\n"), ["One?", "Two?"]);
    }

    #[test]
    fn test_empty_input_fails() {
        let envelope = QuestionExtractor::parse("");
        assert_eq!(envelope.error(), Some("Empty response from model"));
        assert!(envelope.payload().is_empty());
    }

    #[test]
    fn test_whitespace_input_fails_as_empty() {
        assert_eq!(
            QuestionExtractor::extract(" \n\t\n"),
            Err(ExtractError::EmptyResponse)
        );
    }

    #[test]
    fn test_only_markers_fails_as_no_valid_questions() {
        let envelope = QuestionExtractor::parse("1.\n2.\nQ:");
        assert_eq!(envelope.error(), Some("No valid questions generated"));
    }

    #[test]
    fn test_no_truncation_beyond_requested_max() {
        let raw = (1..=7)
            .map(|i| format!("{i}. Question {i}?"))
            .collect::<Vec<_>>()
            .join("\n");
        let list = QuestionExtractor::extract(&raw).unwrap();
        assert_eq!(list.len(), 7);
        assert!(list.exceeds_requested_max());
    }
}
