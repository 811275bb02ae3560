//! Console output formatter for pipeline results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use slr_domain::{DecodeSource, QueryStructure, QuestionList, ResponseEnvelope};

/// Formats pipeline results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Numbered list of clarifying questions
    pub fn format_questions(envelope: &ResponseEnvelope<QuestionList>) -> String {
        let mut output = Self::error_line(envelope.error());
        let questions = envelope.payload();

        if questions.is_empty() {
            if envelope.is_success() {
                output.push_str(&format!("{}\n", "No questions.".dimmed()));
            }
            return output;
        }

        output.push_str(&format!("{}\n", "Clarifying questions:".cyan().bold()));
        for (i, question) in questions.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, question));
        }
        output
    }

    /// Subquery table followed by the rendered boolean query
    pub fn format_query(
        envelope: &ResponseEnvelope<QueryStructure>,
        source: Option<DecodeSource>,
    ) -> String {
        let mut output = Self::error_line(envelope.error());
        let structure = envelope.payload();

        output.push_str(&format!("{}\n", "Subqueries:".cyan().bold()));
        for (i, subquery) in structure.subqueries().iter().enumerate() {
            output.push_str(&format!(
                "  {}. {:<4} {}\n",
                i + 1,
                subquery.operator.as_str().yellow(),
                subquery.content
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Query:".cyan().bold(),
            structure.to_query_string()
        ));

        if let Some(source) = source.filter(|s| s.degraded) {
            output.push_str(&format!(
                "{}\n",
                format!("(model output was not valid JSON; decoded via {})", source.strategy)
                    .dimmed()
            ));
        }
        output
    }

    fn error_line(error: Option<&str>) -> String {
        match error {
            Some(e) => format!("{} {}\n", "Error:".red().bold(), e),
            None => String::new(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_questions(&self, envelope: &ResponseEnvelope<QuestionList>) -> String {
        Self::format_questions(envelope)
    }

    fn format_query(
        &self,
        envelope: &ResponseEnvelope<QueryStructure>,
        source: Option<DecodeSource>,
    ) -> String {
        Self::format_query(envelope, source)
    }
}
