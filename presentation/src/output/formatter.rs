//! Output formatter trait

use crate::cli::commands::OutputFormat;
use crate::output::console::ConsoleFormatter;
use slr_domain::{DecodeSource, QueryStructure, QuestionList, ResponseEnvelope};

/// Trait for formatting pipeline results
pub trait OutputFormatter {
    /// Format a clarifying-question result
    fn format_questions(&self, envelope: &ResponseEnvelope<QuestionList>) -> String;

    /// Format a query result, with the decoding path when known
    fn format_query(
        &self,
        envelope: &ResponseEnvelope<QueryStructure>,
        source: Option<DecodeSource>,
    ) -> String;
}

/// Emits the envelope serialization unchanged.
pub struct JsonFormatter;

impl JsonFormatter {
    fn to_json<T: serde::Serialize>(envelope: &ResponseEnvelope<T>) -> String {
        serde_json::to_string_pretty(envelope).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_questions(&self, envelope: &ResponseEnvelope<QuestionList>) -> String {
        Self::to_json(envelope)
    }

    fn format_query(
        &self,
        envelope: &ResponseEnvelope<QueryStructure>,
        _source: Option<DecodeSource>,
    ) -> String {
        Self::to_json(envelope)
    }
}

impl OutputFormat {
    /// Formatter for this output format.
    pub fn formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            OutputFormat::Json => Box::new(JsonFormatter),
            OutputFormat::Text => Box::new(ConsoleFormatter),
        }
    }
}
