//! Decoding strategies: raw completion text → [`QueryStructure`].
//!
//! | Strategy | Input | Fails when |
//! |----------|-------|------------|
//! | [`StrictJsonStrategy`] | the whole completion is a JSON object | any parse or schema violation |
//! | [`FencedJsonStrategy`] | JSON inside a ` ``` ` / ` ```json ` fence | no fence, or the fenced JSON is invalid |
//! | [`BooleanSplitStrategy`] | anything | never |
//!
//! [`QueryStructureDecoder`](super::decoder::QueryStructureDecoder) tries
//! its strategies in order and always ends with the boolean splitter.

use super::entities::QueryStructure;
use super::validation::{DecodeError, validate_structure};

/// One way of turning a completion into a query structure.
pub trait DecodeStrategy: Send + Sync {
    /// Short identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Decode the completion, or explain why this strategy does not apply.
    fn decode(&self, raw: &str) -> Result<QueryStructure, DecodeError>;
}

/// Strict schema decoding of the entire completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictJsonStrategy;

impl DecodeStrategy for StrictJsonStrategy {
    fn name(&self) -> &'static str {
        "strict_json"
    }

    fn decode(&self, raw: &str) -> Result<QueryStructure, DecodeError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| DecodeError::InvalidJson(e.to_string()))?;
        validate_structure(&value)
    }
}

/// Strict decoding of the first fenced code block in the completion.
///
/// Models sometimes wrap the requested JSON in Markdown fences despite
/// being told not to. Only the first ` ``` ` or ` ```json ` block is
/// considered.
#[derive(Debug, Clone, Copy, Default)]
pub struct FencedJsonStrategy;

impl FencedJsonStrategy {
    fn first_block(raw: &str) -> Option<String> {
        let mut in_block = false;
        let mut block = String::new();

        for line in raw.lines() {
            let trimmed = line.trim();
            if !in_block {
                if trimmed == "```" || trimmed == "```json" {
                    in_block = true;
                }
            } else if trimmed == "```" {
                return Some(block);
            } else {
                block.push_str(line);
                block.push('\n');
            }
        }

        None
    }
}

impl DecodeStrategy for FencedJsonStrategy {
    fn name(&self) -> &'static str {
        "fenced_json"
    }

    fn decode(&self, raw: &str) -> Result<QueryStructure, DecodeError> {
        let block = Self::first_block(raw).ok_or(DecodeError::NoFencedBlock)?;
        StrictJsonStrategy.decode(&block)
    }
}

/// Heuristic splitter on the literal `" AND "` separator.
///
/// Total: every input yields a structure. Parts are stripped of
/// surrounding parentheses, spaces and newlines; blank parts are dropped;
/// the last surviving part closes the expression. If nothing survives the
/// result is the "more specific search terms" placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanSplitStrategy;

impl BooleanSplitStrategy {
    pub const SEPARATOR: &'static str = " AND ";

    pub fn split(&self, raw: &str) -> QueryStructure {
        let parts = raw
            .split(Self::SEPARATOR)
            .map(|part| part.trim_matches(|c: char| matches!(c, '(' | ')' | ' ' | '\n')))
            .filter(|part| !part.trim().is_empty());

        QueryStructure::and_chain(parts).unwrap_or_else(QueryStructure::no_terms_placeholder)
    }
}

impl DecodeStrategy for BooleanSplitStrategy {
    fn name(&self) -> &'static str {
        "boolean_split"
    }

    fn decode(&self, raw: &str) -> Result<QueryStructure, DecodeError> {
        Ok(self.split(raw))
    }
}
