//! Shared validation rules for decoded query structures.
//!
//! The strict decoders read JSON into a [`serde_json::Value`] first and then
//! apply these rules, so that every violation is reported with the index of
//! the offending element. Validation is all-or-nothing: one bad element
//! rejects the whole structure.

use super::entities::{Operator, QueryStructure, Subquery};
use serde_json::Value;
use thiserror::Error;

/// A single subquery element that does not satisfy the schema.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubqueryError {
    #[error("subquery {index} is not an object")]
    NotAnObject { index: usize },

    #[error("subquery {index} has no string `content`")]
    MissingContent { index: usize },

    #[error("subquery {index} has empty `content`")]
    EmptyContent { index: usize },

    #[error("subquery {index} has no `operator`")]
    MissingOperator { index: usize },
}

/// Why a completion could not be decoded by a strategy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("not valid JSON: {0}")]
    InvalidJson(String),

    #[error("top-level value is not a JSON object")]
    NotAnObject,

    #[error("missing `subqueries` key")]
    MissingSubqueries,

    #[error("`subqueries` is not an array")]
    SubqueriesNotArray,

    #[error("`subqueries` is empty")]
    EmptySubqueries,

    #[error("invalid subquery: {0}")]
    InvalidSubquery(#[from] SubqueryError),

    #[error("no fenced code block found")]
    NoFencedBlock,
}

/// Validate one element of the `subqueries` array.
///
/// `content` must be a non-empty string and is kept verbatim. `operator`
/// must be present: `null` closes the expression, strings go through
/// [`Operator::from_wire`], and any other JSON value is kept as its text.
pub fn validate_subquery(index: usize, value: &Value) -> Result<Subquery, SubqueryError> {
    let object = value
        .as_object()
        .ok_or(SubqueryError::NotAnObject { index })?;

    let content = object
        .get("content")
        .and_then(Value::as_str)
        .ok_or(SubqueryError::MissingContent { index })?;
    if content.is_empty() {
        return Err(SubqueryError::EmptyContent { index });
    }

    let operator = match object.get("operator") {
        None => return Err(SubqueryError::MissingOperator { index }),
        Some(Value::Null) => Operator::End,
        Some(Value::String(s)) => Operator::from_wire(s),
        Some(other) => Operator::Other(other.to_string()),
    };

    Ok(Subquery::new(content, operator))
}

/// Validate a decoded JSON document of the shape `{"subqueries": [...]}`.
pub fn validate_structure(value: &Value) -> Result<QueryStructure, DecodeError> {
    let object = value.as_object().ok_or(DecodeError::NotAnObject)?;
    let elements = object
        .get("subqueries")
        .ok_or(DecodeError::MissingSubqueries)?
        .as_array()
        .ok_or(DecodeError::SubqueriesNotArray)?;

    let subqueries = elements
        .iter()
        .enumerate()
        .map(|(index, element)| validate_subquery(index, element))
        .collect::<Result<Vec<_>, _>>()?;

    QueryStructure::new(subqueries).ok_or(DecodeError::EmptySubqueries)
}
