//! Parsing of user-typed boolean queries.
//!
//! Reviewers can paste an existing query instead of generating one. It
//! must have the shape `(t1 OR t2) AND (t3 OR t4) AND ...`: `OR` only inside
//! parenthesised groups, `AND` only between them.

use super::entities::QueryStructure;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static AND_INSIDE_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\bAND\b[^)]*\)").expect("valid regex"));

static OR_BETWEEN_GROUPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\)\s*OR\s*\(").expect("valid regex"));

static GROUPS_JOINED_BY_AND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\([^()]+\)(\s+AND\s+\([^()]+\))*\s*$").expect("valid regex")
});

static AND_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bAND\b").expect("valid regex"));

/// Syntax problems in a user-typed query, in the order they are checked.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySyntaxError {
    #[error("Unbalanced parentheses. Each group must be enclosed in parentheses.")]
    UnbalancedParentheses,

    #[error(
        "AND operator is not allowed inside parentheses. Use OR to combine terms within groups."
    )]
    AndInsideGroup,

    #[error("OR operator is not allowed between groups. Use AND to combine groups.")]
    OrBetweenGroups,

    #[error(
        "Invalid query format. The query must follow this structure: \
         (term1 OR term2) AND (term3 OR term4). \
         Use OR only within groups and AND only between groups."
    )]
    InvalidFormat,
}

/// Check a user-typed query against the group syntax.
pub fn validate_manual_query(query: &str) -> Result<(), QuerySyntaxError> {
    let opening = query.matches('(').count();
    let closing = query.matches(')').count();
    if opening != closing {
        return Err(QuerySyntaxError::UnbalancedParentheses);
    }
    if AND_INSIDE_GROUP.is_match(query) {
        return Err(QuerySyntaxError::AndInsideGroup);
    }
    if OR_BETWEEN_GROUPS.is_match(query) {
        return Err(QuerySyntaxError::OrBetweenGroups);
    }
    if !GROUPS_JOINED_BY_AND.is_match(query) {
        return Err(QuerySyntaxError::InvalidFormat);
    }
    Ok(())
}

/// Parse a user-typed query into one subquery per `AND`-joined group.
pub fn parse_manual_query(query: &str) -> Result<QueryStructure, QuerySyntaxError> {
    validate_manual_query(query)?;

    let groups = AND_SEPARATOR.split(query).map(|group| {
        let group = group.trim();
        let group = group.strip_prefix('(').unwrap_or(group);
        let group = group.strip_suffix(')').unwrap_or(group);
        group.trim().to_string()
    });

    QueryStructure::and_chain(groups).ok_or(QuerySyntaxError::InvalidFormat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::entities::{Operator, Subquery};

    #[test]
    fn test_parse_valid_query() {
        let structure =
            parse_manual_query("(covid OR coronavirus) AND (vaccine OR vaccination) AND (efficacy)")
                .unwrap();
        assert_eq!(
            structure.subqueries(),
            [
                Subquery::new("covid OR coronavirus", Operator::And),
                Subquery::new("vaccine OR vaccination", Operator::And),
                Subquery::new("efficacy", Operator::End),
            ]
        );
    }

    #[test]
    fn test_single_group() {
        let structure = parse_manual_query("  (stent OR scaffold)  ").unwrap();
        assert_eq!(structure, QueryStructure::single("stent OR scaffold"));
    }

    #[test]
    fn test_round_trips_through_query_string() {
        let query = "(a OR b) AND (c)";
        assert_eq!(parse_manual_query(query).unwrap().to_query_string(), query);
    }

    #[test]
    fn test_unbalanced() {
        assert_eq!(
            parse_manual_query("(a OR b AND (c)"),
            Err(QuerySyntaxError::UnbalancedParentheses)
        );
    }

    #[test]
    fn test_and_inside_group() {
        assert_eq!(
            parse_manual_query("(a AND b) AND (c)"),
            Err(QuerySyntaxError::AndInsideGroup)
        );
    }

    #[test]
    fn test_and_as_part_of_a_word_is_allowed() {
        assert!(parse_manual_query("(BRAND OR generic) AND (ANDROGEN)").is_ok());
    }

    #[test]
    fn test_or_between_groups() {
        assert_eq!(
            parse_manual_query("(a) OR (b)"),
            Err(QuerySyntaxError::OrBetweenGroups)
        );
    }

    #[test]
    fn test_invalid_format() {
        for query in ["a OR b", "(a) (b)", "(a) AND b", "", "()"] {
            assert_eq!(
                parse_manual_query(query),
                Err(QuerySyntaxError::InvalidFormat),
                "query {query:?}"
            );
        }
    }
}
