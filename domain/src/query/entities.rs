//! Query structure entities
//!
//! A [`QueryStructure`] is an ordered, non-empty list of [`Subquery`]
//! clauses. Each clause's operator joins it to the *next* clause, so the
//! final boolean expression is rebuilt left to right.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Boolean joiner applied after a subquery.
///
/// Known joiners are matched case-insensitively; any other value is kept
/// as given in [`Operator::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Operator {
    And,
    Or,
    Not,
    /// No joiner: the subquery closes the expression.
    #[default]
    End,
    /// A joiner the model made up, kept verbatim.
    Other(String),
}

impl Operator {
    pub fn as_str(&self) -> &str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::End => "",
            Operator::Other(s) => s.as_str(),
        }
    }

    /// Read the wire representation. Never fails: unknown values become
    /// [`Operator::Other`], and a blank string closes the expression.
    pub fn from_wire(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            Operator::End
        } else if trimmed.eq_ignore_ascii_case("AND") {
            Operator::And
        } else if trimmed.eq_ignore_ascii_case("OR") {
            Operator::Or
        } else if trimmed.eq_ignore_ascii_case("NOT") {
            Operator::Not
        } else {
            Operator::Other(s.to_string())
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Operator::End)
    }
}

impl From<&str> for Operator {
    fn from(s: &str) -> Self {
        Operator::from_wire(s)
    }
}

impl Serialize for Operator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `null` reads as no joiner.
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.as_deref().map_or(Operator::End, Operator::from_wire))
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One boolean-joined clause of a search expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subquery {
    pub content: String,
    pub operator: Operator,
}

impl Subquery {
    pub fn new(content: impl Into<String>, operator: Operator) -> Self {
        Self {
            content: content.into(),
            operator,
        }
    }
}

/// Ordered, non-empty sequence of subqueries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryStructure {
    subqueries: Vec<Subquery>,
}

impl QueryStructure {
    /// Placeholder clause used when the model produced no usable terms.
    pub const NO_TERMS_PLACEHOLDER: &'static str = "Please provide more specific search terms";

    /// Placeholder clause used when the model could not be reached.
    pub const GENERATION_ERROR_PLACEHOLDER: &'static str =
        "Error generating query. Please try again.";

    /// Build from a list of subqueries; `None` if the list is empty.
    pub fn new(subqueries: Vec<Subquery>) -> Option<Self> {
        if subqueries.is_empty() {
            None
        } else {
            Some(Self { subqueries })
        }
    }

    /// A single clause with no trailing operator.
    pub fn single(content: impl Into<String>) -> Self {
        Self {
            subqueries: vec![Subquery::new(content, Operator::End)],
        }
    }

    /// Build from terms joined by `AND`, closing with an empty operator.
    pub fn and_chain<I, S>(terms: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut subqueries: Vec<Subquery> = terms
            .into_iter()
            .map(|term| Subquery::new(term, Operator::And))
            .collect();
        if let Some(last) = subqueries.last_mut() {
            last.operator = Operator::End;
        }
        Self::new(subqueries)
    }

    /// Fallback payload when no terms could be extracted.
    pub fn no_terms_placeholder() -> Self {
        Self::single(Self::NO_TERMS_PLACEHOLDER)
    }

    /// Fallback payload when generation failed outright.
    pub fn generation_error_placeholder() -> Self {
        Self::single(Self::GENERATION_ERROR_PLACEHOLDER)
    }

    pub fn subqueries(&self) -> &[Subquery] {
        &self.subqueries
    }

    pub fn into_subqueries(self) -> Vec<Subquery> {
        self.subqueries
    }

    pub fn len(&self) -> usize {
        self.subqueries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.subqueries.is_empty()
    }

    /// Render the boolean search expression, e.g. `(a OR b) AND (c)`.
    ///
    /// Each clause is parenthesised and joined to the next by its own
    /// operator. The last clause's operator is ignored; an empty operator
    /// between two clauses is read as `AND`.
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (index, subquery) in self.subqueries.iter().enumerate() {
            if index > 0 {
                let previous = &self.subqueries[index - 1].operator;
                let joiner = if previous.is_end() {
                    Operator::And.as_str()
                } else {
                    previous.as_str().trim()
                };
                query.push(' ');
                query.push_str(joiner);
                query.push(' ');
            }
            query.push('(');
            query.push_str(subquery.content.trim());
            query.push(')');
        }
        query
    }
}
