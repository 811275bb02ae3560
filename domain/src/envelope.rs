//! Uniform success/failure result returned by both pipelines.
//!
//! A failure never changes the payload's shape: it carries a schema-valid
//! fallback payload next to the error message, so consumers only need to
//! check whether `error` is present.
//!
//! # Serialized form
//!
//! | Variant | JSON |
//! |---------|------|
//! | `Success(list)` | `{"questions": [...]}` |
//! | `Failure { error, fallback }` | `{"error": "...", "questions": []}` |

use serde::Serialize;

/// Success or failure wrapper around a pipeline payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseEnvelope<T> {
    Success(T),
    Failure {
        error: String,
        #[serde(flatten)]
        fallback: T,
    },
}

impl<T> ResponseEnvelope<T> {
    pub fn success(payload: T) -> Self {
        ResponseEnvelope::Success(payload)
    }

    pub fn failure(error: impl Into<String>, fallback: T) -> Self {
        ResponseEnvelope::Failure {
            error: error.into(),
            fallback,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseEnvelope::Success(_))
    }

    /// Error message, present only on failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            ResponseEnvelope::Success(_) => None,
            ResponseEnvelope::Failure { error, .. } => Some(error),
        }
    }

    /// The payload to render: the real one on success, the fallback otherwise.
    pub fn payload(&self) -> &T {
        match self {
            ResponseEnvelope::Success(payload) => payload,
            ResponseEnvelope::Failure { fallback, .. } => fallback,
        }
    }

    pub fn into_payload(self) -> T {
        match self {
            ResponseEnvelope::Success(payload) => payload,
            ResponseEnvelope::Failure { fallback, .. } => fallback,
        }
    }

    /// Transform the payload, keeping the success/failure tag and message.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResponseEnvelope<U> {
        match self {
            ResponseEnvelope::Success(payload) => ResponseEnvelope::Success(f(payload)),
            ResponseEnvelope::Failure { error, fallback } => ResponseEnvelope::Failure {
                error,
                fallback: f(fallback),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Payload {
        items: Vec<u32>,
    }

    #[test]
    fn test_success_serializes_payload_only() {
        let envelope = ResponseEnvelope::success(Payload { items: vec![1, 2] });
        assert_eq!(serde_json::to_value(&envelope).unwrap(), json!({"items": [1, 2]}));
        assert!(envelope.error().is_none());
    }

    #[test]
    fn test_failure_serializes_error_next_to_fallback() {
        let envelope = ResponseEnvelope::failure("boom", Payload { items: vec![] });
        assert_eq!(
            serde_json::to_value(&envelope).unwrap(),
            json!({"error": "boom", "items": []})
        );
        assert_eq!(envelope.error(), Some("boom"));
        assert!(!envelope.is_success());
    }

    #[test]
    fn test_payload_is_fallback_on_failure() {
        let envelope = ResponseEnvelope::failure("boom", Payload { items: vec![7] });
        assert_eq!(envelope.payload().items, vec![7]);
        assert_eq!(envelope.into_payload().items, vec![7]);
    }

    #[test]
    fn test_map_keeps_error() {
        let envelope = ResponseEnvelope::failure("boom", 2u32).map(|n| n * 10);
        assert_eq!(envelope, ResponseEnvelope::failure("boom", 20u32));
    }
}
