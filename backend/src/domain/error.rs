//! Domain-level error type.
//!
//! Transport agnostic: inbound adapters map these onto HTTP responses, view
//! failure messages, or JSON envelopes without the domain knowing about
//! either.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::middleware::trace::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// Authentication failed or is missing.
    Unauthorized,
    /// The requested resource does not exist.
    NotFound,
    /// The request conflicts with existing state (e.g. duplicate email).
    Conflict,
    /// A backing store could not be reached.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Domain error payload.
///
/// Constructors capture the request-scoped [`TraceId`] when one is in scope
/// so log lines, response headers, and error payloads correlate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl Error {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary structured details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use serde_json::json;

    #[test]
    fn serialises_code_as_snake_case() {
        let err = Error::service_unavailable("store down");
        let value = serde_json::to_value(&err).expect("serialise error");
        assert_eq!(
            value.get("code").and_then(Value::as_str),
            Some("service_unavailable")
        );
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("store down")
        );
    }

    #[test]
    fn omits_absent_details_and_trace_id() {
        let err = Error::conflict("exists");
        let value = serde_json::to_value(&err).expect("serialise error");
        assert!(value.get("details").is_none());
        assert!(value.get("traceId").is_none());
    }

    #[test]
    fn with_details_round_trips() {
        let err = Error::invalid_request("bad").with_details(json!({ "field": "email" }));
        let value = serde_json::to_value(&err).expect("serialise error");
        let parsed: Error = serde_json::from_value(value).expect("deserialise error");
        assert_eq!(parsed.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            parsed.details().and_then(|d| d.get("field")).and_then(Value::as_str),
            Some("email")
        );
    }
}
