//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers
//! turn domain failures into consistent JSON responses and status codes.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        let mut redacted = Error::internal("Internal server error");
        redacted.trace_id.clone_from(&error.trace_id);
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id.as_deref() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Error::invalid_request("bad input"), StatusCode::BAD_REQUEST)]
    #[case(Error::unauthorized("login required"), StatusCode::UNAUTHORIZED)]
    #[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
    #[case(Error::conflict("exists"), StatusCode::CONFLICT)]
    #[case(Error::service_unavailable("store down"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_codes_follow_error_codes(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[tokio::test]
    async fn internal_messages_are_redacted() {
        let error = Error::internal("connection string was postgres://secret");
        let response = error.error_response();
        let body = to_bytes(response.into_body()).await.expect("body");
        let payload: Error = serde_json::from_slice(&body).expect("json error payload");
        assert_eq!(payload.message(), "Internal server error");
    }

    #[tokio::test]
    async fn non_internal_messages_are_preserved() {
        let error = Error::conflict("El usuario ya existe.");
        let response = error.error_response();
        let body = to_bytes(response.into_body()).await.expect("body");
        let payload: Error = serde_json::from_slice(&body).expect("json error payload");
        assert_eq!(payload.message(), "El usuario ya existe.");
        assert_eq!(payload.code(), ErrorCode::Conflict);
    }
}
