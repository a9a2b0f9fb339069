//! Translation of domain and extraction failures into HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::DomainError;
use crate::shared::validations::FieldErrors;

/// Message used for every unreadable request body
pub const MALFORMED_BODY_MESSAGE: &str = "Invalid JSON format or data type";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Field → message
    #[error("request validation failed")]
    Validation(FieldErrors),

    /// Body is not JSON or a field has the wrong type; carries the parser's message
    #[error("Invalid JSON format or data type: {0}")]
    MalformedBody(String),

    #[error("Invalid type for parameter '{parameter}'. Expected: {expected}")]
    TypeMismatch {
        parameter: &'static str,
        expected: &'static str,
    },

    #[error("Required parameter '{0}' is missing")]
    MissingParameter(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(fields) => (StatusCode::BAD_REQUEST, json!(fields)),
            ApiError::MalformedBody(details) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": MALFORMED_BODY_MESSAGE, "details": details }),
            ),
            e @ (ApiError::TypeMismatch { .. } | ApiError::MissingParameter(_)) => {
                (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() }))
            }
            ApiError::Domain(e) => domain_error_response(e),
        };

        (status, Json(body)).into_response()
    }
}

fn domain_error_response(e: DomainError) -> (StatusCode, serde_json::Value) {
    if e.is_client_error() {
        warn!(error = %e, "Request rejected");
    } else {
        error!(error = %e, "Datastore failure");
    }

    match e {
        DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, json!({ "error": e.to_string() })),
        DomainError::DuplicateEmail(_) => {
            (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() }))
        }
        DomainError::ConstraintViolation { ref details } => {
            let mut body = json!({ "error": e.to_string() });
            if let Some(details) = details {
                body["details"] = json!(details);
            }
            (StatusCode::BAD_REQUEST, body)
        }
        DomainError::Database(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": "Internal server error" }),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(e: ApiError) -> (StatusCode, serde_json::Value) {
        let resp = e.into_response();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_is_404() {
        let (status, body) = render(DomainError::student_not_found(9999).into()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Student not found with id: 9999" }));
    }

    #[tokio::test]
    async fn duplicate_email_is_400() {
        let (status, body) =
            render(DomainError::DuplicateEmail("a@example.com".into()).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Email already in use: a@example.com");
    }

    #[tokio::test]
    async fn constraint_violation_carries_details() {
        let (status, body) = render(
            DomainError::ConstraintViolation {
                details: Some("Email must be unique".into()),
            }
            .into(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({
                "error": "Duplicate value violates database constraint",
                "details": "Email must be unique"
            })
        );

        let (_, body) = render(DomainError::ConstraintViolation { details: None }.into()).await;
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn validation_is_a_field_map() {
        let mut fields = FieldErrors::new();
        fields.insert("age".into(), "Age is very high".into());
        let (status, body) = render(ApiError::Validation(fields)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "age": "Age is very high" }));
    }

    #[tokio::test]
    async fn type_mismatch_names_parameter() {
        let (status, body) = render(ApiError::TypeMismatch {
            parameter: "id",
            expected: "int",
        })
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid type for parameter 'id'. Expected: int");
    }

    #[tokio::test]
    async fn database_failure_hides_details() {
        let (status, body) = render(DomainError::Database("disk full".into()).into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Internal server error" }));
    }
}
