//! Path parameter extractor with a descriptive type-mismatch rejection

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;

/// Integer `{id}` path segment.
///
/// A non-integer segment is rejected with
/// `Invalid type for parameter 'id'. Expected: int`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::TypeMismatch {
                parameter: "id",
                expected: "int",
            })?;
        Ok(IdPath(id))
    }
}
