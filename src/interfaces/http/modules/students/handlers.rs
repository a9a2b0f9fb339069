//! Student API handlers
//!
//! Thin wrappers that delegate to `StudentService`. Bodies are validated by
//! `ValidatedJson` before a handler runs; failures are rendered by `ApiError`.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::student::{SearchParams, StudentRequest, StudentResponse, StudentService};
use crate::interfaces::http::common::{ApiError, IdPath, ValidatedJson};

#[derive(Clone)]
pub struct StudentHandlerState {
    pub service: Arc<StudentService>,
}

#[utoipa::path(
    get,
    path = "/api/students",
    tag = "Students",
    responses(
        (status = 200, description = "All students", body = Vec<StudentResponse>)
    )
)]
pub async fn list_students(
    State(state): State<StudentHandlerState>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student details", body = StudentResponse),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_student(
    State(state): State<StudentHandlerState>,
    IdPath(id): IdPath,
) -> Result<Json<StudentResponse>, ApiError> {
    Ok(Json(state.service.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/students",
    tag = "Students",
    request_body = StudentRequest,
    responses(
        (status = 201, description = "Student created", body = StudentResponse),
        (status = 400, description = "Validation error or malformed body")
    )
)]
pub async fn create_student(
    State(state): State<StudentHandlerState>,
    ValidatedJson(request): ValidatedJson<StudentRequest>,
) -> Result<(StatusCode, Json<StudentResponse>), ApiError> {
    let created = state.service.create(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student ID")),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Student updated", body = StudentResponse),
        (status = 400, description = "Validation error or email already in use"),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_student(
    State(state): State<StudentHandlerState>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<StudentRequest>,
) -> Result<Json<StudentResponse>, ApiError> {
    Ok(Json(state.service.update(id, request).await?))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = "Students",
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted", body = String, content_type = "text/plain"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_student(
    State(state): State<StudentHandlerState>,
    IdPath(id): IdPath,
) -> Result<&'static str, ApiError> {
    state.service.delete(id).await?;
    Ok("Deleted")
}

#[utoipa::path(
    get,
    path = "/api/students/search",
    tag = "Students",
    params(SearchParams),
    responses(
        (status = 200, description = "Students enrolled in exactly this course", body = Vec<StudentResponse>),
        (status = 400, description = "Missing course parameter")
    )
)]
pub async fn search_students(
    State(state): State<StudentHandlerState>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<StudentResponse>>, ApiError> {
    let Query(params) = query.map_err(|_| ApiError::MissingParameter("course"))?;
    Ok(Json(state.service.search(&params.course).await?))
}
