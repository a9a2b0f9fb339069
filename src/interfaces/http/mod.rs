//! HTTP REST API interfaces
//!
//! - `common`: extractors (`ValidatedJson`, `IdPath`) and `ApiError`
//! - `modules`: handlers per resource plus request-id / metrics middleware
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc};
