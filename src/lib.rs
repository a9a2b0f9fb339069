//! # Student Management Service
//!
//! REST API for creating, reading, updating, deleting and searching student
//! records.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Student entity, profile and the repository port
//! - **application**: Student use cases, request/response DTOs and mapping
//! - **infrastructure**: SeaORM (SQLite) and in-memory repository adapters
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: Runtime bootstrap and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
