//! Infrastructure layer - datastore adapters and schema

pub mod database;
pub mod storage;

pub use database::repositories::SeaOrmStudentRepository;
pub use database::{init_database, DatabaseConfig};
pub use storage::InMemoryStudentRepository;
