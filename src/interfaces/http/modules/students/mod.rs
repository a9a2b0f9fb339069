//! Students module: CRUD and search by course

pub mod handlers;

pub use handlers::*;
