pub mod student;

pub use student::{NewStudent, SaveStudent, Student, StudentProfile, StudentRepository};

// Re-export the error types for convenience
pub use crate::shared::errors::{DomainError, DomainResult};
