//! Student aggregate
//!
//! Contains the Student entity, its unsaved and editable shapes, and the
//! repository interface.

pub mod model;
pub mod repository;

pub use model::{NewStudent, SaveStudent, Student, StudentProfile};
pub use repository::StudentRepository;
