pub mod student;

pub use student::{StudentRequest, StudentResponse, StudentService};
