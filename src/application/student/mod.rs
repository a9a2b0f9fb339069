//! Student use-cases: DTOs, conversions and the service

pub mod dto;
pub mod mapper;
pub mod service;

pub use dto::{SearchParams, StudentRequest, StudentResponse};
pub use mapper::to_new_student;
pub use service::StudentService;
