//! Non-database repository implementations

mod memory;

pub use memory::InMemoryStudentRepository;
