//! Student repository interface

use async_trait::async_trait;

use super::model::{SaveStudent, Student};
use crate::domain::DomainResult;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// All students, ascending by id
    async fn find_all(&self) -> DomainResult<Vec<Student>>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Student>>;

    /// Insert or overwrite a student and return the stored row.
    ///
    /// Fails with `ConstraintViolation` when the email is already taken.
    async fn save(&self, student: SaveStudent) -> DomainResult<Student>;

    /// Remove a student. Deleting an absent id is a no-op.
    async fn delete_by_id(&self, id: i32) -> DomainResult<()>;

    async fn exists_by_id(&self, id: i32) -> DomainResult<bool>;

    /// Students whose course equals `course` exactly (case-sensitive)
    async fn find_by_course(&self, course: &str) -> DomainResult<Vec<Student>>;

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool>;

    /// Check that the datastore is reachable
    async fn ping(&self) -> DomainResult<()> {
        Ok(())
    }
}
