//! Student service: application-layer orchestration
//!
//! HTTP handlers are thin wrappers that delegate to this service. Requests
//! reaching it have already passed validation.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::dto::{StudentRequest, StudentResponse};
use super::mapper::to_new_student;
use crate::domain::{DomainError, DomainResult, Student, StudentRepository};

pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn list(&self) -> DomainResult<Vec<StudentResponse>> {
        let students = self.repo.find_all().await?;
        Ok(students.into_iter().map(StudentResponse::from).collect())
    }

    pub async fn get(&self, id: i32) -> DomainResult<StudentResponse> {
        self.load(id).await.map(StudentResponse::from)
    }

    /// Students whose course equals `course` exactly.
    pub async fn search(&self, course: &str) -> DomainResult<Vec<StudentResponse>> {
        let students = self.repo.find_by_course(course).await?;
        Ok(students.into_iter().map(StudentResponse::from).collect())
    }

    /// Datastore reachability, for health checks.
    pub async fn ping(&self) -> DomainResult<()> {
        self.repo.ping().await
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Enroll a new student today.
    pub async fn create(&self, request: StudentRequest) -> DomainResult<StudentResponse> {
        let today = Utc::now().date_naive();
        let saved = self.repo.save(to_new_student(request, today).into()).await?;

        metrics::counter!("students_created_total").increment(1);
        info!(student_id = saved.id, course = %saved.course, "Student created");
        Ok(saved.into())
    }

    /// Overwrite every field but the identifier; the enrollment date becomes today.
    ///
    /// The email pre-check is not atomic with the write; a concurrent update
    /// to the same email is caught by the datastore's unique index instead.
    pub async fn update(&self, id: i32, request: StudentRequest) -> DomainResult<StudentResponse> {
        let mut existing = self.load(id).await?;

        if request.email != existing.email && self.repo.exists_by_email(&request.email).await? {
            return Err(DomainError::DuplicateEmail(request.email));
        }

        existing.apply(to_new_student(request, Utc::now().date_naive()));
        let saved = self.repo.save(existing.into()).await?;

        metrics::counter!("students_updated_total").increment(1);
        info!(student_id = saved.id, "Student updated");
        Ok(saved.into())
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        if !self.repo.exists_by_id(id).await? {
            return Err(DomainError::student_not_found(id));
        }
        self.repo.delete_by_id(id).await?;

        metrics::counter!("students_deleted_total").increment(1);
        info!(student_id = id, "Student deleted");
        Ok(())
    }

    async fn load(&self, id: i32) -> DomainResult<Student> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::student_not_found(id))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStudentRepository;

    fn service() -> StudentService {
        StudentService::new(Arc::new(InMemoryStudentRepository::new()))
    }

    fn request(name: &str, course: &str, email: &str) -> StudentRequest {
        StudentRequest {
            name: name.into(),
            course: course.into(),
            email: email.into(),
            age: Some(20),
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_todays_date() {
        let svc = service();
        let first = svc
            .create(request("Ada", "Math", "ada@example.com"))
            .await
            .unwrap();
        let second = svc
            .create(request("Alan", "Math", "alan@example.com"))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.enrollment_date, Utc::now().date_naive());
        assert_eq!(first.name, "Ada");
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let svc = service();
        let created = svc
            .create(request("Ada", "Math", "ada@example.com"))
            .await
            .unwrap();
        let fetched = svc.get(created.id).await.unwrap();
        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let err = service().get(9999).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { id: 9999, .. }));
    }

    #[tokio::test]
    async fn list_returns_every_student() {
        let svc = service();
        assert!(svc.list().await.unwrap().is_empty());

        svc.create(request("Ada", "Math", "ada@example.com"))
            .await
            .unwrap();
        svc.create(request("Alan", "Logic", "alan@example.com"))
            .await
            .unwrap();

        let emails: Vec<String> = svc.list().await.unwrap().into_iter().map(|s| s.email).collect();
        assert_eq!(emails, vec!["ada@example.com", "alan@example.com"]);
    }

    #[tokio::test]
    async fn update_to_taken_email_is_rejected() {
        let svc = service();
        svc.create(request("Ada", "Math", "ada@example.com"))
            .await
            .unwrap();
        let alan = svc
            .create(request("Alan", "Logic", "alan@example.com"))
            .await
            .unwrap();

        let err = svc
            .update(alan.id, request("Alan", "Logic", "ada@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::DuplicateEmail(ref e) if e == "ada@example.com"));
        assert_eq!(svc.get(alan.id).await.unwrap().email, "alan@example.com");
    }

    #[tokio::test]
    async fn update_keeping_own_email_succeeds() {
        let svc = service();
        let ada = svc
            .create(request("Ada", "Math", "ada@example.com"))
            .await
            .unwrap();

        let updated = svc
            .update(ada.id, request("Ada King", "Physics", "ada@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.id, ada.id);
        assert_eq!(updated.name, "Ada King");
        assert_eq!(updated.course, "Physics");
        assert_eq!(updated.enrollment_date, Utc::now().date_naive());
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let err = service()
            .update(5, request("Ada", "Math", "ada@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { id: 5, .. }));
    }

    #[tokio::test]
    async fn delete_removes_student() {
        let svc = service();
        let ada = svc
            .create(request("Ada", "Math", "ada@example.com"))
            .await
            .unwrap();

        svc.delete(ada.id).await.unwrap();

        assert!(matches!(
            svc.get(ada.id).await.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let err = service().delete(9999).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { id: 9999, .. }));
    }

    #[tokio::test]
    async fn search_matches_course_exactly() {
        let svc = service();
        svc.create(request("Ada", "Math", "ada@example.com"))
            .await
            .unwrap();
        svc.create(request("Alan", "Mathematics", "alan@example.com"))
            .await
            .unwrap();
        svc.create(request("Grace", "math", "grace@example.com"))
            .await
            .unwrap();

        let found = svc.search("Math").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ada");

        assert!(svc.search("Biology").await.unwrap().is_empty());
    }
}
