//! In-memory student repository

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use crate::domain::{DomainError, DomainResult, SaveStudent, Student, StudentRepository};

/// In-memory storage for development and testing.
///
/// Enforces the same unique-email constraint as the database schema through
/// an email → id index.
pub struct InMemoryStudentRepository {
    students: DashMap<i32, Student>,
    emails: DashMap<String, i32>,
    id_counter: AtomicI32,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self {
            students: DashMap::new(),
            emails: DashMap::new(),
            id_counter: AtomicI32::new(1),
        }
    }

    /// Claim `email` for `id`. Re-claiming one's own email is allowed.
    fn claim_email(&self, email: &str, id: i32) -> DomainResult<()> {
        match self.emails.entry(email.to_string()) {
            Entry::Occupied(owner) if *owner.get() != id => Err(unique_email_violation()),
            Entry::Occupied(_) => Ok(()),
            Entry::Vacant(slot) => {
                slot.insert(id);
                Ok(())
            }
        }
    }

    fn sorted(mut students: Vec<Student>) -> Vec<Student> {
        students.sort_by_key(|s| s.id);
        students
    }
}

impl Default for InMemoryStudentRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn unique_email_violation() -> DomainError {
    DomainError::ConstraintViolation {
        details: Some("Email must be unique".to_string()),
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_all(&self) -> DomainResult<Vec<Student>> {
        Ok(Self::sorted(
            self.students.iter().map(|e| e.value().clone()).collect(),
        ))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Student>> {
        Ok(self.students.get(&id).map(|s| s.clone()))
    }

    async fn save(&self, student: SaveStudent) -> DomainResult<Student> {
        match student {
            SaveStudent::Insert(new) => {
                let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
                self.claim_email(&new.email, id)?;

                let stored = Student {
                    id,
                    name: new.name,
                    course: new.course,
                    email: new.email,
                    age: new.age,
                    enrollment_date: new.enrollment_date,
                };
                self.students.insert(id, stored.clone());
                Ok(stored)
            }
            SaveStudent::Update(updated) => {
                // Row lock held until the write so a concurrent delete cannot be undone.
                let mut row = self.students.get_mut(&updated.id).ok_or_else(|| {
                    DomainError::Database(format!("no student row with id {}", updated.id))
                })?;

                self.claim_email(&updated.email, updated.id)?;
                if row.email != updated.email {
                    self.emails.remove(&row.email);
                }

                *row = updated.clone();
                Ok(updated)
            }
        }
    }

    async fn delete_by_id(&self, id: i32) -> DomainResult<()> {
        if let Some((_, removed)) = self.students.remove(&id) {
            self.emails.remove(&removed.email);
        }
        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> DomainResult<bool> {
        Ok(self.students.contains_key(&id))
    }

    async fn find_by_course(&self, course: &str) -> DomainResult<Vec<Student>> {
        Ok(Self::sorted(
            self.students
                .iter()
                .filter(|e| e.value().course == course)
                .map(|e| e.value().clone())
                .collect(),
        ))
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        Ok(self.emails.contains_key(email))
    }
}

// ── Tests ──────────────────────────────────────────────────────
