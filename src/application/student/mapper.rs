//! Conversions between the wire shapes and the Student entity

use chrono::NaiveDate;

use super::dto::{StudentRequest, StudentResponse};
use crate::domain::{NewStudent, Student, StudentProfile};

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            name: s.name,
            course: s.course,
            email: s.email,
            enrollment_date: s.enrollment_date,
        }
    }
}

/// Editable fields carried by a request.
///
/// A validated request always has an age; the fallback only covers callers
/// that skip validation.
impl From<StudentRequest> for StudentProfile {
    fn from(r: StudentRequest) -> Self {
        Self {
            name: r.name,
            course: r.course,
            email: r.email,
            age: r.age.unwrap_or_default(),
        }
    }
}

/// Build the unsaved entity for a create or update: enrolled on `today`, no identifier.
pub fn to_new_student(request: StudentRequest, today: NaiveDate) -> NewStudent {
    NewStudent::enroll(request.into(), today)
}
