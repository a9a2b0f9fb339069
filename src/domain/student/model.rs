//! Student domain entity

use chrono::NaiveDate;

/// The client-editable fields of a student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentProfile {
    pub name: String,
    pub course: String,
    pub email: String,
    pub age: i32,
}

/// A student that has not been persisted yet (no identifier)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub course: String,
    pub email: String,
    pub age: i32,
    pub enrollment_date: NaiveDate,
}

impl NewStudent {
    /// Enroll a student on `date`. The identifier is left for the store to assign.
    pub fn enroll(profile: StudentProfile, date: NaiveDate) -> Self {
        Self {
            name: profile.name,
            course: profile.course,
            email: profile.email,
            age: profile.age,
            enrollment_date: date,
        }
    }
}

/// A persisted student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    /// Store-assigned identifier
    pub id: i32,
    pub name: String,
    pub course: String,
    /// Unique across all students
    pub email: String,
    pub age: i32,
    /// Server-assigned; reset to the update day on every update
    pub enrollment_date: NaiveDate,
}

impl Student {
    /// Overwrite every field except the identifier.
    pub fn apply(&mut self, replacement: NewStudent) {
        self.name = replacement.name;
        self.course = replacement.course;
        self.email = replacement.email;
        self.age = replacement.age;
        self.enrollment_date = replacement.enrollment_date;
    }
}

/// Argument of a repository save: insert when there is no identifier yet,
/// otherwise overwrite the stored row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveStudent {
    Insert(NewStudent),
    Update(Student),
}

impl From<NewStudent> for SaveStudent {
    fn from(s: NewStudent) -> Self {
        Self::Insert(s)
    }
}

impl From<Student> for SaveStudent {
    fn from(s: Student) -> Self {
        Self::Update(s)
    }
}

// ── Tests ──────────────────────────────────────────────────────
