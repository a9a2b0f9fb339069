use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{entity} not found with id: {id}")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Email already in use: {0}")]
    DuplicateEmail(String),

    /// A uniqueness constraint rejected the write after the service-level checks passed.
    #[error("Duplicate value violates database constraint")]
    ConstraintViolation { details: Option<String> },

    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn student_not_found(id: i32) -> Self {
        Self::NotFound {
            entity: "Student",
            id,
        }
    }

    /// Whether the failure is the client's fault (as opposed to the datastore's).
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DomainError::Database(_))
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(msg)) => {
                DomainError::ConstraintViolation {
                    details: msg
                        .to_lowercase()
                        .contains("email")
                        .then(|| "Email must be unique".to_string()),
                }
            }
            _ => DomainError::Database(e.to_string()),
        }
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_id() {
        let e = DomainError::student_not_found(9999);
        assert_eq!(e.to_string(), "Student not found with id: 9999");
        assert!(e.is_client_error());
    }

    #[test]
    fn database_errors_are_not_client_errors() {
        let e = DomainError::from(sea_orm::DbErr::Custom("disk I/O error".into()));
        assert!(matches!(e, DomainError::Database(_)));
        assert!(!e.is_client_error());
    }
}
