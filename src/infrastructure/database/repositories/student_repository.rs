//! SeaORM implementation of StudentRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, Statement,
};
use tracing::debug;

use crate::domain::{DomainResult, SaveStudent, Student, StudentRepository};
use crate::infrastructure::database::entities::student;

pub struct SeaOrmStudentRepository {
    db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: student::Model) -> Student {
    Student {
        id: m.id,
        name: m.name,
        course: m.course,
        email: m.email,
        age: m.age,
        enrollment_date: m.enrollment_date,
    }
}

// ── StudentRepository impl ──────────────────────────────────────

#[async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn find_all(&self) -> DomainResult<Vec<Student>> {
        let models = student::Entity::find()
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Student>> {
        let model = student::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_domain))
    }

    async fn save(&self, s: SaveStudent) -> DomainResult<Student> {
        let saved = match s {
            SaveStudent::Insert(new) => {
                debug!(email = %new.email, "Inserting student");
                student::ActiveModel {
                    name: Set(new.name),
                    course: Set(new.course),
                    email: Set(new.email),
                    age: Set(new.age),
                    enrollment_date: Set(new.enrollment_date),
                    ..Default::default()
                }
                .insert(&self.db)
                .await?
            }
            SaveStudent::Update(existing) => {
                debug!(student_id = existing.id, "Updating student");
                student::ActiveModel {
                    id: Set(existing.id),
                    name: Set(existing.name),
                    course: Set(existing.course),
                    email: Set(existing.email),
                    age: Set(existing.age),
                    enrollment_date: Set(existing.enrollment_date),
                }
                .update(&self.db)
                .await?
            }
        };

        Ok(model_to_domain(saved))
    }

    async fn delete_by_id(&self, id: i32) -> DomainResult<()> {
        student::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    async fn exists_by_id(&self, id: i32) -> DomainResult<bool> {
        let count = student::Entity::find()
            .filter(student::Column::Id.eq(id))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn find_by_course(&self, course: &str) -> DomainResult<Vec<Student>> {
        let models = student::Entity::find()
            .filter(student::Column::Course.eq(course))
            .order_by_asc(student::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        let count = student::Entity::find()
            .filter(student::Column::Email.eq(email))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    async fn ping(&self) -> DomainResult<()> {
        self.db
            .execute(Statement::from_string(
                self.db.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────
