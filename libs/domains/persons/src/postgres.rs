use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};

use crate::{
    entity,
    error::{PersonError, PersonResult},
    models::{NewPerson, Person},
    repository::PersonRepository,
};

/// Postgres implementation of the storage port, backed by Sea-ORM
pub struct PgPersonRepository {
    db: DatabaseConnection,
}

impl PgPersonRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn insert(&self, record: NewPerson) -> PersonResult<Person> {
        let email = record.email_address.clone();
        let active_model: entity::ActiveModel = record.into();

        let model = active_model.insert(&self.db).await.map_err(|e| {
            // The unique index fires only when a concurrent create slipped
            // past the service pre-check and won the race.
            match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => PersonError::DuplicateEmail(email),
                _ => PersonError::Internal(format!("Database error: {}", e)),
            }
        })?;

        tracing::info!(person_id = %model.id, "Created person");
        Ok(model.into())
    }

    async fn exists_by_email(&self, email: &str) -> PersonResult<bool> {
        let exists = entity::Entity::find()
            .filter(entity::Column::EmailAddress.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| PersonError::Internal(format!("Database error: {}", e)))?
            .is_some();

        Ok(exists)
    }

    async fn find_by_email_domain(&self, suffix: &str) -> PersonResult<Vec<Person>> {
        // Uuid v7 ids are time-ordered, so ordering by id preserves
        // insertion order.
        let models = entity::Entity::find()
            .filter(entity::Column::EmailAddress.ends_with(suffix))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PersonError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_age_between(&self, from_age: i32, to_age: i32) -> PersonResult<Vec<Person>> {
        let models = entity::Entity::find()
            .filter(entity::Column::Age.between(from_age, to_age))
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| PersonError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete_all(&self) -> PersonResult<u64> {
        let result = entity::Entity::delete_many()
            .exec(&self.db)
            .await
            .map_err(|e| PersonError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(removed = result.rows_affected, "Deleted all persons");
        Ok(result.rows_affected)
    }
}
