use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

use crate::models::{NewPerson, Person};

/// Sea-ORM entity for the persons table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "persons")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub full_name: String,
    pub email_address: String,
    pub age: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Person {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            email_address: model.email_address,
            age: model.age,
            created_at: model.created_at.into(),
        }
    }
}

// The store assigns identity and creation time. Uuid v7 keys are
// time-ordered, which keeps `ORDER BY id` equal to insertion order.
impl From<NewPerson> for ActiveModel {
    fn from(record: NewPerson) -> Self {
        ActiveModel {
            id: Set(Uuid::now_v7()),
            full_name: Set(record.full_name),
            email_address: Set(record.email_address),
            age: Set(record.age),
            created_at: Set(chrono::Utc::now().into()),
        }
    }
}
