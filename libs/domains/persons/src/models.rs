use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Person entity.
///
/// Immutable once created: there is no update path, and `age` is the
/// snapshot computed at creation time, never recomputed on read.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Store-assigned identity
    pub id: Uuid,
    /// `first_name + " " + last_name`, stored as a single string
    pub full_name: String,
    /// Unique across all persons
    pub email_address: String,
    /// Full years between date of birth and the creation date, frozen
    pub age: i32,
    /// Creation timestamp; also the storage-order tiebreaker
    pub created_at: DateTime<Utc>,
}

/// Request parameters for creating a person.
///
/// Bound from the query string of `POST /persons/create`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CreatePerson {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// ISO 8601 calendar date (YYYY-MM-DD)
    pub date_of_birth: NaiveDate,
}

/// Record handed to the storage port for insertion.
///
/// Identity and creation time are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPerson {
    pub full_name: String,
    pub email_address: String,
    pub age: i32,
}

/// Inclusive age bounds for `GET /persons/age-range`.
///
/// An inverted range (`from_age > to_age`) is legal and matches nothing.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AgeRangeFilter {
    pub from_age: i32,
    pub to_age: i32,
}

/// Person as exposed by the query endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub full_name: String,
    pub email_address: String,
    pub age: i32,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            full_name: person.full_name,
            email_address: person.email_address,
            age: person.age,
        }
    }
}
