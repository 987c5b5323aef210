use chrono::{Datelike, NaiveDate, Utc};
use std::sync::Arc;

use crate::error::{PersonError, PersonResult};
use crate::models::{CreatePerson, NewPerson, Person};
use crate::repository::PersonRepository;

/// Youngest age at which a person may be registered
pub const MINIMUM_AGE: i32 = 18;

/// Number of complete years elapsed from `birth_date` to `as_of`.
///
/// Calendar-aware: the raw year difference is decremented when the
/// month/day of `as_of` falls before the month/day of `birth_date`, so a
/// partial year never counts. Negative when `as_of` precedes `birth_date`;
/// callers treat that as invalid input rather than guarding here.
pub fn calculate_age(birth_date: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut age = as_of.year() - birth_date.year();
    if (as_of.month(), as_of.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Service layer owning the person business rules
#[derive(Clone)]
pub struct PersonService<R: PersonRepository> {
    repository: Arc<R>,
}

impl<R: PersonRepository> PersonService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Run the creation checks without writing anything.
    ///
    /// Two checks, in order, each short-circuiting: minimum age first,
    /// then email uniqueness against the store. Read-only.
    pub async fn validate_parameters(
        &self,
        date_of_birth: NaiveDate,
        email: &str,
    ) -> PersonResult<()> {
        if calculate_age(date_of_birth, Utc::now().date_naive()) < MINIMUM_AGE {
            return Err(PersonError::Underage);
        }

        if self.repository.exists_by_email(email).await? {
            return Err(PersonError::DuplicateEmail(email.to_string()));
        }

        Ok(())
    }

    /// Create a person: validate, derive the stored fields, persist.
    ///
    /// Validation precedes the only write, so a failure leaves no partial
    /// state. The stored age is a snapshot as of today and is never
    /// recomputed; `full_name` is derived from the two name parts.
    pub async fn create_person(&self, input: CreatePerson) -> PersonResult<Person> {
        self.validate_parameters(input.date_of_birth, &input.email)
            .await?;

        let record = NewPerson {
            full_name: format!("{} {}", input.first_name, input.last_name),
            email_address: input.email,
            age: calculate_age(input.date_of_birth, Utc::now().date_naive()),
        };

        self.repository.insert(record).await
    }

    /// Persons whose stored email address ends with `domain`, verbatim.
    ///
    /// No normalization: the caller decides whether to include a leading
    /// `@`. Empty vec when nothing matches.
    pub async fn persons_by_email_domain(&self, domain: &str) -> PersonResult<Vec<Person>> {
        self.repository.find_by_email_domain(domain).await
    }

    /// Persons whose frozen age satisfies `from_age <= age <= to_age`.
    ///
    /// An inverted range is legal and simply yields no matches.
    pub async fn persons_by_age_range(
        &self,
        from_age: i32,
        to_age: i32,
    ) -> PersonResult<Vec<Person>> {
        self.repository.find_by_age_between(from_age, to_age).await
    }
}
