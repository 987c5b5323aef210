use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{PersonError, PersonResult};
use crate::models::{NewPerson, Person};

/// Storage port for person persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Insert a new person, assigning identity and creation time.
    ///
    /// Does not fail in the documented path: the service pre-check keeps
    /// duplicates out. A store-level unique violation (lost race) still
    /// surfaces as [`PersonError::DuplicateEmail`].
    async fn insert(&self, record: NewPerson) -> PersonResult<Person>;

    /// Whether a person with this email address exists
    async fn exists_by_email(&self, email: &str) -> PersonResult<bool>;

    /// Persons whose email address ends with `suffix`, in storage order
    async fn find_by_email_domain(&self, suffix: &str) -> PersonResult<Vec<Person>>;

    /// Persons whose frozen age lies in the inclusive range, in storage order
    async fn find_by_age_between(&self, from_age: i32, to_age: i32) -> PersonResult<Vec<Person>>;

    /// Remove every person, returning how many were removed.
    /// Test-fixture capability, not a business operation.
    async fn delete_all(&self) -> PersonResult<u64>;
}

/// In-memory implementation of PersonRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryPersonRepository {
    persons: Arc<RwLock<Vec<Person>>>,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self {
            persons: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn insert(&self, record: NewPerson) -> PersonResult<Person> {
        let mut persons = self.persons.write().await;

        // Mirrors the unique index the Postgres store carries.
        if persons
            .iter()
            .any(|p| p.email_address == record.email_address)
        {
            return Err(PersonError::DuplicateEmail(record.email_address));
        }

        let person = Person {
            id: Uuid::now_v7(),
            full_name: record.full_name,
            email_address: record.email_address,
            age: record.age,
            created_at: Utc::now(),
        };
        persons.push(person.clone());

        tracing::info!(person_id = %person.id, "Created person");
        Ok(person)
    }

    async fn exists_by_email(&self, email: &str) -> PersonResult<bool> {
        let persons = self.persons.read().await;
        Ok(persons.iter().any(|p| p.email_address == email))
    }

    async fn find_by_email_domain(&self, suffix: &str) -> PersonResult<Vec<Person>> {
        let persons = self.persons.read().await;
        Ok(persons
            .iter()
            .filter(|p| p.email_address.ends_with(suffix))
            .cloned()
            .collect())
    }

    async fn find_by_age_between(&self, from_age: i32, to_age: i32) -> PersonResult<Vec<Person>> {
        let persons = self.persons.read().await;
        Ok(persons
            .iter()
            .filter(|p| from_age <= p.age && p.age <= to_age)
            .cloned()
            .collect())
    }

    async fn delete_all(&self) -> PersonResult<u64> {
        let mut persons = self.persons.write().await;
        let removed = persons.len() as u64;
        persons.clear();

        tracing::info!(removed, "Deleted all persons");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(full_name: &str, email: &str, age: i32) -> NewPerson {
        NewPerson {
            full_name: full_name.to_string(),
            email_address: email.to_string(),
            age,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_identity() {
        let repo = InMemoryPersonRepository::new();

        let person = repo
            .insert(record("Emma Eidhoven", "emma.eidhoven@hotmail.com", 34))
            .await
            .unwrap();

        assert_eq!(person.full_name, "Emma Eidhoven");
        assert_eq!(person.email_address, "emma.eidhoven@hotmail.com");
        assert_eq!(person.age, 34);
        assert!(repo.exists_by_email("emma.eidhoven@hotmail.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_email() {
        let repo = InMemoryPersonRepository::new();

        repo.insert(record("First Person", "taken@example.com", 30))
            .await
            .unwrap();

        let result = repo.insert(record("Second Person", "taken@example.com", 40)).await;
        assert!(matches!(result, Err(PersonError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_find_by_email_domain_is_literal_suffix_match() {
        let repo = InMemoryPersonRepository::new();

        repo.insert(record("Gmail One", "one@gmail.com", 25)).await.unwrap();
        repo.insert(record("Yahoo One", "two@yahoo.com", 35)).await.unwrap();
        repo.insert(record("Gmail Two", "three@gmail.com", 45)).await.unwrap();

        let matches = repo.find_by_email_domain("gmail.com").await.unwrap();
        let emails: Vec<_> = matches.iter().map(|p| p.email_address.as_str()).collect();
        assert_eq!(emails, vec!["one@gmail.com", "three@gmail.com"]);
    }

    #[tokio::test]
    async fn test_find_by_age_between_is_inclusive() {
        let repo = InMemoryPersonRepository::new();

        for (email, age) in [("a@x.com", 41), ("b@x.com", 55), ("c@x.com", 29), ("d@x.com", 22)] {
            repo.insert(record("Someone", email, age)).await.unwrap();
        }

        let matches = repo.find_by_age_between(20, 30).await.unwrap();
        let ages: Vec<_> = matches.iter().map(|p| p.age).collect();
        assert_eq!(ages, vec![29, 22]);

        let bounds = repo.find_by_age_between(22, 29).await.unwrap();
        assert_eq!(bounds.len(), 2);
    }

    #[tokio::test]
    async fn test_inverted_age_range_matches_nothing() {
        let repo = InMemoryPersonRepository::new();
        repo.insert(record("Someone", "someone@x.com", 30)).await.unwrap();

        let matches = repo.find_by_age_between(40, 20).await.unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_delete_all() {
        let repo = InMemoryPersonRepository::new();
        repo.insert(record("One", "one@x.com", 20)).await.unwrap();
        repo.insert(record("Two", "two@x.com", 30)).await.unwrap();

        assert_eq!(repo.delete_all().await.unwrap(), 2);
        assert!(!repo.exists_by_email("one@x.com").await.unwrap());
    }
}
