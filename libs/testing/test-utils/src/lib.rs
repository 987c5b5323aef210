//! Shared test utilities for domain testing
//!
//! - `TestDatabase`: PostgreSQL container with migrations applied and
//!   automatic cleanup (needs a running Docker daemon)
//! - `TestDataBuilder`: deterministic person test data
//! - `assertions`: custom assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! let builder = TestDataBuilder::from_test_name("my_test");
//!
//! let email = builder.email("emma", "hotmail.com");
//! let name = builder.name("person", "main");
//! # }
//! ```

use chrono::{Datelike, NaiveDate, Utc};

mod postgres;

pub use postgres::TestDatabase;

/// Builder for test data with deterministic randomization
///
/// Seeding from the test name keeps generated emails and names stable
/// across runs while distinct between tests.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("person", "main");
    /// // "test-person-12345-main"
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Generate a unique email address on the given domain
    pub fn email(&self, local: &str, domain: &str) -> String {
        format!("{}.{}@{}", local, self.seed, domain)
    }

    /// A birth date exactly `years` full years before today.
    ///
    /// Pinned to the first of the month so the month/day comparison in age
    /// computation can never flip the result by one.
    pub fn birth_date_with_age(&self, years: i32) -> NaiveDate {
        let today = Utc::now().date_naive();
        NaiveDate::from_ymd_opt(today.year() - years, 1, 1)
            .expect("January 1st exists in every year")
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some and unwrap it
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}
