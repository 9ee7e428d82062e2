//! User records and the stores that hold them.
//!
//! Handlers only see the [`UserStore`] trait. [`PgUserStore`] talks to
//! PostgreSQL; [`MemoryUserStore`] keeps everything in process for tests.

mod error;
mod memory;
mod postgres;

pub use error::UserStoreError;
pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique identifier, generated when the user is registered.
    pub id: Uuid,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last modified.
    pub updated_at: DateTime<Utc>,
    /// Unique user name.
    pub name: String,
}

/// Parameters for [`UserStore::create`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Identifier to store.
    pub id: Uuid,
    /// Creation timestamp to store.
    pub created_at: DateTime<Utc>,
    /// Update timestamp to store.
    pub updated_at: DateTime<Utc>,
    /// Requested user name.
    pub name: String,
}

impl NewUser {
    /// Builds a new user with a random v4 id, stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name: name.into(),
        }
    }
}

impl From<NewUser> for User {
    fn from(user: NewUser) -> Self {
        Self {
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
            name: user.name,
        }
    }
}

/// Persistence capability for user records.
pub trait UserStore {
    /// Looks up a user by name.
    ///
    /// # Errors
    /// Returns [`UserStoreError::NotFound`] if no such user exists.
    fn find_by_name(&self, name: &str) -> Result<User, UserStoreError>;

    /// Inserts a user and returns the stored record.
    ///
    /// # Errors
    /// Returns [`UserStoreError::Conflict`] if the name is already taken.
    fn create(&self, user: NewUser) -> Result<User, UserStoreError>;

    /// Deletes every user, returning how many were removed.
    ///
    /// # Errors
    /// Returns an error if the store cannot be reached.
    fn delete_all(&self) -> Result<u64, UserStoreError>;

    /// Returns all users, oldest first.
    ///
    /// # Errors
    /// Returns an error if the store cannot be reached.
    fn list_all(&self) -> Result<Vec<User>, UserStoreError>;
}

#[cfg(test)]
mod tests;
