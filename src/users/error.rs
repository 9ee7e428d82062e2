use thiserror::Error;

/// Errors returned by a [`UserStore`](super::UserStore).
#[derive(Error, Debug)]
pub enum UserStoreError {
    /// No user with the given name exists.
    #[error("user '{name}' not found")]
    NotFound {
        /// Name that was looked up
        name: String,
    },

    /// A user with the given name already exists.
    #[error("user '{name}' already exists")]
    Conflict {
        /// Name that was being created
        name: String,
    },

    /// The store could not be reached.
    #[error("failed to connect to user database: {0}")]
    Connection(String),

    /// The schema could not be brought up to date.
    #[error("user database migration failed: {0}")]
    Migration(String),

    /// A query failed for a reason other than the ones above.
    #[error("user database query failed: {0}")]
    Query(String),
}

impl From<sqlx::Error> for UserStoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                UserStoreError::Connection(err.to_string())
            }
            _ => UserStoreError::Query(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for UserStoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        UserStoreError::Migration(err.to_string())
    }
}
