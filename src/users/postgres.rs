use std::time::Duration;

use sqlx::{PgPool, postgres::PgPoolOptions};
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, info, instrument};

use super::{NewUser, User, UserStore, UserStoreError};

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// One command runs per process, so a single connection is enough.
const MAX_CONNECTIONS: u32 = 1;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

const USER_COLUMNS: &str = "id, created_at, updated_at, name";

/// [`UserStore`] backed by a PostgreSQL `users` table.
///
/// The store owns a current-thread tokio runtime and blocks on it for every
/// query, so callers stay synchronous.
pub struct PgUserStore {
    pool: PgPool,
    runtime: Runtime,
}

impl PgUserStore {
    /// Connects to `db_url` and applies pending migrations.
    ///
    /// TLS is negotiated with rustls when the URL asks for it (`sslmode=require`).
    ///
    /// # Errors
    /// - [`UserStoreError::Connection`] if the runtime cannot start or the database is unreachable
    /// - [`UserStoreError::Migration`] if the schema cannot be migrated
    #[instrument(skip_all)]
    pub fn connect(db_url: &str) -> Result<Self, UserStoreError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| UserStoreError::Connection(e.to_string()))?;

        let pool = runtime
            .block_on(
                PgPoolOptions::new()
                    .max_connections(MAX_CONNECTIONS)
                    .acquire_timeout(ACQUIRE_TIMEOUT)
                    .connect(db_url),
            )
            .map_err(|e| UserStoreError::Connection(e.to_string()))?;

        info!("Connected to user database");

        runtime.block_on(MIGRATOR.run(&pool))?;
        debug!("User database migrations applied");

        Ok(Self { pool, runtime })
    }
}

impl UserStore for PgUserStore {
    fn find_by_name(&self, name: &str) -> Result<User, UserStoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE name = $1");

        self.runtime
            .block_on(
                sqlx::query_as::<_, User>(&query)
                    .bind(name)
                    .fetch_optional(&self.pool),
            )?
            .ok_or_else(|| UserStoreError::NotFound {
                name: name.to_string(),
            })
    }

    fn create(&self, user: NewUser) -> Result<User, UserStoreError> {
        let query = format!(
            "INSERT INTO users ({USER_COLUMNS}) VALUES ($1, $2, $3, $4) RETURNING {USER_COLUMNS}"
        );

        let result = self.runtime.block_on(
            sqlx::query_as::<_, User>(&query)
                .bind(user.id)
                .bind(user.created_at)
                .bind(user.updated_at)
                .bind(&user.name)
                .fetch_one(&self.pool),
        );

        match result {
            Ok(created) => Ok(created),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(UserStoreError::Conflict { name: user.name })
            }
            Err(err) => Err(err.into()),
        }
    }

    fn delete_all(&self) -> Result<u64, UserStoreError> {
        let result = self
            .runtime
            .block_on(sqlx::query("DELETE FROM users").execute(&self.pool))?;

        Ok(result.rows_affected())
    }

    fn list_all(&self) -> Result<Vec<User>, UserStoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users ORDER BY created_at, name");

        let users = self
            .runtime
            .block_on(sqlx::query_as::<_, User>(&query).fetch_all(&self.pool))?;

        Ok(users)
    }
}

impl Drop for PgUserStore {
    fn drop(&mut self) {
        self.runtime.block_on(self.pool.close());
    }
}
