use std::borrow::Cow;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgConnection, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool, Postgres, Transaction};
use tracing::{debug, info, warn};

use crate::db::models::TestRow;
use crate::db::schema::REGISTERED;
use crate::error::SentivestError;

/// Generic PostgreSQL scheme as users usually write it.
pub const PLAIN_SCHEME: &str = "postgresql://";
/// Scheme sqlx's Postgres driver treats as canonical.
pub const DRIVER_SCHEME: &str = "postgres://";

/// Rewrite a leading `postgresql://` to the driver scheme. Any other URL is returned unchanged.
pub fn normalize_database_url(url: &str) -> Cow<'_, str> {
    match url.strip_prefix(PLAIN_SCHEME) {
        Some(rest) => Cow::Owned(format!("{DRIVER_SCHEME}{rest}")),
        None => Cow::Borrowed(url),
    }
}

/// Pool tuning. Checkout and sizing behavior beyond this is left to sqlx.
#[derive(Debug, Clone, Copy)]
pub struct DatabaseOptions {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Process-wide connection manager. Cloning shares the same pool.
#[derive(Clone, Debug)]
pub struct Database {
    pool: PgPool,
    next_session: Arc<AtomicU64>,
}

impl Database {
    pub fn connect(url: &str, debug: bool) -> Result<Self, SentivestError> {
        Self::connect_with(url, debug, DatabaseOptions::default())
    }

    /// Build the pool without opening a connection; an unreachable host surfaces on first use.
    ///
    /// Pooled connections are pinged before reuse. With `debug` every statement is
    /// logged under the `sqlx::query` target.
    pub fn connect_with(
        url: &str,
        debug: bool,
        options: DatabaseOptions,
    ) -> Result<Self, SentivestError> {
        let url = normalize_database_url(url);
        let mut connect = PgConnectOptions::from_str(&url)
            .map_err(|e| SentivestError::InvalidDatabaseUrl(e.to_string()))?;
        if !debug {
            connect = connect.disable_statement_logging();
        }

        let pool = PgPoolOptions::new()
            .max_connections(options.max_connections)
            .acquire_timeout(options.acquire_timeout)
            .test_before_acquire(true)
            .connect_lazy_with(connect);

        Ok(Self {
            pool,
            next_session: Arc::new(AtomicU64::new(1)),
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Open a request-scoped session: one pooled connection inside a transaction.
    pub async fn session(&self) -> Result<Session, SentivestError> {
        let tx = self.pool.begin().await?;
        let id = self.next_session.fetch_add(1, Ordering::Relaxed);
        debug!(session_id = id, "session opened");
        Ok(Session { id, tx })
    }

    /// Create the table of every registered entity if it is missing.
    pub async fn create_schema(&self) -> Result<(), SentivestError> {
        for entity in REGISTERED {
            for stmt in entity.statements() {
                sqlx::query(stmt).execute(&self.pool).await?;
            }
            info!(table = entity.table, "table ensured");
        }
        Ok(())
    }

    /// `SELECT 1` on a transient connection. Any failure yields `false`.
    pub async fn check_connection(&self) -> bool {
        match self.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "database liveness check failed");
                false
            }
        }
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        let mut conn = self.pool.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}

/// Unit of work owned by a single request.
///
/// Nothing is committed unless [`Session::commit`] is called. Dropping the
/// session, or calling [`Session::close`], rolls back and hands the connection
/// back to the pool.
pub struct Session {
    id: u64,
    tx: Transaction<'static, Postgres>,
}

impl Session {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn conn(&mut self) -> &mut PgConnection {
        &mut *self.tx
    }

    /// Rows of `test_table` by ascending id, at most `limit` of them.
    pub async fn list_test_rows(&mut self, limit: u32) -> Result<Vec<TestRow>, SentivestError> {
        let rows = sqlx::query_as::<_, TestRow>(
            r#"SELECT id, name, description, created_at, updated_at
               FROM test_table ORDER BY id ASC LIMIT $1"#,
        )
        .bind(i64::from(limit))
        .fetch_all(self.conn())
        .await?;
        Ok(rows)
    }

    pub async fn commit(self) -> Result<(), SentivestError> {
        self.tx.commit().await?;
        debug!(session_id = self.id, "session committed");
        Ok(())
    }

    pub async fn close(self) -> Result<(), SentivestError> {
        self.tx.rollback().await?;
        debug!(session_id = self.id, "session closed");
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("id", &self.id).finish()
    }
}
