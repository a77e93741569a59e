//! Process-wide, lazily established database connection.
//!
//! The first caller connects and migrates; every later caller, including
//! callers that arrive while the first connect is still in flight, gets the
//! same pool. The connection string is read when a caller asks for the
//! connection, never at startup, so builds and tools that never touch the
//! database do not need it.

use std::sync::atomic::{AtomicUsize, Ordering};

use thiserror::Error;
use tokio::sync::OnceCell;

use crate::sqlite::{SqliteInitError, SqliteRepository};

/// Environment variable holding the database URL.
pub const DATABASE_URL_ENV: &str = "EXAM_DB_URL";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConnectionError {
    #[error("{} is not defined in environment variables", DATABASE_URL_ENV)]
    MissingDatabaseUrl,

    #[error(transparent)]
    Init(#[from] SqliteInitError),
}

/// Memoized connection slot.
pub struct SharedConnection {
    cell: OnceCell<SqliteRepository>,
    connect_attempts: AtomicUsize,
}

impl SharedConnection {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::const_new(),
            connect_attempts: AtomicUsize::new(0),
        }
    }

    /// Return the memoized repository, connecting on first use.
    ///
    /// A missing or blank URL is rejected even when a connection already
    /// exists, so misconfiguration surfaces on every call path.
    ///
    /// # Errors
    ///
    /// Returns `ConnectionError::MissingDatabaseUrl` when no URL is given, or
    /// `ConnectionError::Init` when connecting or migrating fails. A failed
    /// attempt leaves the slot empty so the next caller retries.
    pub async fn get_or_connect(
        &self,
        database_url: Option<&str>,
    ) -> Result<&SqliteRepository, ConnectionError> {
        let url = require_url(database_url)?;

        if let Some(repo) = self.cell.get() {
            return Ok(repo);
        }

        self.cell
            .get_or_try_init(|| async move {
                let attempt = self.connect_attempts.fetch_add(1, Ordering::SeqCst) + 1;
                tracing::info!(attempt, "connecting to exam store");
                let repo = SqliteRepository::connect(&url).await?;
                repo.migrate().await?;
                Ok::<_, ConnectionError>(repo)
            })
            .await
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.cell.initialized()
    }

    /// Number of times a connection was actually attempted.
    #[must_use]
    pub fn connect_attempts(&self) -> usize {
        self.connect_attempts.load(Ordering::SeqCst)
    }
}

/// Reject a missing or blank URL and give bare file paths the `sqlite:` scheme.
fn require_url(database_url: Option<&str>) -> Result<String, ConnectionError> {
    database_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(normalize_database_url)
        .ok_or(ConnectionError::MissingDatabaseUrl)
}

/// `exams.db` becomes `sqlite:exams.db`; URLs that already carry the scheme
/// are returned unchanged.
#[must_use]
pub fn normalize_database_url(raw: &str) -> String {
    if raw.starts_with("sqlite:") {
        raw.to_string()
    } else {
        format!("sqlite:{raw}")
    }
}

/// Open the database without running migrations, for read-only inspection.
///
/// The process-wide slot is left untouched.
///
/// # Errors
///
/// Returns `ConnectionError::MissingDatabaseUrl` when no URL is given, or
/// `ConnectionError::Init` when the pool cannot be opened.
pub async fn open_unmigrated(database_url: Option<&str>) -> Result<SqliteRepository, ConnectionError> {
    let url = require_url(database_url)?;
    tracing::info!("opening exam store without migrations");
    Ok(SqliteRepository::connect(&url).await?)
}

impl Default for SharedConnection {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED: SharedConnection = SharedConnection::new();

/// Connect to the database named by `EXAM_DB_URL`, reusing the process-wide
/// connection when one exists.
///
/// # Errors
///
/// See [`SharedConnection::get_or_connect`].
pub async fn connect_to_database() -> Result<&'static SqliteRepository, ConnectionError> {
    let url = std::env::var(DATABASE_URL_ENV).ok();
    SHARED.get_or_connect(url.as_deref()).await
}
