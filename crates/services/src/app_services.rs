use std::sync::Arc;

use storage::connection::connect_to_database;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::exam_service::ExamService;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    exam_service: Arc<ExamService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage at `db_url`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock))
    }

    /// Build services over the process-wide connection named by `EXAM_DB_URL`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Connection` if the variable is missing or
    /// the database cannot be opened.
    pub async fn from_environment(clock: Clock) -> Result<Self, AppServicesError> {
        let repo = connect_to_database().await?;
        let storage = Storage::from_repository(repo.clone());
        Ok(Self::from_storage(&storage, clock))
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock) -> Self {
        let exam_service = Arc::new(ExamService::new(clock, Arc::clone(&storage.exams)));
        Self { exam_service }
    }

    #[must_use]
    pub fn exam_service(&self) -> Arc<ExamService> {
        Arc::clone(&self.exam_service)
    }
}
