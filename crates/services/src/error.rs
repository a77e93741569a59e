//! Shared error types for the services crate.

use thiserror::Error;

use storage::connection::ConnectionError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

use crate::runner::RunnerPhase;

/// Errors emitted by `ExamService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExamServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ExamRunner` when an operation does not fit its phase.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RunnerError {
    #[error("terms must be accepted before starting the exam")]
    TermsNotAccepted,
    #[error("cannot {action} while {phase}")]
    InvalidTransition {
        phase: RunnerPhase,
        action: &'static str,
    },
    #[error("option {0} is not offered for this question")]
    UnknownOption(exam_core::model::OptionKey),
    #[error("exam has no questions")]
    NoQuestion,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Connection(#[from] ConnectionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
