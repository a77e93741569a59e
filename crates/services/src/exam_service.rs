use std::sync::Arc;

use exam_core::model::{Exam, ExamId, ExamSummary};
use storage::repository::ExamRepository;

use crate::Clock;
use crate::error::ExamServiceError;
use crate::runner::ExamRunner;

/// Read-side access to the exam catalogue.
#[derive(Clone)]
pub struct ExamService {
    clock: Clock,
    exams: Arc<dyn ExamRepository>,
}

impl ExamService {
    #[must_use]
    pub fn new(clock: Clock, exams: Arc<dyn ExamRepository>) -> Self {
        Self { clock, exams }
    }

    /// List all exams ordered by exam number.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::Storage` if repository access fails.
    pub async fn list_exams(&self) -> Result<Vec<ExamSummary>, ExamServiceError> {
        let exams = self.exams.list_exams().await?;
        tracing::debug!(count = exams.len(), "loaded exam list");
        Ok(exams)
    }

    /// Fetch an exam with its questions.
    ///
    /// Returns `Ok(None)` when the exam does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::Storage` if repository access fails.
    pub async fn get_exam(&self, exam_id: ExamId) -> Result<Option<Exam>, ExamServiceError> {
        let exam = self.exams.get_exam(exam_id).await?;
        if exam.is_none() {
            tracing::info!(%exam_id, "exam not found");
        }
        Ok(exam)
    }

    /// Fresh runner for one attempt, sharing this service's clock.
    #[must_use]
    pub fn start_attempt(&self, exam: Exam) -> ExamRunner {
        ExamRunner::new(exam, self.clock)
    }
}
