use async_trait::async_trait;
use exam_core::model::{
    Exam, ExamId, ExamSummary, OptionKey, Question, QuestionId,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid exam document: {0}")]
    InvalidDocument(#[from] exam_core::Error),
}

//
// ─── DOCUMENTS ─────────────────────────────────────────────────────────────────
//

/// Stored shape of a question inside an exam document.
///
/// Option keys are kept as plain strings so documents written by other tools
/// decode here and get validated on the way into the domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDocument {
    pub id: u64,
    pub text: String,
    pub options: BTreeMap<String, String>,
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl QuestionDocument {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id().value(),
            text: question.text().to_owned(),
            options: question
                .options()
                .iter()
                .map(|(key, text)| (key.as_str().to_owned(), text.clone()))
                .collect(),
            correct_answer: question.correct_answer().as_str().to_owned(),
            explanation: question.explanation().map(str::to_owned),
            source: question.source().map(str::to_owned),
        }
    }

    /// Validate the document into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `exam_core::Error` for unknown option labels or invalid content.
    pub fn into_question(self) -> Result<Question, exam_core::Error> {
        let mut options = BTreeMap::new();
        for (raw_key, text) in self.options {
            options.insert(raw_key.parse::<OptionKey>()?, text);
        }
        let correct_answer = self.correct_answer.parse::<OptionKey>()?;
        Ok(Question::new(
            QuestionId::new(self.id),
            self.text,
            options,
            correct_answer,
            self.explanation,
            self.source,
        )?)
    }
}

/// Stored shape of a whole exam, as used by seed files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamDocument {
    pub id: u64,
    pub exam_number: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Minutes.
    pub duration: u32,
    #[serde(default)]
    pub questions: Vec<QuestionDocument>,
}

impl ExamDocument {
    #[must_use]
    pub fn from_exam(exam: &Exam) -> Self {
        Self {
            id: exam.id().value(),
            exam_number: exam.exam_number(),
            title: exam.title().to_owned(),
            description: exam.description().map(str::to_owned),
            duration: exam.duration_minutes(),
            questions: exam
                .questions()
                .iter()
                .map(QuestionDocument::from_question)
                .collect(),
        }
    }

    /// # Errors
    ///
    /// Returns `exam_core::Error` if any part of the document fails validation.
    pub fn into_exam(self) -> Result<Exam, exam_core::Error> {
        let questions = self
            .questions
            .into_iter()
            .map(QuestionDocument::into_question)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Exam::new(
            ExamId::new(self.id),
            self.exam_number,
            self.title,
            self.description,
            self.duration,
            questions,
        )?)
    }
}

//
// ─── CONTRACTS ─────────────────────────────────────────────────────────────────
//

/// Read-only query surface of the exam store.
#[async_trait]
pub trait ExamRepository: Send + Sync {
    /// List every exam ordered by exam number ascending (ties by id).
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn list_exams(&self) -> Result<Vec<ExamSummary>, StorageError>;

    /// Fetch one exam with all question detail.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or the document is invalid.
    async fn get_exam(&self, id: ExamId) -> Result<Option<Exam>, StorageError>;
}

/// Write access used by seeding tools; the application itself never writes.
#[async_trait]
pub trait ExamWriteRepository: Send + Sync {
    /// Insert or replace an exam by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the exam cannot be stored.
    async fn upsert_exam(&self, exam: &Exam) -> Result<(), StorageError>;
}

pub(crate) fn sort_summaries(summaries: &mut [ExamSummary]) {
    summaries.sort_by(|a, b| a.exam_number.cmp(&b.exam_number).then(a.id.cmp(&b.id)));
}

//
// ─── IN-MEMORY ─────────────────────────────────────────────────────────────────
//

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    exams: Arc<Mutex<HashMap<ExamId, Exam>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ExamRepository for InMemoryRepository {
    async fn list_exams(&self) -> Result<Vec<ExamSummary>, StorageError> {
        let guard = self
            .exams
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut summaries: Vec<_> = guard.values().map(Exam::summary).collect();
        sort_summaries(&mut summaries);
        Ok(summaries)
    }

    async fn get_exam(&self, id: ExamId) -> Result<Option<Exam>, StorageError> {
        let guard = self
            .exams
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&id).cloned())
    }
}

#[async_trait]
impl ExamWriteRepository for InMemoryRepository {
    async fn upsert_exam(&self, exam: &Exam) -> Result<(), StorageError> {
        let mut guard = self
            .exams
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(exam.id(), exam.clone());
        Ok(())
    }
}

/// Repository handles shared by services, behind trait objects for backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub exams: Arc<dyn ExamRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_repository(repo: impl ExamRepository + 'static) -> Self {
        let exams: Arc<dyn ExamRepository> = Arc::new(repo);
        Self { exams }
    }
}
