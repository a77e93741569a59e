use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{ExamId, QuestionId};
use crate::model::question::Question;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamError {
    #[error("exam title cannot be empty")]
    EmptyTitle,

    #[error("exam duration must be > 0 minutes")]
    InvalidDuration,

    #[error("question id {0} appears more than once")]
    DuplicateQuestionId(QuestionId),
}

//
// ─── EXAM ──────────────────────────────────────────────────────────────────────
//

/// A named, timed collection of ordered multiple-choice questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exam {
    id: ExamId,
    exam_number: u32,
    title: String,
    description: Option<String>,
    duration_minutes: u32,
    questions: Vec<Question>,
}

impl Exam {
    /// Creates a validated exam.
    ///
    /// An exam without questions is valid; runners handle it as an empty state.
    ///
    /// # Errors
    ///
    /// Returns `ExamError` if the title is blank, the duration is zero, or two
    /// questions share an id.
    pub fn new(
        id: ExamId,
        exam_number: u32,
        title: impl Into<String>,
        description: Option<String>,
        duration_minutes: u32,
        questions: Vec<Question>,
    ) -> Result<Self, ExamError> {
        let title = title.into().trim().to_owned();
        if title.is_empty() {
            return Err(ExamError::EmptyTitle);
        }
        if duration_minutes == 0 {
            return Err(ExamError::InvalidDuration);
        }

        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if !seen.insert(question.id()) {
                return Err(ExamError::DuplicateQuestionId(question.id()));
            }
        }

        let description = description
            .map(|d| d.trim().to_owned())
            .filter(|d| !d.is_empty());

        Ok(Self {
            id,
            exam_number,
            title,
            description,
            duration_minutes,
            questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> ExamId {
        self.id
    }

    /// Sequence number used to order exams in listings.
    #[must_use]
    pub fn exam_number(&self) -> u32 {
        self.exam_number
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> ExamSummary {
        ExamSummary {
            id: self.id,
            exam_number: self.exam_number,
            title: self.title.clone(),
            description: self.description.clone(),
            duration_minutes: self.duration_minutes,
            question_count: u32::try_from(self.questions.len()).unwrap_or(u32::MAX),
        }
    }
}

/// Plain listing shape of an exam: everything but the questions themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamSummary {
    pub id: ExamId,
    pub exam_number: u32,
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: u32,
    pub question_count: u32,
}
