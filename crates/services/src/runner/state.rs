use std::fmt;

use chrono::{DateTime, Duration, Utc};
use exam_core::model::{AnswerSheet, Exam};
use exam_core::scoring::{ExamResults, ReviewFilter};

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Coarse phase of an attempt, for routing the UI to a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunnerPhase {
    Intro,
    Active,
    Finished,
}

impl fmt::Display for RunnerPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RunnerPhase::Intro => "on the intro screen",
            RunnerPhase::Active => "the exam is running",
            RunnerPhase::Finished => "the exam is finished",
        };
        f.write_str(label)
    }
}

/// Why an attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinishReason {
    /// The user confirmed finishing early.
    Confirmed,
    /// The countdown reached zero.
    TimeUp,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerState {
    Intro { terms_accepted: bool },
    Active(ActiveAttempt),
    Finished(FinishedAttempt),
}

impl RunnerState {
    #[must_use]
    pub fn phase(&self) -> RunnerPhase {
        match self {
            RunnerState::Intro { .. } => RunnerPhase::Intro,
            RunnerState::Active(_) => RunnerPhase::Active,
            RunnerState::Finished(_) => RunnerPhase::Finished,
        }
    }
}

/// An attempt in progress.
///
/// `current` stays within `[0, N-1]`; it is `0` for an exam without
/// questions and every lookup through it is guarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveAttempt {
    pub(crate) current: usize,
    pub(crate) answers: AnswerSheet,
    pub(crate) started_at: DateTime<Utc>,
}

impl ActiveAttempt {
    pub(crate) fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            current: 0,
            answers: AnswerSheet::new(),
            started_at,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

/// A completed attempt with its results computed once on entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedAttempt {
    pub(crate) answers: AnswerSheet,
    pub(crate) results: ExamResults,
    pub(crate) filter: ReviewFilter,
    pub(crate) reason: FinishReason,
    pub(crate) started_at: DateTime<Utc>,
    pub(crate) finished_at: DateTime<Utc>,
}

impl FinishedAttempt {
    pub(crate) fn from_active(
        exam: &Exam,
        active: ActiveAttempt,
        reason: FinishReason,
        finished_at: DateTime<Utc>,
    ) -> Self {
        let results = ExamResults::score(exam, &active.answers);
        Self {
            answers: active.answers,
            results,
            filter: ReviewFilter::All,
            reason,
            started_at: active.started_at,
            finished_at,
        }
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    #[must_use]
    pub fn results(&self) -> ExamResults {
        self.results
    }

    #[must_use]
    pub fn filter(&self) -> ReviewFilter {
        self.filter
    }

    #[must_use]
    pub fn reason(&self) -> FinishReason {
        self.reason
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    /// Wall time between start and finish, never negative.
    #[must_use]
    pub fn time_spent(&self) -> Duration {
        (self.finished_at - self.started_at).max(Duration::zero())
    }

    /// Select `requested`, or go back to `All` if it is already selected.
    pub fn toggle_filter(&mut self, requested: ReviewFilter) {
        self.filter = self.filter.toggled(requested);
    }

    pub fn clear_filter(&mut self) {
        self.filter = ReviewFilter::All;
    }
}
