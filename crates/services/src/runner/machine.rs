use std::fmt;

use exam_core::Clock;
use exam_core::model::{Exam, OptionKey, Question};
use exam_core::scoring::{ExamResults, ReviewFilter};

use super::review::ReviewItem;
use super::state::{ActiveAttempt, FinishReason, FinishedAttempt, RunnerPhase, RunnerState};
use crate::error::RunnerError;

//
// ─── RUNNER ────────────────────────────────────────────────────────────────────
//

/// Drives one attempt at an exam: intro, then active, then finished.
///
/// The runner owns the attempt's answers and position. `Finished` is
/// terminal; a new attempt needs a new runner.
pub struct ExamRunner {
    exam: Exam,
    clock: Clock,
    state: RunnerState,
}

impl ExamRunner {
    #[must_use]
    pub fn new(exam: Exam, clock: Clock) -> Self {
        Self {
            exam,
            clock,
            state: RunnerState::Intro {
                terms_accepted: false,
            },
        }
    }

    #[must_use]
    pub fn exam(&self) -> &Exam {
        &self.exam
    }

    #[must_use]
    pub fn state(&self) -> &RunnerState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> RunnerPhase {
        self.state.phase()
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveAttempt> {
        match &self.state {
            RunnerState::Active(active) => Some(active),
            _ => None,
        }
    }

    #[must_use]
    pub fn finished(&self) -> Option<&FinishedAttempt> {
        match &self.state {
            RunnerState::Finished(finished) => Some(finished),
            _ => None,
        }
    }

    fn active_mut(&mut self) -> Option<&mut ActiveAttempt> {
        match &mut self.state {
            RunnerState::Active(active) => Some(active),
            _ => None,
        }
    }

    fn invalid(&self, action: &'static str) -> RunnerError {
        RunnerError::InvalidTransition {
            phase: self.phase(),
            action,
        }
    }

    //
    // ─── INTRO ─────────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn terms_accepted(&self) -> bool {
        matches!(
            self.state,
            RunnerState::Intro {
                terms_accepted: true
            }
        )
    }

    /// # Errors
    ///
    /// Returns `RunnerError::InvalidTransition` outside the intro phase.
    pub fn set_terms_accepted(&mut self, accepted: bool) -> Result<(), RunnerError> {
        match &mut self.state {
            RunnerState::Intro { terms_accepted } => {
                *terms_accepted = accepted;
                Ok(())
            }
            _ => Err(self.invalid("change the terms")),
        }
    }

    /// # Errors
    ///
    /// Returns `RunnerError::InvalidTransition` outside the intro phase.
    pub fn toggle_terms(&mut self) -> Result<(), RunnerError> {
        let accepted = self.terms_accepted();
        self.set_terms_accepted(!accepted)
    }

    /// Begin the attempt with an empty answer sheet at the first question.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::TermsNotAccepted` if the terms box is unchecked,
    /// or `RunnerError::InvalidTransition` outside the intro phase.
    pub fn start(&mut self) -> Result<(), RunnerError> {
        match self.state {
            RunnerState::Intro {
                terms_accepted: true,
            } => {
                let started_at = self.clock.now();
                self.state = RunnerState::Active(ActiveAttempt::new(started_at));
                tracing::info!(
                    exam_id = %self.exam.id(),
                    questions = self.exam.question_count(),
                    "exam started"
                );
                Ok(())
            }
            RunnerState::Intro {
                terms_accepted: false,
            } => Err(RunnerError::TermsNotAccepted),
            _ => Err(self.invalid("start")),
        }
    }

    //
    // ─── ACTIVE ────────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.active().map(ActiveAttempt::current_index)
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        let index = self.current_index()?;
        self.exam.question(index)
    }

    #[must_use]
    pub fn current_answer(&self) -> Option<OptionKey> {
        let question = self.current_question()?;
        self.active()?.answers.get(question.id())
    }

    /// Whether the question at `index` has an answer in the running attempt.
    #[must_use]
    pub fn is_answered(&self, index: usize) -> bool {
        match (self.active(), self.exam.question(index)) {
            (Some(active), Some(question)) => active.answers.is_answered(question.id()),
            _ => false,
        }
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        match &self.state {
            RunnerState::Active(active) => active.answers.len(),
            RunnerState::Finished(finished) => finished.answers.len(),
            RunnerState::Intro { .. } => 0,
        }
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.current_index().is_some_and(|index| index > 0)
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.current_index()
            .is_some_and(|index| index + 1 < self.exam.question_count())
    }

    /// Record `key` for the current question, replacing any earlier choice.
    ///
    /// Returns the previous choice.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::InvalidTransition` outside the active phase,
    /// `RunnerError::NoQuestion` for an exam without questions, and
    /// `RunnerError::UnknownOption` if the question does not offer `key`.
    pub fn select_answer(&mut self, key: OptionKey) -> Result<Option<OptionKey>, RunnerError> {
        let Some(index) = self.current_index() else {
            return Err(self.invalid("answer"));
        };
        let Some(question) = self.exam.question(index) else {
            return Err(RunnerError::NoQuestion);
        };
        if !question.has_option(key) {
            return Err(RunnerError::UnknownOption(key));
        }
        let question_id = question.id();
        let Some(active) = self.active_mut() else {
            return Err(RunnerError::NoQuestion);
        };
        Ok(active.answers.record(question_id, key))
    }

    /// Move to the next question. Returns `false` at the last question.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.active_mut().is_some_and(|active| {
            active.current += 1;
            true
        })
    }

    /// Move to the previous question. Returns `false` at the first question.
    pub fn prev(&mut self) -> bool {
        if !self.can_go_prev() {
            return false;
        }
        self.active_mut().is_some_and(|active| {
            active.current -= 1;
            true
        })
    }

    /// Jump to any question. Out-of-range indexes are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.exam.question_count() {
            return false;
        }
        self.active_mut().is_some_and(|active| {
            active.current = index;
            true
        })
    }

    /// End the attempt and score it.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::InvalidTransition` outside the active phase.
    pub fn finish(&mut self, reason: FinishReason) -> Result<(), RunnerError> {
        let placeholder = RunnerState::Intro {
            terms_accepted: false,
        };
        match std::mem::replace(&mut self.state, placeholder) {
            RunnerState::Active(active) => {
                let finished =
                    FinishedAttempt::from_active(&self.exam, active, reason, self.clock.now());
                tracing::info!(
                    exam_id = %self.exam.id(),
                    ?reason,
                    correct = finished.results.correct,
                    wrong = finished.results.wrong,
                    empty = finished.results.empty,
                    "exam finished"
                );
                self.state = RunnerState::Finished(finished);
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.invalid("finish"))
            }
        }
    }

    /// Countdown expiry. Finishes a running attempt; ignored otherwise.
    pub fn time_up(&mut self) -> bool {
        if self.phase() != RunnerPhase::Active {
            tracing::debug!(phase = ?self.phase(), "ignoring time-up signal");
            return false;
        }
        self.finish(FinishReason::TimeUp).is_ok()
    }

    //
    // ─── FINISHED ──────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn results(&self) -> Option<ExamResults> {
        self.finished().map(FinishedAttempt::results)
    }

    /// Returns `false` unless the attempt is finished.
    pub fn toggle_filter(&mut self, requested: ReviewFilter) -> bool {
        match &mut self.state {
            RunnerState::Finished(finished) => {
                finished.toggle_filter(requested);
                true
            }
            _ => false,
        }
    }

    /// Returns `false` unless the attempt is finished.
    pub fn clear_filter(&mut self) -> bool {
        match &mut self.state {
            RunnerState::Finished(finished) => {
                finished.clear_filter();
                true
            }
            _ => false,
        }
    }

    /// Filtered review list; empty unless the attempt is finished.
    #[must_use]
    pub fn review_items(&self) -> Vec<ReviewItem<'_>> {
        self.finished()
            .map(|finished| finished.review_items(&self.exam))
            .unwrap_or_default()
    }

    #[cfg(test)]
    pub(crate) fn advance_clock(&mut self, delta: chrono::Duration) {
        self.clock.advance(delta);
    }
}

impl fmt::Debug for ExamRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExamRunner")
            .field("exam_id", &self.exam.id())
            .field("questions", &self.exam.question_count())
            .field("phase", &self.phase())
            .field("current", &self.current_index())
            .field("answered", &self.answered_count())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
