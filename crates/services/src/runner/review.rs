use exam_core::model::{Exam, OptionKey, Question};
use exam_core::scoring::QuestionOutcome;

use super::state::FinishedAttempt;

/// One row of the results review list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem<'a> {
    /// Zero-based position in the exam.
    pub index: usize,
    pub question: &'a Question,
    pub selected: Option<OptionKey>,
    pub outcome: QuestionOutcome,
}

impl ReviewItem<'_> {
    /// One-based number shown to the user.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index + 1
    }
}

impl FinishedAttempt {
    /// Questions in exam order that pass the active filter.
    #[must_use]
    pub fn review_items<'a>(&'a self, exam: &'a Exam) -> Vec<ReviewItem<'a>> {
        exam.questions()
            .iter()
            .enumerate()
            .filter_map(|(index, question)| {
                let outcome = QuestionOutcome::classify(question, &self.answers);
                self.filter.matches(outcome).then(|| ReviewItem {
                    index,
                    question,
                    selected: self.answers.get(question.id()),
                    outcome,
                })
            })
            .collect()
    }
}
