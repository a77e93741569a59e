//! Classification of answers against an exam's key, and the review filters
//! built on top of it.

use serde::Serialize;

use crate::model::{AnswerSheet, Exam, Question};

/// How a single question ended up after an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QuestionOutcome {
    Correct,
    Wrong,
    Empty,
}

impl QuestionOutcome {
    /// Classify one question against the recorded answers.
    #[must_use]
    pub fn classify(question: &Question, answers: &AnswerSheet) -> Self {
        match answers.get(question.id()) {
            None => Self::Empty,
            Some(key) if key == question.correct_answer() => Self::Correct,
            Some(_) => Self::Wrong,
        }
    }
}

/// Aggregate counts for an attempt.
///
/// `correct + wrong + empty == total` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExamResults {
    pub correct: u32,
    pub wrong: u32,
    pub empty: u32,
    pub total: u32,
}

impl ExamResults {
    /// Score every question of `exam` in order.
    #[must_use]
    pub fn score(exam: &Exam, answers: &AnswerSheet) -> Self {
        let mut results = Self::default();
        for question in exam.questions() {
            match QuestionOutcome::classify(question, answers) {
                QuestionOutcome::Correct => results.correct = results.correct.saturating_add(1),
                QuestionOutcome::Wrong => results.wrong = results.wrong.saturating_add(1),
                QuestionOutcome::Empty => results.empty = results.empty.saturating_add(1),
            }
            results.total = results.total.saturating_add(1);
        }
        results
    }

    /// Share of correct answers as a whole percentage, rounded to nearest
    /// (halves round up).
    ///
    /// Returns `None` for an exam without questions.
    #[must_use]
    pub fn score_percent(&self) -> Option<u32> {
        if self.total == 0 {
            return None;
        }
        let correct = u64::from(self.correct);
        let total = u64::from(self.total);
        let rounded = (correct * 200 + total) / (total * 2);
        Some(u32::try_from(rounded).unwrap_or(100))
    }

    #[must_use]
    pub fn count_for(&self, outcome: QuestionOutcome) -> u32 {
        match outcome {
            QuestionOutcome::Correct => self.correct,
            QuestionOutcome::Wrong => self.wrong,
            QuestionOutcome::Empty => self.empty,
        }
    }
}

/// Display-only partition of reviewed questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ReviewFilter {
    #[default]
    All,
    Correct,
    Wrong,
    Empty,
}

impl ReviewFilter {
    /// Selecting the active filter again resets to `All`.
    #[must_use]
    pub fn toggled(self, requested: ReviewFilter) -> ReviewFilter {
        if self == requested {
            ReviewFilter::All
        } else {
            requested
        }
    }

    #[must_use]
    pub fn matches(self, outcome: QuestionOutcome) -> bool {
        match self {
            ReviewFilter::All => true,
            ReviewFilter::Correct => outcome == QuestionOutcome::Correct,
            ReviewFilter::Wrong => outcome == QuestionOutcome::Wrong,
            ReviewFilter::Empty => outcome == QuestionOutcome::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::model::{ExamId, OptionKey, QuestionId};

    fn question(id: u64, correct: OptionKey) -> Question {
        let options = OptionKey::ALL
            .iter()
            .take(4)
            .map(|key| (*key, format!("choice {key}")))
            .collect::<BTreeMap<_, _>>();
        Question::new(QuestionId::new(id), format!("Q{id}"), options, correct, None, None)
            .unwrap()
    }

    fn three_question_exam() -> Exam {
        Exam::new(
            ExamId::new(1),
            1,
            "Mock",
            None,
            30,
            vec![
                question(1, OptionKey::A),
                question(2, OptionKey::B),
                question(3, OptionKey::C),
            ],
        )
        .unwrap()
    }

    #[test]
    fn scores_one_of_each_outcome() {
        let exam = three_question_exam();
        let answers: AnswerSheet = [
            (QuestionId::new(1), OptionKey::A),
            (QuestionId::new(2), OptionKey::C),
        ]
        .into_iter()
        .collect();

        let results = ExamResults::score(&exam, &answers);
        assert_eq!(
            results,
            ExamResults {
                correct: 1,
                wrong: 1,
                empty: 1,
                total: 3
            }
        );
        assert_eq!(results.score_percent(), Some(33));
        assert_eq!(results.count_for(QuestionOutcome::Correct), 1);
        assert_eq!(results.count_for(QuestionOutcome::Wrong), 1);
        assert_eq!(results.count_for(QuestionOutcome::Empty), 1);
    }

    #[test]
    fn counts_always_sum_to_total() {
        let exam = three_question_exam();
        let keys = [None, Some(OptionKey::A), Some(OptionKey::B), Some(OptionKey::C)];
        for a in keys {
            for b in keys {
                for c in keys {
                    let answers: AnswerSheet = [a, b, c]
                        .into_iter()
                        .enumerate()
                        .filter_map(|(i, key)| key.map(|k| (QuestionId::new(i as u64 + 1), k)))
                        .collect();
                    let r = ExamResults::score(&exam, &answers);
                    assert_eq!(r.correct + r.wrong + r.empty, r.total);
                    assert_eq!(r.total, 3);
                }
            }
        }
    }

    #[test]
    fn score_percent_rounds_to_nearest() {
        let r = ExamResults {
            correct: 2,
            wrong: 1,
            empty: 0,
            total: 3,
        };
        assert_eq!(r.score_percent(), Some(67));

        let r = ExamResults {
            correct: 1,
            wrong: 7,
            empty: 0,
            total: 8,
        };
        assert_eq!(r.score_percent(), Some(13));
    }

    #[test]
    fn empty_exam_has_no_percentage() {
        let exam = Exam::new(ExamId::new(1), 1, "Empty", None, 5, Vec::new()).unwrap();
        let results = ExamResults::score(&exam, &AnswerSheet::new());
        assert_eq!(results.total, 0);
        assert_eq!(results.score_percent(), None);
    }

    #[test]
    fn toggling_same_filter_twice_returns_all() {
        let once = ReviewFilter::All.toggled(ReviewFilter::Wrong);
        assert_eq!(once, ReviewFilter::Wrong);
        assert_eq!(once.toggled(ReviewFilter::Wrong), ReviewFilter::All);
        assert_eq!(once.toggled(ReviewFilter::Empty), ReviewFilter::Empty);
    }

    #[test]
    fn wrong_filter_excludes_empty_answers() {
        assert!(ReviewFilter::Wrong.matches(QuestionOutcome::Wrong));
        assert!(!ReviewFilter::Wrong.matches(QuestionOutcome::Empty));
        assert!(ReviewFilter::All.matches(QuestionOutcome::Empty));
    }
}
