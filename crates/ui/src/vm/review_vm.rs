use exam_core::model::OptionKey;
use exam_core::scoring::{ExamResults, QuestionOutcome, ReviewFilter};
use services::{FinishReason, FinishedAttempt, ReviewItem};

use crate::vm::time_fmt::{format_datetime, format_time_spent};

/// Summary numbers for the results screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub correct: u32,
    pub wrong: u32,
    pub empty: u32,
    pub total: u32,
    pub score_label: String,
    pub finished_at_str: String,
    pub time_spent_str: String,
    pub timed_out: bool,
}

impl From<&FinishedAttempt> for ResultsVm {
    fn from(finished: &FinishedAttempt) -> Self {
        let results: ExamResults = finished.results();
        Self {
            correct: results.count_for(QuestionOutcome::Correct),
            wrong: results.count_for(QuestionOutcome::Wrong),
            empty: results.count_for(QuestionOutcome::Empty),
            total: results.total,
            score_label: results
                .score_percent()
                .map_or_else(|| "-".to_string(), |percent| format!("{percent}%")),
            finished_at_str: format_datetime(finished.finished_at()),
            time_spent_str: format_time_spent(finished.time_spent()),
            timed_out: finished.reason() == FinishReason::TimeUp,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRowVm {
    pub key: OptionKey,
    pub text: String,
    pub is_correct: bool,
    pub is_selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewItemVm {
    pub number: usize,
    pub text: String,
    pub outcome: QuestionOutcome,
    pub options: Vec<OptionRowVm>,
    pub explanation: Option<String>,
    pub source: Option<String>,
}

impl From<&ReviewItem<'_>> for ReviewItemVm {
    fn from(item: &ReviewItem<'_>) -> Self {
        let correct = item.question.correct_answer();
        Self {
            number: item.number(),
            text: item.question.text().to_string(),
            outcome: item.outcome,
            options: item
                .question
                .options()
                .iter()
                .map(|(key, text)| OptionRowVm {
                    key: *key,
                    text: text.clone(),
                    is_correct: *key == correct,
                    is_selected: item.selected == Some(*key),
                })
                .collect(),
            explanation: item.question.explanation().map(str::to_string),
            source: item.question.source().map(str::to_string),
        }
    }
}

#[must_use]
pub fn map_review_items(items: &[ReviewItem<'_>]) -> Vec<ReviewItemVm> {
    items.iter().map(ReviewItemVm::from).collect()
}

#[must_use]
pub fn outcome_label(outcome: QuestionOutcome) -> &'static str {
    match outcome {
        QuestionOutcome::Correct => "Correct",
        QuestionOutcome::Wrong => "Wrong",
        QuestionOutcome::Empty => "Empty",
    }
}

#[must_use]
pub fn filter_label(filter: ReviewFilter) -> &'static str {
    match filter {
        ReviewFilter::All => "All",
        ReviewFilter::Correct => "Correct",
        ReviewFilter::Wrong => "Wrong",
        ReviewFilter::Empty => "Empty",
    }
}
