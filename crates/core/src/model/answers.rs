use std::collections::HashMap;

use crate::model::ids::QuestionId;
use crate::model::option_key::OptionKey;

/// Options chosen during one attempt, keyed by question.
///
/// Unanswered questions have no entry; there is no "blank" answer value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    selected: HashMap<QuestionId, OptionKey>,
}

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection, replacing any earlier one for the same question.
    ///
    /// Returns the previous selection, if any.
    pub fn record(&mut self, question_id: QuestionId, key: OptionKey) -> Option<OptionKey> {
        self.selected.insert(question_id, key)
    }

    #[must_use]
    pub fn get(&self, question_id: QuestionId) -> Option<OptionKey> {
        self.selected.get(&question_id).copied()
    }

    #[must_use]
    pub fn is_answered(&self, question_id: QuestionId) -> bool {
        self.selected.contains_key(&question_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl FromIterator<(QuestionId, OptionKey)> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, OptionKey)>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}
