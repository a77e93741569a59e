use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::option_key::OptionKey;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text cannot be empty")]
    EmptyText,

    #[error("question must offer at least one option")]
    NoOptions,

    #[error("option {0} has empty text")]
    EmptyOption(OptionKey),

    #[error("correct answer {0} is not one of the offered options")]
    CorrectAnswerNotOffered(OptionKey),
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One multiple-choice item of an exam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: BTreeMap<OptionKey, String>,
    correct_answer: OptionKey,
    explanation: Option<String>,
    source: Option<String>,
}

impl Question {
    /// Creates a validated question.
    ///
    /// Blank explanation and source strings are normalized to `None`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text or an option is blank, no options are
    /// given, or the correct answer does not name an offered option.
    pub fn new(
        id: QuestionId,
        text: impl Into<String>,
        options: BTreeMap<OptionKey, String>,
        correct_answer: OptionKey,
        explanation: Option<String>,
        source: Option<String>,
    ) -> Result<Self, QuestionError> {
        let text = text.into().trim().to_owned();
        if text.is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if let Some((key, _)) = options.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(QuestionError::EmptyOption(*key));
        }
        if !options.contains_key(&correct_answer) {
            return Err(QuestionError::CorrectAnswerNotOffered(correct_answer));
        }

        Ok(Self {
            id,
            text,
            options,
            correct_answer,
            explanation: non_blank(explanation),
            source: non_blank(source),
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Options in label order.
    #[must_use]
    pub fn options(&self) -> &BTreeMap<OptionKey, String> {
        &self.options
    }

    #[must_use]
    pub fn option_text(&self, key: OptionKey) -> Option<&str> {
        self.options.get(&key).map(String::as_str)
    }

    #[must_use]
    pub fn has_option(&self, key: OptionKey) -> bool {
        self.options.contains_key(&key)
    }

    #[must_use]
    pub fn correct_answer(&self) -> OptionKey {
        self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> Option<&str> {
        self.explanation.as_deref()
    }

    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(keys: &[OptionKey]) -> BTreeMap<OptionKey, String> {
        keys.iter()
            .map(|key| (*key, format!("option {key}")))
            .collect()
    }

    #[test]
    fn builds_valid_question() {
        let q = Question::new(
            QuestionId::new(1),
            "  What is 2 + 2?  ",
            options(&[OptionKey::A, OptionKey::B]),
            OptionKey::B,
            Some("Basic arithmetic".into()),
            Some("   ".into()),
        )
        .unwrap();

        assert_eq!(q.text(), "What is 2 + 2?");
        assert_eq!(q.correct_answer(), OptionKey::B);
        assert_eq!(q.explanation(), Some("Basic arithmetic"));
        assert_eq!(q.source(), None);
        assert_eq!(q.option_text(OptionKey::A), Some("option A"));
        assert!(!q.has_option(OptionKey::C));
    }

    #[test]
    fn rejects_correct_answer_outside_options() {
        let err = Question::new(
            QuestionId::new(1),
            "Q",
            options(&[OptionKey::A, OptionKey::B]),
            OptionKey::D,
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::CorrectAnswerNotOffered(OptionKey::D));
    }

    #[test]
    fn rejects_blank_text_and_options() {
        let err = Question::new(
            QuestionId::new(1),
            " ",
            options(&[OptionKey::A]),
            OptionKey::A,
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::EmptyText);

        let err = Question::new(
            QuestionId::new(1),
            "Q",
            BTreeMap::new(),
            OptionKey::A,
            None,
            None,
        )
        .unwrap_err();
        assert_eq!(err, QuestionError::NoOptions);

        let mut opts = options(&[OptionKey::A, OptionKey::B]);
        opts.insert(OptionKey::B, "  ".into());
        let err =
            Question::new(QuestionId::new(1), "Q", opts, OptionKey::A, None, None).unwrap_err();
        assert_eq!(err, QuestionError::EmptyOption(OptionKey::B));
    }
}
