use exam_core::model::ExamSummary;

const NO_DESCRIPTION: &str = "No description available.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamCardVm {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub duration_label: String,
    pub question_label: String,
}

impl From<&ExamSummary> for ExamCardVm {
    fn from(summary: &ExamSummary) -> Self {
        let question_label = if summary.question_count == 1 {
            "1 question".to_string()
        } else {
            format!("{} questions", summary.question_count)
        };
        Self {
            id: summary.id.value(),
            title: summary.title.clone(),
            description: summary
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            duration_label: format!("{} min", summary.duration_minutes),
            question_label,
        }
    }
}

#[must_use]
pub fn map_exam_cards(items: &[ExamSummary]) -> Vec<ExamCardVm> {
    items.iter().map(ExamCardVm::from).collect()
}
