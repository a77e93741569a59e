mod answers;
mod exam;
mod ids;
mod option_key;
mod question;

pub use answers::AnswerSheet;
pub use exam::{Exam, ExamError, ExamSummary};
pub use ids::{ExamId, ParseIdError, QuestionId};
pub use option_key::{OptionKey, OptionKeyError};
pub use question::{Question, QuestionError};
