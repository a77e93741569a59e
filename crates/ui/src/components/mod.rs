mod confirm_dialog;
mod question_viewer;
mod timer;

pub use confirm_dialog::ConfirmDialog;
pub use question_viewer::QuestionViewer;
pub use timer::ExamTimer;
