mod exam;
mod exam_list;
mod runner;
mod solve;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use exam::ExamView;
pub use exam_list::ExamListView;
pub use runner::ExamRunnerView;
pub use solve::SolveView;
pub use state::{ViewError, ViewState, view_state_from_resource};
