mod machine;
mod review;
mod state;

// Public API of the exam runner.
pub use crate::error::RunnerError;
pub use machine::ExamRunner;
pub use review::ReviewItem;
pub use state::{ActiveAttempt, FinishReason, FinishedAttempt, RunnerPhase, RunnerState};
