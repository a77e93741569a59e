#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod exam_service;
pub mod runner;

pub use exam_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, ExamServiceError, RunnerError};
pub use exam_service::ExamService;
pub use runner::{
    ActiveAttempt, ExamRunner, FinishReason, FinishedAttempt, ReviewItem, RunnerPhase, RunnerState,
};
