use dioxus::prelude::*;
use dioxus_router::Link;
use exam_core::model::{Exam, ExamId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::runner::ExamRunnerView;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[derive(Clone, Debug, PartialEq)]
struct ExamData {
    exam: Option<Exam>,
}

#[component]
pub fn ExamView(exam_id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let exams = ctx.exam_service();

    let resource = use_resource(use_reactive!(|exam_id| {
        let exams = exams.clone();
        async move {
            let exam = exams
                .get_exam(ExamId::new(exam_id))
                .await
                .map_err(|err| {
                    tracing::warn!(exam_id, error = %err, "failed to load exam");
                    ViewError::Unknown
                })?;
            Ok(ExamData { exam })
        }
    }));

    let state = view_state_from_resource(&resource);

    rsx! {
        match state {
            ViewState::Idle => rsx! {
                div { class: "page", p { "Idle" } }
            },
            ViewState::Loading => rsx! {
                div { class: "page", p { "Loading..." } }
            },
            ViewState::Ready(ExamData { exam: Some(exam) }) => rsx! {
                ExamRunnerView { key: "{exam_id}", exam }
            },
            ViewState::Ready(ExamData { exam: None }) => rsx! {
                div { class: "page empty-state",
                    h2 { "Exam not found" }
                    p { "The exam you are looking for does not exist." }
                    Link { class: "btn btn-secondary", to: Route::ExamList {}, "Back to exams" }
                }
            },
            ViewState::Error(err) => rsx! {
                div { class: "page",
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                }
            },
        }
    }
}
