use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ExamCardVm, map_exam_cards};

#[derive(Clone, Debug, PartialEq)]
struct ExamListData {
    cards: Vec<ExamCardVm>,
}

#[component]
pub fn ExamListView() -> Element {
    let ctx = use_context::<AppContext>();
    let exams = ctx.exam_service();

    let resource = use_resource(move || {
        let exams = exams.clone();
        async move {
            let items = exams.list_exams().await.map_err(|err| {
                tracing::warn!(error = %err, "failed to load exam list");
                ViewError::Unknown
            })?;
            Ok(ExamListData {
                cards: map_exam_cards(&items),
            })
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Practice Exams" }
                p { class: "page-subtitle", "Pick an exam to start a timed attempt." }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    if data.cards.is_empty() {
                        div { class: "empty-state",
                            h3 { "No exams yet" }
                            p { "Exams will appear here once they are added." }
                        }
                    } else {
                        ul { class: "exam-grid",
                            for card in data.cards {
                                ExamCard { key: "{card.id}", card }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
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
                },
            }
        }
    }
}

#[component]
fn ExamCard(card: ExamCardVm) -> Element {
    rsx! {
        li { class: "exam-card",
            Link { class: "exam-card__link", to: Route::Exam { exam_id: card.id },
                h3 { class: "exam-card__title", "{card.title}" }
                p { class: "exam-card__description", "{card.description}" }
                div { class: "exam-card__meta",
                    span { class: "exam-card__duration", "{card.duration_label}" }
                    span { class: "exam-card__count", "{card.question_label}" }
                }
                span { class: "exam-card__cta", "Start" }
            }
        }
    }
}
