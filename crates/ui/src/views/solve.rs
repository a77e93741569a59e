use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn SolveView() -> Element {
    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Solve" }
                p { class: "page-subtitle", "Choose how you want to practice." }
            }
            div { class: "section-grid",
                Link { class: "section-card", to: Route::ExamList {},
                    h3 { class: "section-card__title", "Practice Exams" }
                    p { class: "section-card__body",
                        "Full-length timed exams with scoring and answer review."
                    }
                }
                div { class: "section-card section-card--disabled", aria_disabled: "true",
                    h3 { class: "section-card__title", "Topic Drills" }
                    p { class: "section-card__body", "Coming soon." }
                }
            }
        }
    }
}
