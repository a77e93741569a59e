use dioxus::prelude::*;
use dioxus_router::Link;
use services::ExamRunner;

use crate::routes::Route;

#[component]
pub(super) fn IntroScreen(runner: Signal<ExamRunner>) -> Element {
    let mut runner = runner;
    let guard = runner.read();
    let exam = guard.exam();
    let title = exam.title().to_string();
    let description = exam.description().map(str::to_string);
    let duration = exam.duration_minutes();
    let question_count = exam.question_count();
    let terms_accepted = guard.terms_accepted();
    drop(guard);

    rsx! {
        section { class: "exam-intro",
            h2 { class: "exam-intro__title", "{title}" }
            if let Some(description) = description {
                p { class: "exam-intro__description", "{description}" }
            }
            dl { class: "exam-intro__facts",
                dt { "Duration" }
                dd { "{duration} min" }
                dt { "Questions" }
                dd { "{question_count}" }
            }
            ul { class: "exam-intro__rules",
                li { "The timer starts as soon as you begin and cannot be paused." }
                li { "You can move freely between questions and change your answers." }
                li { "When time runs out, the exam ends and your answers are scored." }
                li { "Unanswered questions count as empty." }
            }
            label { class: "exam-intro__terms",
                input {
                    r#type: "checkbox",
                    checked: terms_accepted,
                    onchange: move |_| {
                        if let Err(err) = runner.write().toggle_terms() {
                            tracing::debug!(error = %err, "terms toggle rejected");
                        }
                    },
                }
                span { "I have read the rules and I am ready to start." }
            }
            div { class: "exam-intro__actions",
                Link { class: "btn btn-secondary", to: Route::ExamList {}, "Back" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !terms_accepted,
                    onclick: move |_| {
                        if let Err(err) = runner.write().start() {
                            tracing::debug!(error = %err, "start rejected");
                        }
                    },
                    "Start Exam"
                }
            }
        }
    }
}
