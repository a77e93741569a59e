use dioxus::prelude::*;
use exam_core::model::OptionKey;
use services::{ExamRunner, FinishReason};

use crate::components::{ConfirmDialog, ExamTimer, QuestionViewer};

#[component]
pub(super) fn ActiveScreen(runner: Signal<ExamRunner>, timer_active: Memo<bool>) -> Element {
    let mut runner = runner;
    let mut show_confirm = use_signal(|| false);

    let on_time_up = move |()| {
        show_confirm.set(false);
        if runner.write().time_up() {
            tracing::info!("exam time is up");
        }
    };
    let on_select = move |key: OptionKey| {
        if let Err(err) = runner.write().select_answer(key) {
            tracing::warn!(error = %err, "answer rejected");
        }
    };
    let on_confirm_finish = use_callback(move |()| {
        show_confirm.set(false);
        if let Err(err) = runner.write().finish(FinishReason::Confirmed) {
            tracing::warn!(error = %err, "finish rejected");
        }
    });
    let on_cancel_finish = use_callback(move |()| show_confirm.set(false));

    let guard = runner.read();
    let exam = guard.exam();
    let title = exam.title().to_string();
    let duration_minutes = exam.duration_minutes();
    let total = exam.question_count();
    let current_index = guard.current_index().unwrap_or(0);
    let current_question = guard.current_question().cloned();
    let current_answer = guard.current_answer();
    let answered = guard.answered_count();
    let can_prev = guard.can_go_prev();
    let can_next = guard.can_go_next();
    let pages: Vec<(usize, usize, bool)> = (0..total)
        .map(|index| (index, index + 1, guard.is_answered(index)))
        .collect();
    drop(guard);

    let position_label = format!("{} / {total}", current_index + 1);
    let unanswered = total.saturating_sub(answered);
    let confirm_body = if unanswered > 0 {
        format!("You still have {unanswered} unanswered questions. Finish the exam now?")
    } else {
        "All questions are answered. Finish the exam now?".to_string()
    };

    rsx! {
        section { class: "exam-active",
            header { class: "exam-active__header",
                div { class: "exam-active__heading",
                    h2 { class: "exam-active__title", "{title}" }
                    p { class: "exam-active__progress", "Answered {answered} / {total}" }
                }
                ExamTimer { duration_minutes, is_active: timer_active, on_time_up }
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: move |_| show_confirm.set(true),
                    "Finish Exam"
                }
            }

            if let Some(question) = current_question {
                div { class: "exam-active__body",
                    QuestionViewer {
                        question,
                        number: current_index + 1,
                        selected: current_answer,
                        on_select,
                    }
                    div { class: "exam-active__nav",
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            disabled: !can_prev,
                            onclick: move |_| {
                                runner.write().prev();
                            },
                            "Previous"
                        }
                        span { class: "exam-active__position", "{position_label}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            disabled: !can_next,
                            onclick: move |_| {
                                runner.write().next();
                            },
                            "Next"
                        }
                    }
                }
            } else {
                div { class: "empty-state",
                    p { "This exam has no questions yet." }
                }
            }

            if total > 0 {
                nav { class: "exam-pagination", aria_label: "Questions",
                    for (index, number, is_answered) in pages {
                        button {
                            key: "{index}",
                            class: pagination_class(index == current_index, is_answered),
                            r#type: "button",
                            onclick: move |_| {
                                runner.write().jump_to(index);
                            },
                            "{number}"
                        }
                    }
                }
            }

            if show_confirm() {
                ConfirmDialog {
                    title: "Finish exam?",
                    body: confirm_body,
                    confirm_label: "Finish",
                    on_cancel: on_cancel_finish,
                    on_confirm: on_confirm_finish,
                }
            }
        }
    }
}

fn pagination_class(is_current: bool, is_answered: bool) -> &'static str {
    match (is_current, is_answered) {
        (true, true) => "exam-pagination__item exam-pagination__item--current exam-pagination__item--answered",
        (true, false) => "exam-pagination__item exam-pagination__item--current",
        (false, true) => "exam-pagination__item exam-pagination__item--answered",
        (false, false) => "exam-pagination__item",
    }
}
