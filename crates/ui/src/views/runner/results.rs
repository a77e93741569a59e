use dioxus::prelude::*;
use dioxus_router::Link;
use exam_core::scoring::{QuestionOutcome, ReviewFilter};
use services::ExamRunner;

use crate::routes::Route;
use crate::vm::{
    ResultsVm, ReviewItemVm, filter_label, map_review_items, outcome_label,
};

#[component]
pub(super) fn ResultsScreen(runner: Signal<ExamRunner>) -> Element {
    let mut runner = runner;
    let guard = runner.read();
    let title = guard.exam().title().to_string();
    let Some(finished) = guard.finished() else {
        return rsx! {};
    };
    let results = ResultsVm::from(finished);
    let filter = finished.filter();
    let items = map_review_items(&guard.review_items());
    let filter_text = filter_label(filter);
    drop(guard);

    let mut on_filter = move |requested: ReviewFilter| {
        runner.write().toggle_filter(requested);
    };

    rsx! {
        section { class: "exam-results",
            header { class: "exam-results__header",
                h2 { class: "exam-results__title", "{title}" }
                p { class: "exam-results__subtitle", "Results" }
            }
            if results.timed_out {
                p { class: "exam-results__banner", role: "alert",
                    "Time is up. Your answers were submitted automatically."
                }
            }

            div { class: "score-cards",
                ScoreCard {
                    label: "Correct",
                    value: results.correct,
                    variant: "score-card--correct",
                    active: filter == ReviewFilter::Correct,
                    on_click: move |()| on_filter(ReviewFilter::Correct),
                }
                ScoreCard {
                    label: "Wrong",
                    value: results.wrong,
                    variant: "score-card--wrong",
                    active: filter == ReviewFilter::Wrong,
                    on_click: move |()| on_filter(ReviewFilter::Wrong),
                }
                ScoreCard {
                    label: "Empty",
                    value: results.empty,
                    variant: "score-card--empty",
                    active: filter == ReviewFilter::Empty,
                    on_click: move |()| on_filter(ReviewFilter::Empty),
                }
                div { class: "score-card score-card--total",
                    span { class: "score-card__label", "Score" }
                    span { class: "score-card__value", "{results.score_label}" }
                }
            }

            dl { class: "exam-results__meta",
                dt { "Finished" }
                dd { "{results.finished_at_str}" }
                dt { "Time spent" }
                dd { "{results.time_spent_str}" }
                dt { "Questions" }
                dd { "{results.total}" }
            }

            div { class: "exam-results__filter",
                span { "Showing: {filter_text}" }
                if filter != ReviewFilter::All {
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            runner.write().clear_filter();
                        },
                        "Clear filter"
                    }
                }
            }

            if items.is_empty() {
                p { class: "empty-state", "No results in this category." }
            } else {
                ol { class: "review-list",
                    for item in items {
                        ReviewCard { key: "{item.number}", item }
                    }
                }
            }

            div { class: "exam-results__actions",
                Link { class: "btn btn-primary", to: Route::ExamList {}, "Back to exams" }
            }
        }
    }
}

#[component]
fn ScoreCard(
    label: &'static str,
    value: u32,
    variant: &'static str,
    active: bool,
    on_click: EventHandler<()>,
) -> Element {
    let active_class = if active { " score-card--active" } else { "" };
    rsx! {
        button {
            class: "score-card {variant}{active_class}",
            r#type: "button",
            aria_pressed: if active { "true" } else { "false" },
            onclick: move |_| on_click.call(()),
            span { class: "score-card__label", "{label}" }
            span { class: "score-card__value", "{value}" }
        }
    }
}

#[component]
fn ReviewCard(item: ReviewItemVm) -> Element {
    let status_class = match item.outcome {
        QuestionOutcome::Correct => "review-card review-card--correct",
        QuestionOutcome::Wrong => "review-card review-card--wrong",
        QuestionOutcome::Empty => "review-card review-card--empty",
    };
    let status = outcome_label(item.outcome);
    rsx! {
        li { class: "{status_class}",
            header { class: "review-card__header",
                h3 { "Question {item.number}" }
                span { class: "review-card__status", "{status}" }
            }
            p { class: "review-card__text", "{item.text}" }
            ul { class: "review-card__options",
                for option in item.options {
                    li {
                        key: "{option.key}",
                        class: option_class(option.is_correct, option.is_selected),
                        span { class: "review-card__key", "{option.key})" }
                        span { "{option.text}" }
                        if option.is_correct {
                            span { class: "review-card__tag", "Correct answer" }
                        } else if option.is_selected {
                            span { class: "review-card__tag", "Your answer" }
                        }
                    }
                }
            }
            if let Some(explanation) = item.explanation {
                div { class: "review-card__explanation",
                    strong { "Explanation: " }
                    span { "{explanation}" }
                }
            }
            if let Some(source) = item.source {
                p { class: "review-card__source", "Source: {source}" }
            }
        }
    }
}

fn option_class(is_correct: bool, is_selected: bool) -> &'static str {
    match (is_correct, is_selected) {
        (true, _) => "review-option review-option--correct",
        (false, true) => "review-option review-option--wrong",
        (false, false) => "review-option",
    }
}
