use dioxus::prelude::*;
use exam_core::model::{OptionKey, Question};

#[component]
pub fn QuestionViewer(
    question: Question,
    number: usize,
    selected: Option<OptionKey>,
    on_select: EventHandler<OptionKey>,
) -> Element {
    rsx! {
        section { class: "question",
            h3 { class: "question__number", "Question {number}" }
            p { class: "question__text", "{question.text()}" }
            div { class: "question__options", role: "radiogroup",
                for (key, text) in question.options().clone() {
                    button {
                        key: "{key}",
                        class: if selected == Some(key) { "question__option question__option--selected" } else { "question__option" },
                        r#type: "button",
                        role: "radio",
                        aria_checked: if selected == Some(key) { "true" } else { "false" },
                        onclick: move |_| on_select.call(key),
                        span { class: "question__option-key", "{key})" }
                        span { class: "question__option-text", "{text}" }
                    }
                }
            }
        }
    }
}
