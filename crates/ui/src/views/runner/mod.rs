mod active;
mod intro;
mod results;

use dioxus::prelude::*;
use exam_core::model::Exam;
use services::{ExamRunner, RunnerPhase};

use crate::context::AppContext;

use active::ActiveScreen;
use intro::IntroScreen;
use results::ResultsScreen;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// One attempt at `exam`, from the intro screen through the results.
#[component]
pub fn ExamRunnerView(exam: Exam) -> Element {
    let ctx = use_context::<AppContext>();
    let exams = ctx.exam_service();
    let runner = use_signal(move || exams.start_attempt(exam));
    let timer_active = use_memo(move || runner.read().phase() == RunnerPhase::Active);

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<RunnerTestHandles>() {
                handles.register(runner);
            }
        }
    }

    let phase = runner.read().phase();
    rsx! {
        div { class: "page exam-page",
            match phase {
                RunnerPhase::Intro => rsx! { IntroScreen { runner } },
                RunnerPhase::Active => rsx! { ActiveScreen { runner, timer_active } },
                RunnerPhase::Finished => rsx! { ResultsScreen { runner } },
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct RunnerTestHandles {
    runner: Rc<RefCell<Option<Signal<ExamRunner>>>>,
}

#[cfg(test)]
impl RunnerTestHandles {
    pub(crate) fn register(&self, runner: Signal<ExamRunner>) {
        *self.runner.borrow_mut() = Some(runner);
    }

    pub(crate) fn runner(&self) -> Signal<ExamRunner> {
        (*self.runner.borrow()).expect("runner registered")
    }
}
