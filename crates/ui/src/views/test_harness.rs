use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use exam_core::model::Exam;
use exam_core::time::fixed_clock;
use services::{ExamRunner, ExamService};
use storage::repository::{ExamWriteRepository, InMemoryRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::runner::RunnerTestHandles;
use crate::views::{ExamListView, ExamView, SolveView};

#[derive(Clone)]
struct TestApp {
    exam_service: Arc<ExamService>,
}

impl UiApp for TestApp {
    fn exam_service(&self) -> Arc<ExamService> {
        Arc::clone(&self.exam_service)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    ExamList,
    Solve,
    Exam(u64),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    runner_handles: RunnerTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.runner_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::ExamList => rsx! { ExamListView {} },
        ViewKind::Solve => rsx! { SolveView {} },
        ViewKind::Exam(exam_id) => rsx! { ExamView { exam_id } },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub runner_handles: RunnerTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Mutate the mounted runner, then re-render.
    pub fn with_runner<R>(&mut self, f: impl FnOnce(&mut ExamRunner) -> R) -> R {
        let handles = self.runner_handles.clone();
        let out = self.dom.in_runtime(move || {
            let mut runner = handles.runner();
            let mut guard = runner.write();
            f(&mut guard)
        });
        drive_dom(&mut self.dom);
        out
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind, exams: &[Exam]) -> ViewHarness {
    let repo = InMemoryRepository::new();
    for exam in exams {
        repo.upsert_exam(exam).await.expect("seed exam");
    }
    setup_view_harness_with_storage(view, &Storage::from_repository(repo))
}

pub fn setup_view_harness_with_storage(view: ViewKind, storage: &Storage) -> ViewHarness {
    let exam_service = Arc::new(ExamService::new(fixed_clock(), Arc::clone(&storage.exams)));
    let app = Arc::new(TestApp { exam_service });
    let runner_handles = RunnerTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            runner_handles: runner_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        runner_handles,
    }
}
