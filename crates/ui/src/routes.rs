use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ExamListView, ExamView, SolveView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ExamListView)] ExamList {},
        #[route("/solve", SolveView)] Solve {},
        #[route("/exam/:exam_id", ExamView)] Exam { exam_id: u64 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Navbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "navbar",
            Link { class: "navbar__brand", to: Route::ExamList {}, "Exam Center" }
            ul { class: "navbar__links",
                li { Link { to: Route::ExamList {}, "Exams" } }
                li { Link { to: Route::Solve {}, "Solve" } }
            }
        }
    }
}
