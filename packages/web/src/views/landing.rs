use dioxus::prelude::*;
use ui::icons::FaListCheck;
use ui::{use_session, Icon, ThemeToggle};

use crate::Route;

#[component]
pub fn Landing() -> Element {
    let session = use_session();

    rsx! {
        div {
            class: "landing",
            header {
                class: "landing-header",
                div {
                    class: "brand",
                    Icon { icon: FaListCheck, width: 20, height: 20 }
                    span { "TaskFlow" }
                }
                ThemeToggle {}
            }
            main {
                class: "landing-hero",
                h1 { "Stay on top of every deadline" }
                p {
                    "Plan tasks, break them into steps and watch the countdown as due dates approach."
                }
                div {
                    class: "landing-actions",
                    if session.is_authenticated() {
                        Link { class: "btn btn-primary", to: Route::Dashboard {}, "Open Dashboard" }
                    } else {
                        Link { class: "btn btn-primary", to: Route::Register {}, "Get Started" }
                        Link { class: "btn btn-outline", to: Route::Login {}, "Sign In" }
                    }
                }
            }
        }
    }
}
