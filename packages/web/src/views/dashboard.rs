use dioxus::prelude::*;
use ui::{Sidebar, TaskList};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        div {
            class: "dashboard",
            Sidebar {
                on_add_task: move |_| {
                    nav.push(Route::AddTask {});
                },
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
            main {
                class: "dashboard-main",
                h1 { "My Tasks" }
                TaskList {
                    on_edit: move |id: String| {
                        nav.push(Route::TaskDetail { id });
                    },
                }
            }
        }
    }
}
