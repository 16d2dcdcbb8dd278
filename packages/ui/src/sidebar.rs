use dioxus::prelude::*;

use crate::icons::{FaListCheck, FaPlus};
use crate::{use_session, use_tasks, Icon, LogoutButton, ThemeToggle};

const SIDEBAR_CSS: Asset = asset!("/assets/sidebar.css");

#[component]
fn Stat(label: &'static str, value: usize, class: &'static str) -> Element {
    rsx! {
        div {
            class: "stat {class}",
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

/// Dashboard sidebar: who is signed in, task counts and app controls.
#[component]
pub fn Sidebar(on_add_task: EventHandler<()>, on_logout: EventHandler<()>) -> Element {
    let tasks = use_tasks();
    let session = use_session();
    let stats = tasks.read().stats(&session);

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        aside {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                Icon { icon: FaListCheck, width: 18, height: 18 }
                span { "TaskFlow" }
            }

            if let Some(user) = session.user() {
                div {
                    class: "sidebar-user",
                    span { class: "sidebar-user-name", "{user.display_name()}" }
                    span { class: "sidebar-user-email", "{user.email}" }
                }
            }

            button {
                class: "btn btn-primary sidebar-add",
                onclick: move |_| on_add_task.call(()),
                Icon { icon: FaPlus, width: 14, height: 14 }
                span { "Add Task" }
            }

            div {
                class: "sidebar-stats",
                Stat { label: "Pending", value: stats.pending, class: "pending" }
                Stat { label: "Completed", value: stats.completed, class: "completed" }
                Stat { label: "Total", value: stats.total, class: "total" }
            }

            div {
                class: "sidebar-footer",
                ThemeToggle {}
                LogoutButton { on_logout }
            }
        }
    }
}
