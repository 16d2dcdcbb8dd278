use dioxus::prelude::*;
use store::deadline::now_local;
use store::{NewTask, TaskDraft};
use ui::{use_session, use_tasks, TaskForm};

use crate::Route;

#[component]
pub fn AddTask() -> Element {
    let mut tasks = use_tasks();
    let session = use_session();
    let nav = use_navigator();
    let initial = TaskDraft::new(now_local().date());

    let save = move |new: NewTask| {
        if let Some(id) = tasks.write().add(&session, new) {
            tracing::info!("Created task {id}");
            nav.push(Route::Dashboard {});
        }
    };

    rsx! {
        div {
            class: "page",
            h1 { "Add Task" }
            TaskForm {
                initial,
                submit_label: "Create Task",
                on_submit: save,
                on_cancel: move |_| {
                    nav.push(Route::Dashboard {});
                },
            }
        }
    }
}
