use dioxus::prelude::*;
use store::deadline::now_local;
use store::{NewTask, TaskDraft};
use ui::{use_session, use_tasks, TaskForm};

use crate::Route;

/// Edit page for one task. Ids that are unknown, or belong to someone else,
/// lead back to the dashboard.
#[component]
pub fn TaskDetail(id: String) -> Element {
    let mut tasks = use_tasks();
    let session = use_session();
    let nav = use_navigator();

    let Some(task) = tasks.read().get(&session, &id).cloned() else {
        tracing::debug!("No task {id} for this user");
        nav.replace(Route::Dashboard {});
        return rsx! {};
    };

    let initial = TaskDraft::from_task(&task, now_local().date());
    let save = move |fields: NewTask| {
        tasks.write().edit(task.revised(fields));
        nav.push(Route::Dashboard {});
    };

    rsx! {
        div {
            class: "page",
            h1 { "Edit Task" }
            TaskForm {
                key: "{id}",
                initial,
                submit_label: "Save Changes",
                on_submit: save,
                on_cancel: move |_| {
                    nav.push(Route::Dashboard {});
                },
            }
        }
    }
}
