use dioxus::prelude::*;
use store::deadline::{classify_at, format_deadline, next_refresh, now_local, parse_deadline};
use store::{Priority, Task};

use crate::icons::{FaCheck, FaClock, FaPen, FaRotateLeft, FaTrash};
use crate::{use_config, use_session, use_tasks, Icon, LiveTicker};

const TASK_CARD_CSS: Asset = asset!("/assets/task_card.css");

/// Colored deadline badge. The clock is read on every render; an open
/// deadline keeps a [`LiveTicker`] mounted to trigger those renders.
#[component]
pub fn DeadlineBadge(deadline: String, completed: bool) -> Element {
    let config = use_config();
    let tick = use_signal(|| 0u64);
    let _generation = tick();

    let Some(at) = parse_deadline(&deadline) else {
        return rsx! {};
    };
    let now = now_local();
    let status = classify_at(at, now);
    let live = !completed && next_refresh(at, now, config.countdown.tick()).is_some();
    let pulse = if status.pulses() { " pulse" } else { "" };
    let class = format!("badge badge-{}{pulse}", status.color().as_str());
    let urgency = status.urgency.as_str();

    rsx! {
        span {
            class,
            title: urgency,
            Icon { icon: FaClock, width: 12, height: 12 }
            span { "{status.text}" }
        }
        if live {
            LiveTicker { deadline: at, tick, live_tick: config.countdown.tick() }
        }
    }
}

#[component]
fn PriorityBadge(priority: Priority) -> Element {
    let class = format!("badge badge-{}", priority.color().as_str());
    let label = priority.label();

    rsx! {
        span { class, "{label}" }
    }
}

/// One task with its badges, checklist and actions.
///
/// Edits go straight to the task store; navigation to the edit page is left
/// to the caller through `on_edit`.
#[component]
pub fn TaskCard(task: Task, on_edit: EventHandler<String>) -> Element {
    let mut tasks = use_tasks();
    let mut confirming = use_signal(|| false);

    let progress = task.progress();
    let deadline_label = task.deadline_at().map(format_deadline);
    let title_class = if task.completed { "task-title done" } else { "task-title" };

    let id = task.id.clone();
    let toggle_completed = move |_| {
        tasks.write().toggle_completed(&id);
    };

    let id = task.id.clone();
    let delete = move |_| {
        tracing::info!("Deleting task {id}");
        tasks.write().delete(&id);
        confirming.set(false);
    };

    let id = task.id.clone();

    rsx! {
        document::Stylesheet { href: TASK_CARD_CSS }

        div {
            class: if task.completed { "task-card completed" } else { "task-card" },

            div {
                class: "task-card-header",
                h3 { class: title_class, "{task.title}" }
                div {
                    class: "task-badges",
                    if task.completed {
                        span { class: "badge badge-green", "Completed" }
                    }
                    if let Some(priority) = task.priority {
                        PriorityBadge { priority }
                    }
                    if !task.completed {
                        if let Some(deadline) = task.deadline.clone() {
                            DeadlineBadge { deadline, completed: task.completed }
                        }
                    }
                }
            }

            if let Some(description) = task.description.as_ref() {
                p { class: "task-description", "{description}" }
            }

            if progress.total > 0 {
                div {
                    class: "task-steps",
                    div {
                        class: "task-progress",
                        span { "{progress.completed}/{progress.total} steps" }
                        div {
                            class: "progress-track",
                            div {
                                class: if progress.is_done() { "progress-fill done" } else { "progress-fill" },
                                style: "width: {progress.percent}%",
                            }
                        }
                        span { "{progress.percent}%" }
                    }
                    ul {
                        for (index, step) in task.steps.iter().enumerate() {
                            li {
                                key: "{index}",
                                class: if step.completed { "step done" } else { "step" },
                                label {
                                    input {
                                        r#type: "checkbox",
                                        checked: step.completed,
                                        onchange: {
                                            let task = task.clone();
                                            move |_| tasks.write().edit(task.with_step_toggled(index))
                                        },
                                    }
                                    span { "{step.text}" }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(label) = deadline_label {
                p { class: "task-deadline", "Due {label}" }
            }

            div {
                class: "task-actions",
                if confirming() {
                    span { class: "confirm-text", "Delete this task?" }
                    button { class: "btn btn-danger", onclick: delete, "Delete" }
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| confirming.set(false),
                        "Cancel"
                    }
                } else {
                    button {
                        class: "btn btn-outline",
                        onclick: toggle_completed,
                        if task.completed {
                            Icon { icon: FaRotateLeft, width: 12, height: 12 }
                            span { "Reopen" }
                        } else {
                            Icon { icon: FaCheck, width: 12, height: 12 }
                            span { "Complete" }
                        }
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_edit.call(id.clone()),
                        Icon { icon: FaPen, width: 12, height: 12 }
                        span { "Edit" }
                    }
                    button {
                        class: "btn btn-outline btn-danger",
                        onclick: move |_| confirming.set(true),
                        Icon { icon: FaTrash, width: 12, height: 12 }
                        span { "Delete" }
                    }
                }
            }
        }
    }
}

/// Cards for every task the signed-in user owns, or an empty state.
#[component]
pub fn TaskList(on_edit: EventHandler<String>) -> Element {
    let tasks = use_tasks();
    let session = use_session();
    let visible: Vec<Task> = tasks.read().visible(&session).into_iter().cloned().collect();

    if visible.is_empty() {
        return rsx! {
            div {
                class: "empty-state",
                h3 { "No tasks yet" }
                p { "Create your first task to get started." }
            }
        };
    }

    rsx! {
        div {
            class: "task-list",
            for task in visible {
                TaskCard { key: "{task.id}", task, on_edit }
            }
        }
    }
}
