use dioxus::prelude::*;
use store::forms::{hour_options, minute_options};
use store::{FieldErrors, NewTask, Priority, TaskDraft};

use crate::icons::{FaPlus, FaXmark};
use crate::{use_config, Icon};

const TASK_FORM_CSS: Asset = asset!("/assets/task_form.css");

/// Message for one field, if it has one.
#[component]
pub fn FieldError(errors: Signal<FieldErrors>, field: &'static str) -> Element {
    let message = errors.read().get(field).map(str::to_string);
    rsx! {
        if let Some(message) = message {
            p { class: "field-error", "{message}" }
        }
    }
}

/// Form shared by the add and edit pages.
///
/// Submits a validated [`NewTask`]; field errors stay on the form.
#[component]
pub fn TaskForm(
    initial: TaskDraft,
    submit_label: String,
    on_submit: EventHandler<NewTask>,
    on_cancel: EventHandler<()>,
) -> Element {
    let config = use_config();
    let mut draft = use_signal(|| initial.clone());
    let mut errors = use_signal(FieldErrors::new);
    let mut new_step = use_signal(String::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        match draft().into_new_task(&config.validation) {
            Ok(task) => {
                errors.set(FieldErrors::new());
                on_submit.call(task);
            }
            Err(e) => {
                tracing::debug!("Task form rejected: {}", e.summary());
                errors.set(e);
            }
        }
    };

    let mut push_step = move || {
        let text = new_step().trim().to_string();
        if !text.is_empty() {
            draft.write().add_step(text);
            new_step.set(String::new());
        }
    };

    let summary = (!errors.read().is_empty()).then(|| errors.read().summary());
    let steps = draft.read().steps.clone();

    rsx! {
        document::Stylesheet { href: TASK_FORM_CSS }

        form {
            class: "task-form",
            onsubmit: submit,

            if let Some(summary) = summary {
                div { class: "form-banner error", "{summary}" }
            }

            div {
                class: "form-field",
                label { r#for: "title", "Title" }
                input {
                    id: "title",
                    r#type: "text",
                    placeholder: "What needs to be done?",
                    value: "{draft.read().title}",
                    oninput: move |e| draft.write().title = e.value(),
                }
                FieldError { errors, field: "title" }
            }

            div {
                class: "form-field",
                label { r#for: "description", "Description" }
                textarea {
                    id: "description",
                    rows: "3",
                    placeholder: "Optional details",
                    value: "{draft.read().description}",
                    oninput: move |e| draft.write().description = e.value(),
                }
            }

            div {
                class: "form-field",
                label { r#for: "priority", "Priority" }
                select {
                    id: "priority",
                    value: "{draft.read().priority}",
                    onchange: move |e| draft.write().priority = e.value(),
                    option { value: "", "None" }
                    for priority in Priority::ALL {
                        option {
                            value: priority.as_str(),
                            selected: draft.read().priority == priority.as_str(),
                            "{priority.name()}"
                        }
                    }
                }
                FieldError { errors, field: "priority" }
            }

            div {
                class: "form-row",
                div {
                    class: "form-field",
                    label { r#for: "deadline-date", "Deadline" }
                    input {
                        id: "deadline-date",
                        r#type: "date",
                        value: "{draft.read().date}",
                        oninput: move |e| draft.write().date = e.value(),
                    }
                    FieldError { errors, field: "deadlineDate" }
                }
                div {
                    class: "form-field",
                    label { r#for: "deadline-hour", "Hour" }
                    select {
                        id: "deadline-hour",
                        onchange: move |e| draft.write().hour = e.value(),
                        option { value: "", selected: draft.read().hour.is_empty(), "--" }
                        for hour in hour_options() {
                            option {
                                selected: draft.read().hour == hour,
                                value: "{hour}",
                                "{hour}"
                            }
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { r#for: "deadline-minute", "Minute" }
                    select {
                        id: "deadline-minute",
                        onchange: move |e| draft.write().minute = e.value(),
                        option { value: "", selected: draft.read().minute.is_empty(), "--" }
                        for minute in minute_options() {
                            option {
                                selected: draft.read().minute == minute,
                                value: "{minute}",
                                "{minute}"
                            }
                        }
                    }
                }
            }

            div {
                class: "form-field",
                label { "Steps" }
                ul {
                    class: "step-editor",
                    for (index, step) in steps.into_iter().enumerate() {
                        li {
                            key: "{index}",
                            input {
                                r#type: "text",
                                value: "{step.text}",
                                oninput: move |e| {
                                    if let Some(step) = draft.write().steps.get_mut(index) {
                                        step.text = e.value();
                                    }
                                },
                            }
                            button {
                                r#type: "button",
                                class: "btn btn-ghost btn-icon",
                                aria_label: "Remove step",
                                onclick: move |_| draft.write().remove_step(index),
                                Icon { icon: FaXmark, width: 12, height: 12 }
                            }
                        }
                    }
                }
                div {
                    class: "step-add",
                    input {
                        r#type: "text",
                        placeholder: "Add a step",
                        value: "{new_step}",
                        oninput: move |e| new_step.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                e.prevent_default();
                                push_step();
                            }
                        },
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-outline",
                        onclick: move |_| push_step(),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        span { "Add" }
                    }
                }
            }

            div {
                class: "form-actions",
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button { r#type: "submit", class: "btn btn-primary", "{submit_label}" }
            }
        }
    }
}
