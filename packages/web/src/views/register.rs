//! Registration page view with name/email/password form.

use dioxus::prelude::*;
use store::{FieldErrors, RegisterForm};
use ui::{use_auth, FieldError};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut banner = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    if auth.read().session().is_authenticated() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let form = RegisterForm::new(name(), email(), password(), confirm_password());
        let result = auth.write().register(&form);
        match result {
            Ok(_) => {
                nav.push(Route::Dashboard {});
            }
            Err(e) => {
                errors.set(e.field_errors().cloned().unwrap_or_default());
                banner.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: handle_register,

                h1 { "Create an account" }
                p { class: "auth-subtitle", "Start organizing your work in minutes." }

                if let Some(message) = banner() {
                    div { class: "form-banner error", "{message}" }
                }

                div {
                    class: "form-field",
                    label { r#for: "name", "Name" }
                    input {
                        id: "name",
                        r#type: "text",
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                    }
                    FieldError { errors, field: "name" }
                }

                div {
                    class: "form-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    FieldError { errors, field: "email" }
                }

                div {
                    class: "form-field",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                    FieldError { errors, field: "password" }
                }

                div {
                    class: "form-field",
                    label { r#for: "confirm-password", "Confirm password" }
                    input {
                        id: "confirm-password",
                        r#type: "password",
                        value: "{confirm_password}",
                        oninput: move |e| confirm_password.set(e.value()),
                    }
                    FieldError { errors, field: "confirmPassword" }
                }

                button { r#type: "submit", class: "btn btn-primary", "Create Account" }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
