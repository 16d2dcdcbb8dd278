//! Login page view with email/password form.

use dioxus::prelude::*;
use store::{AuthError, FieldErrors, LoginForm};
use ui::{use_auth, FieldError};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut banner = use_signal(|| Option::<String>::None);
    let nav = use_navigator();

    // If already logged in, go to the dashboard
    if auth.read().session().is_authenticated() {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let form = LoginForm::new(email(), password());
        let result = auth.write().login(&form);
        match result {
            Ok(_) => {
                nav.push(Route::Dashboard {});
            }
            Err(e) => {
                errors.set(e.field_errors().cloned().unwrap_or_default());
                if !matches!(e, AuthError::Invalid(_)) {
                    password.set(String::new());
                }
                banner.set(Some(e.to_string()));
            }
        }
    };

    rsx! {
        div {
            class: "auth-page",
            form {
                class: "auth-card",
                onsubmit: handle_login,

                h1 { "Welcome back" }
                p { class: "auth-subtitle", "Sign in to manage your tasks." }

                if let Some(message) = banner() {
                    div { class: "form-banner error", "{message}" }
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

                button { r#type: "submit", class: "btn btn-primary", "Sign In" }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register" }
                }
            }
        }
    }
}
