//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::{AuthStore, Session};

use crate::{make_substrate, use_config, AppSubstrate, Icon};
use crate::icons::FaRightFromBracket;

/// The auth store shared through context.
pub type AuthSignal = Signal<AuthStore<AppSubstrate>>;

/// Get the auth store.
/// Components that read the session re-render when the user logs in or out.
pub fn use_auth() -> AuthSignal {
    use_context::<AuthSignal>()
}

/// Snapshot of the current session.
pub fn use_session() -> Session {
    use_auth().read().session().clone()
}

/// Provider component that restores the persisted session.
/// Must be placed inside [`crate::ConfigProvider`].
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let config = use_config();
    let auth = use_signal(move || {
        AuthStore::open(make_substrate()).with_validation(config.validation.clone())
    });

    use_context_provider(|| auth);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    #[props(default)] on_logout: EventHandler<()>,
) -> Element {
    let mut auth = use_auth();

    let onclick = move |_| {
        auth.write().logout();
        on_logout.call(());
    };

    rsx! {
        button {
            class: "btn btn-outline btn-danger {class}",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}
