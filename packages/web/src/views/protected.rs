use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// Layout for pages that need a signed-in user. Anyone else is sent to the
/// login page.
#[component]
pub fn Protected() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if !session.is_authenticated() {
        tracing::debug!("Redirecting anonymous visitor to login");
        nav.replace(Route::Login {});
        return rsx! {};
    }

    rsx! {
        Outlet::<Route> {}
    }
}
