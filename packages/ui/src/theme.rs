use dioxus::prelude::*;
use store::Theme;

use crate::make_substrate;
use crate::Icon;
use crate::icons::{FaMoon, FaSun};

/// Reactive theme preference.
pub type ThemeSignal = Signal<Theme>;

pub fn use_theme() -> ThemeSignal {
    use_context::<ThemeSignal>()
}

/// Wraps the app in a container carrying the theme class and persists the
/// preference whenever it changes.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let theme = use_signal(|| Theme::load(&make_substrate()));

    use_effect(move || {
        theme().save(&make_substrate());
    });

    use_context_provider(|| theme);

    rsx! {
        div {
            class: "app {theme().as_str()}",
            {children}
        }
    }
}

/// Round button switching between dark and light.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();

    rsx! {
        button {
            class: "btn btn-ghost btn-icon",
            aria_label: "Toggle theme",
            onclick: move |_| {
                let next = theme().toggled();
                theme.set(next);
            },
            if theme() == Theme::Dark {
                Icon { icon: FaSun, width: 16, height: 16 }
            } else {
                Icon { icon: FaMoon, width: 16, height: 16 }
            }
        }
    }
}
