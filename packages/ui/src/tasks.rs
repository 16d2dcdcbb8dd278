use dioxus::prelude::*;
use store::TaskStore;

use crate::{make_substrate, AppSubstrate};

/// The task store shared through context.
pub type TaskSignal = Signal<TaskStore<AppSubstrate>>;

/// Consume the `Signal<TaskStore>` from context.
///
/// Views read through [`TaskStore::visible`] with the current session, so
/// they only ever see the signed-in user's tasks.
pub fn use_tasks() -> TaskSignal {
    use_context::<TaskSignal>()
}

/// Rehydrates the task collection once and provides it to children.
#[component]
pub fn TaskProvider(children: Element) -> Element {
    let tasks = use_signal(|| TaskStore::open(make_substrate()));

    use_context_provider(|| tasks);

    rsx! {
        {children}
    }
}
