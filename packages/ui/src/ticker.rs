use std::time::Duration;

use chrono::NaiveDateTime;
use dioxus::prelude::*;
use store::deadline::{next_refresh, now_local};

/// Suspend the current task for `duration`.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Bumps `tick` whenever the classification of `deadline` may have changed:
/// every `live_tick` inside the last hour, at hour and day boundaries before
/// that. Stops once the deadline has passed.
///
/// The loop belongs to this component's scope, so it stops as soon as the
/// parent stops rendering it.
#[component]
pub fn LiveTicker(
    deadline: ReadOnlySignal<NaiveDateTime>,
    tick: Signal<u64>,
    live_tick: Duration,
) -> Element {
    use_future(move || async move {
        let mut tick = tick;
        while let Some(wait) = next_refresh(*deadline.peek(), now_local(), live_tick) {
            sleep(wait).await;
            tick += 1;
        }
    });

    rsx! {}
}
