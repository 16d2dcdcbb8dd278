use dioxus::prelude::*;
use store::AppConfig;

use crate::make_substrate;

/// Get the configuration loaded at startup.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Loads `taskflow.toml` from the substrate once and provides it to children.
#[component]
pub fn ConfigProvider(children: Element) -> Element {
    use_context_provider(|| {
        let config = AppConfig::load(&make_substrate());
        tracing::debug!(?config, "Loaded configuration");
        config
    });

    rsx! {
        {children}
    }
}
