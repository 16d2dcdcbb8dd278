//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod substrate;
pub use substrate::{make_substrate, AppSubstrate};

pub const UI_CSS: Asset = asset!("/assets/ui.css");

mod config;
pub use config::{use_config, ConfigProvider};

mod auth;
pub use auth::{use_auth, use_session, AuthProvider, AuthSignal, LogoutButton};

mod tasks;
pub use tasks::{use_tasks, TaskProvider, TaskSignal};

mod theme;
pub use theme::{use_theme, ThemeProvider, ThemeSignal, ThemeToggle};

mod ticker;
pub use ticker::{sleep, LiveTicker};

mod task_card;
pub use task_card::{DeadlineBadge, TaskCard, TaskList};

mod task_form;
pub use task_form::{FieldError, TaskForm};

mod sidebar;
pub use sidebar::Sidebar;
