pub mod auth;
pub mod config;
pub mod deadline;
pub mod error;
pub mod forms;
pub mod models;
pub mod progress;
pub mod substrate;
pub mod tasks;
pub mod theme;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use auth::{AuthAction, AuthStore, Session};
pub use config::AppConfig;
pub use deadline::{classify, BadgeColor, DeadlineStatus, Urgency};
pub use error::{AuthError, ConfigError};
pub use forms::{FieldErrors, LoginForm, RegisterForm, TaskDraft};
pub use models::{Credential, NewTask, Priority, Step, Task, UserInfo};
pub use progress::{step_progress, StepProgress};
pub use substrate::Substrate;
pub use tasks::{TaskAction, TaskStats, TaskStore};
pub use theme::Theme;
