//! # Domain models for tasks and users
//!
//! These types are what the stores keep in memory and what they serialise
//! into the substrate. Field names are camelCase on the wire (`ownerEmail`)
//! so data written by earlier versions of the app stays readable.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Task`] | A stored task record, owned by exactly one user via `owner_email`. |
//! | [`NewTask`] | The partial record handed to [`crate::TaskStore::add`]; the store assigns `id`, `completed` and `owner_email`. |
//! | [`Step`] | One checklist item of a task. |
//! | [`Priority`] | `low` / `medium` / `high`. |
//! | [`UserInfo`] | The session identity (`name`, `email`). |
//! | [`Credential`] | A registered account. The password is kept verbatim. |
//!
//! Empty strings for `priority` and `deadline` (which older form submissions
//! produced) deserialise as absent.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::deadline::{self, DeadlineStatus};
use crate::progress::{step_progress, StepProgress};

/// Task priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Parse the wire / form value. Unknown and empty values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Capitalised name: "High".
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Badge text: "High Priority".
    pub fn label(&self) -> String {
        format!("{} Priority", self.name())
    }

    pub fn color(&self) -> deadline::BadgeColor {
        match self {
            Self::High => deadline::BadgeColor::Red,
            Self::Medium => deadline::BadgeColor::Yellow,
            Self::Low => deadline::BadgeColor::Blue,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One checklist item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Step {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
        }
    }
}

/// A stored task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "priority_or_none"
    )]
    pub priority: Option<Priority>,
    /// Local date-time as entered: "2026-03-05T14:30".
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty"
    )]
    pub deadline: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub owner_email: String,
}

impl Task {
    /// Parsed deadline; malformed values count as no deadline.
    pub fn deadline_at(&self) -> Option<NaiveDateTime> {
        self.deadline.as_deref().and_then(deadline::parse_deadline)
    }

    /// Urgency of this task's deadline relative to `now`.
    pub fn deadline_status(&self, now: NaiveDateTime) -> Option<DeadlineStatus> {
        deadline::classify(self.deadline.as_deref(), now)
    }

    pub fn progress(&self) -> StepProgress {
        step_progress(&self.steps)
    }

    /// A copy with step `index` flipped. Out-of-range indexes return an
    /// unchanged copy.
    pub fn with_step_toggled(&self, index: usize) -> Task {
        let mut task = self.clone();
        if let Some(step) = task.steps.get_mut(index) {
            step.completed = !step.completed;
        }
        task
    }

    /// This task with its editable fields replaced by `fields`. Id, owner and
    /// completion state carry over.
    pub fn revised(&self, fields: NewTask) -> Task {
        let mut task = fields.into_task(self.id.clone(), self.owner_email.clone());
        task.completed = self.completed;
        task
    }
}

/// Fields supplied by the caller when creating a task.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub deadline: Option<String>,
    pub steps: Vec<Step>,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_steps<I, T>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.steps = steps.into_iter().map(Step::new).collect();
        self
    }

    pub(crate) fn into_task(self, id: String, owner_email: String) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            deadline: self.deadline.filter(|d| !d.is_empty()),
            completed: false,
            steps: self.steps,
            owner_email,
        }
    }
}

/// Identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub name: String,
    pub email: String,
}

impl UserInfo {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// A registered account as kept in the `registeredUsers` collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    #[serde(default)]
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Credential {
    pub fn to_info(&self) -> UserInfo {
        UserInfo::new(self.name.clone(), self.email.clone())
    }
}

fn priority_or_none<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Priority>, D::Error> {
    let raw = Option::<String>::deserialize(d)?;
    Ok(raw.as_deref().and_then(Priority::parse))
}

fn non_empty<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(d)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reads_legacy_task_json() {
        // Shape written before steps and owners existed
        let raw = r#"{"title":"Old","description":"","priority":"","deadline":"","id":"1700000000000","completed":true}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.id, "1700000000000");
        assert_eq!(task.priority, None);
        assert_eq!(task.deadline, None);
        assert_eq!(task.description.as_deref(), Some(""));
        assert!(task.completed);
        assert!(task.steps.is_empty());
        assert_eq!(task.owner_email, "");
    }

    #[test]
    fn test_task_wire_names() {
        let task = NewTask::titled("X")
            .with_priority(Priority::High)
            .with_deadline("2026-01-02T03:04")
            .with_steps(["a"])
            .into_task("id-1".into(), "a@x.com".into());
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["ownerEmail"], "a@x.com");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["steps"][0]["text"], "a");
        assert_eq!(json["steps"][0]["completed"], false);
        assert!(json.get("description").is_none());
    }

    #[test]
    fn test_revised_keeps_identity() {
        let mut task = NewTask::titled("Old")
            .with_steps(["a"])
            .into_task("id-1".into(), "a@x.com".into());
        task.completed = true;

        let revised = task.revised(NewTask::titled("New").with_priority(Priority::Low));
        assert_eq!(revised.id, "id-1");
        assert_eq!(revised.owner_email, "a@x.com");
        assert!(revised.completed);
        assert_eq!(revised.title, "New");
        assert_eq!(revised.priority, Some(Priority::Low));
        assert!(revised.steps.is_empty());
    }

    #[test]
    fn test_unknown_priority_is_none() {
        let raw = r#"{"id":"1","title":"T","priority":"urgent"}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.priority, None);
    }

    #[test]
    fn test_with_step_toggled() {
        let task = NewTask::titled("T")
            .with_steps(["one", "two"])
            .into_task("1".into(), "a@x.com".into());

        let toggled = task.with_step_toggled(1);
        assert!(!toggled.steps[0].completed);
        assert!(toggled.steps[1].completed);
        // Original untouched
        assert!(!task.steps[1].completed);

        assert_eq!(task.with_step_toggled(9), task);
    }

    #[test]
    fn test_malformed_deadline_is_absent() {
        let task = NewTask::titled("T")
            .with_deadline("next tuesday")
            .into_task("1".into(), "a@x.com".into());
        assert!(task.deadline_at().is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        assert_eq!(UserInfo::new("", "a@x.com").display_name(), "a@x.com");
        assert_eq!(UserInfo::new("Ana", "a@x.com").display_name(), "Ana");
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::Medium.label(), "Medium Priority");
        assert_eq!(Priority::parse("low"), Some(Priority::Low));
        assert_eq!(Priority::parse(""), None);
        assert_eq!(Priority::High.to_string(), "high");
    }
}
