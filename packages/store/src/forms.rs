//! # Form input and validation
//!
//! Validation happens before anything reaches a store. Each form type
//! checks its fields against [`ValidationConfig`] and reports failures as
//! [`FieldErrors`], keyed by the form field name so the view can show the
//! message under the right input.
//!
//! | Form | Fields | Produces |
//! |------|--------|----------|
//! | [`LoginForm`] | `email`, `password` | checked by [`crate::AuthStore::login`] |
//! | [`RegisterForm`] | `name`, `email`, `password`, `confirmPassword` | checked by [`crate::AuthStore::register`] |
//! | [`TaskDraft`] | `title`, `description`, `priority`, `deadlineDate`, `deadlineHour`, `deadlineMinute`, steps | a [`NewTask`] via [`TaskDraft::into_new_task`] |
//!
//! ## Deadline composition
//!
//! The task form splits a deadline into a date, an hour (`00`–`23`) and a
//! minute in 5-minute steps. [`TaskDraft::into_new_task`] joins them into the
//! stored `YYYY-MM-DDTHH:MM` form; an unset hour or minute becomes `23` / `59`
//! (end of day) and an empty date means no deadline.

use chrono::{NaiveDate, Timelike};

use crate::config::ValidationConfig;
use crate::deadline::parse_deadline;
use crate::models::{NewTask, Priority, Step, Task};

/// Field name → message, in the order the fields were checked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message per field wins.
    pub fn insert(&mut self, field: &str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.entries.push((field.to_string(), message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, m)| (f.as_str(), m.as_str()))
    }

    /// General banner text: "Please fix 2 errors before submitting."
    pub fn summary(&self) -> String {
        let n = self.len();
        let plural = if n > 1 { "s" } else { "" };
        format!("Please fix {n} error{plural} before submitting.")
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Loose structural email check: one `@`, non-empty local part, dotted
/// domain with a TLD of at least two letters, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || local.starts_with('.') || local.ends_with('.')
    {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    let labels_ok = labels.iter().all(|l| {
        !l.is_empty()
            && !l.starts_with('-')
            && !l.ends_with('-')
            && l.chars().all(|c| c.is_alphanumeric() || c == '-')
    });
    let tld_ok = labels
        .last()
        .is_some_and(|tld| tld.chars().count() >= 2 && tld.chars().all(char::is_alphabetic));
    labels_ok && tld_ok
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if !is_valid_email(email) {
        errors.insert("email", "Invalid email address");
    }
}

fn check_password(errors: &mut FieldErrors, field: &str, label: &str, password: &str, min: usize) {
    if password.chars().count() < min {
        errors.insert(field, format!("{label} must be at least {min} characters"));
    }
}

/// Sign-in form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self, config: &ValidationConfig) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        check_email(&mut errors, self.email.trim());
        check_password(
            &mut errors,
            "password",
            "Password",
            &self.password,
            config.min_password_len,
        );
        errors.into_result()
    }
}

/// Account creation form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    pub fn validate(&self, config: &ValidationConfig) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required");
        }
        check_email(&mut errors, self.email.trim());
        check_password(
            &mut errors,
            "password",
            "Password",
            &self.password,
            config.min_password_len,
        );
        check_password(
            &mut errors,
            "confirmPassword",
            "Confirm password",
            &self.confirm_password,
            config.min_password_len,
        );
        if self.password != self.confirm_password {
            errors.insert("confirmPassword", "Passwords don't match");
        }
        errors.into_result()
    }
}

/// Editable state of the task form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    /// `""`, `"low"`, `"medium"` or `"high"`.
    pub priority: String,
    /// `YYYY-MM-DD`, or empty for no deadline.
    pub date: String,
    /// `00`–`23`, or empty.
    pub hour: String,
    /// `00`–`55` in steps of five, or empty.
    pub minute: String,
    pub steps: Vec<Step>,
}

impl TaskDraft {
    /// Blank form; the date defaults to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Default::default()
        }
    }

    /// Pre-filled form for editing `task`. Minutes are rounded to the nearest
    /// five; a task without a usable deadline gets `today` and no time.
    pub fn from_task(task: &Task, today: NaiveDate) -> Self {
        let mut draft = Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            priority: task.priority.map(|p| p.as_str().to_string()).unwrap_or_default(),
            steps: task.steps.clone(),
            ..Self::new(today)
        };
        if let Some(at) = task.deadline_at() {
            let minute = (((at.minute() + 2) / 5) * 5).min(55);
            draft.date = at.format("%Y-%m-%d").to_string();
            draft.hour = format!("{:02}", at.hour());
            draft.minute = format!("{minute:02}");
        }
        draft
    }

    /// Validate and convert into the record handed to the task store.
    pub fn into_new_task(self, config: &ValidationConfig) -> Result<NewTask, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = self.title.trim().to_string();
        if title.chars().count() < config.min_title_len {
            errors.insert(
                "title",
                format!(
                    "Title must be at least {} characters.",
                    config.min_title_len
                ),
            );
        }

        let priority = match self.priority.as_str() {
            "" => None,
            other => match Priority::parse(other) {
                Some(p) => Some(p),
                None => {
                    errors.insert("priority", "Invalid priority");
                    None
                }
            },
        };

        let deadline = self.deadline();
        if deadline.as_deref().is_some_and(|d| parse_deadline(d).is_none()) {
            errors.insert("deadlineDate", "Invalid date");
        }

        errors.into_result()?;

        let description = Some(self.description.trim().to_string()).filter(|d| !d.is_empty());
        let steps = self
            .steps
            .into_iter()
            .filter_map(|s| {
                let text = s.text.trim().to_string();
                (!text.is_empty()).then_some(Step {
                    text,
                    completed: s.completed,
                })
            })
            .collect();

        Ok(NewTask {
            title,
            description,
            priority,
            deadline,
            steps,
        })
    }

    /// Combined deadline string, if a date is set.
    pub fn deadline(&self) -> Option<String> {
        let date = self.date.trim();
        if date.is_empty() {
            return None;
        }
        let hour = if self.hour.is_empty() { "23" } else { &self.hour };
        let minute = if self.minute.is_empty() {
            "59"
        } else {
            &self.minute
        };
        Some(format!("{date}T{hour}:{minute}"))
    }

    pub fn add_step(&mut self, text: impl Into<String>) {
        self.steps.push(Step::new(text));
    }

    pub fn remove_step(&mut self, index: usize) {
        if index < self.steps.len() {
            self.steps.remove(index);
        }
    }
}

/// `00` through `23`.
pub fn hour_options() -> Vec<String> {
    (0..24).map(|h| format!("{h:02}")).collect()
}

/// `00` through `55` in steps of five.
pub fn minute_options() -> Vec<String> {
    (0..12).map(|i| format!("{:02}", i * 5)).collect()
}
