//! # Task store: the authoritative task collection
//!
//! [`TaskStore`] keeps every user's tasks in one ordered collection and writes
//! the whole collection to the substrate after each change, under
//! [`keys::TASKS`]. On construction it reads the collection back; a missing or
//! unparseable entry starts it empty.
//!
//! ## Transitions
//!
//! Changes go through the pure [`reduce`] function over a closed set of
//! [`TaskAction`]s, followed by a separate persist step:
//!
//! | Action | Effect |
//! |--------|--------|
//! | `Add(task)` | Append. |
//! | `Edit(task)` | Replace the record with the same id, keeping its owner. |
//! | `Delete(id)` | Remove the record with that id. |
//! | `Toggle(id)` | Flip `completed`. |
//!
//! Edit, delete and toggle on an id that is not in the collection leave it
//! unchanged and report nothing.
//!
//! ## Read model
//!
//! Callers only ever see the tasks owned by the current [`Session`]:
//! [`visible`](TaskStore::visible), [`get`](TaskStore::get) and
//! [`stats`](TaskStore::stats) filter on `owner_email`, preserving insertion
//! order. Without a session the read model is empty.

use crate::auth::Session;
use crate::models::{NewTask, Task};
use crate::substrate::{keys, Substrate};

/// Closed set of task collection transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TaskAction {
    Add(Task),
    Edit(Task),
    Delete(String),
    Toggle(String),
}

/// Apply one action to the collection.
pub fn reduce(mut tasks: Vec<Task>, action: TaskAction) -> Vec<Task> {
    match action {
        TaskAction::Add(task) => tasks.push(task),
        TaskAction::Edit(mut task) => {
            if let Some(existing) = tasks.iter_mut().find(|t| t.id == task.id) {
                task.owner_email = std::mem::take(&mut existing.owner_email);
                *existing = task;
            }
        }
        TaskAction::Delete(id) => tasks.retain(|t| t.id != id),
        TaskAction::Toggle(id) => {
            if let Some(task) = tasks.iter_mut().find(|t| t.id == id) {
                task.completed = !task.completed;
            }
        }
    }
    tasks
}

/// Dashboard counters for one user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub pending: usize,
    pub completed: usize,
    pub total: usize,
}

/// Task collection persisted to a [`Substrate`].
pub struct TaskStore<S: Substrate> {
    substrate: S,
    tasks: Vec<Task>,
}

impl<S: Substrate> TaskStore<S> {
    /// Rehydrate from the substrate.
    pub fn open(substrate: S) -> Self {
        let tasks = load_tasks(&substrate);
        tracing::debug!("Loaded {} tasks", tasks.len());
        Self { substrate, tasks }
    }

    /// Create a task owned by the session's user and return its id.
    ///
    /// Returns `None` and changes nothing when nobody is signed in.
    pub fn add(&mut self, session: &Session, new: NewTask) -> Option<String> {
        let Some(owner) = session.email() else {
            tracing::debug!("Ignoring add without a session");
            return None;
        };
        let id = uuid::Uuid::new_v4().to_string();
        let task = new.into_task(id.clone(), owner.to_string());
        self.dispatch(TaskAction::Add(task));
        Some(id)
    }

    /// Replace the stored task with the same id.
    pub fn edit(&mut self, task: Task) {
        self.dispatch(TaskAction::Edit(task));
    }

    pub fn delete(&mut self, id: &str) {
        self.dispatch(TaskAction::Delete(id.to_string()));
    }

    pub fn toggle_completed(&mut self, id: &str) {
        self.dispatch(TaskAction::Toggle(id.to_string()));
    }

    /// Mark as completed; no-op if already completed or unknown.
    pub fn mark_complete(&mut self, id: &str) {
        if self.find(id).is_some_and(|t| !t.completed) {
            self.toggle_completed(id);
        }
    }

    /// Mark as open; no-op if already open or unknown.
    pub fn mark_incomplete(&mut self, id: &str) {
        if self.find(id).is_some_and(|t| t.completed) {
            self.toggle_completed(id);
        }
    }

    /// Tasks owned by the session's user, in insertion order.
    pub fn visible(&self, session: &Session) -> Vec<&Task> {
        let Some(owner) = session.email() else {
            return Vec::new();
        };
        self.tasks.iter().filter(|t| t.owner_email == owner).collect()
    }

    /// A single task, if it exists and belongs to the session's user.
    pub fn get(&self, session: &Session, id: &str) -> Option<&Task> {
        let owner = session.email()?;
        self.find(id).filter(|t| t.owner_email == owner)
    }

    pub fn stats(&self, session: &Session) -> TaskStats {
        let visible = self.visible(session);
        let completed = visible.iter().filter(|t| t.completed).count();
        TaskStats {
            pending: visible.len() - completed,
            completed,
            total: visible.len(),
        }
    }

    /// The whole collection, all owners included.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn dispatch(&mut self, action: TaskAction) {
        tracing::debug!(?action, "Task transition");
        let tasks = std::mem::take(&mut self.tasks);
        self.tasks = reduce(tasks, action);
        self.persist();
    }

    fn persist(&self) {
        match serde_json::to_string(&self.tasks) {
            Ok(json) => self.substrate.set(keys::TASKS, &json),
            Err(e) => tracing::warn!("Failed to serialize tasks: {e}"),
        }
    }
}

fn load_tasks(substrate: &impl Substrate) -> Vec<Task> {
    let Some(raw) = substrate.get(keys::TASKS) else {
        return Vec::new();
    };
    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::warn!("Discarding unreadable task collection: {e}");
        Vec::new()
    })
}
