use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Number of task slots available per day
pub const MAX_TASKS: usize = 3;

/// Opaque task identifier
///
/// New tasks get a UUID v4 string. Identifiers read back from storage are
/// kept verbatim, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single intention for the day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub done: bool,
}

impl Task {
    pub fn new(text: String) -> Self {
        Self {
            id: TaskId::generate(),
            text,
            done: false,
        }
    }

    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}

/// Ordered list of today's tasks, never longer than [`MAX_TASKS`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList(Vec<Task>);

impl TaskList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a list from loaded tasks, refusing anything over capacity
    pub fn from_tasks(tasks: Vec<Task>) -> Option<Self> {
        if tasks.len() > MAX_TASKS {
            return None;
        }
        Some(Self(tasks))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.0.len() >= MAX_TASKS
    }

    /// True when at least one task exists and every task is done
    pub fn all_done(&self) -> bool {
        !self.is_empty() && self.0.iter().all(|t| t.done)
    }

    /// True when every slot is filled and completed
    pub fn is_complete(&self) -> bool {
        self.is_full() && self.all_done()
    }

    pub fn done_count(&self) -> usize {
        self.0.iter().filter(|t| t.done).count()
    }

    /// Append a task with the given text.
    ///
    /// The text is trimmed first. Returns `None` when the trimmed text is
    /// empty or when all slots are taken.
    pub fn push(&mut self, text: &str) -> Option<&Task> {
        let text = text.trim();
        if text.is_empty() || self.is_full() {
            return None;
        }
        self.0.push(Task::new(text.to_string()));
        self.0.last()
    }

    /// Flip the done flag of the task with `id`, returning its new value
    pub fn toggle(&mut self, id: &TaskId) -> Option<bool> {
        let task = self.0.iter_mut().find(|t| &t.id == id)?;
        task.toggle();
        Some(task.done)
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.0.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.0.iter()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
