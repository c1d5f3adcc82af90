//! Task model for the in-memory to-do board.
//!
//! Tasks are plain serializable values. The store owns them and is the only
//! place that assigns ids or flips `completed`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable task identifier, assigned by the store at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Productive,
    Energetic,
    Relaxed,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Productive => "productive",
            Mood::Energetic => "energetic",
            Mood::Relaxed => "relaxed",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Situational snapshot taken when the task is created. Never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskContext {
    /// Minutes the user reported having.
    pub time_available: i64,
    pub mood: Mood,
    /// Tasks already completed when this one was added.
    pub previous_completed_tasks: Vec<TaskId>,
}

/// Creation payload. The store turns this into a [`Task`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub context: TaskContext,
}

impl NewTask {
    pub fn new(title: impl Into<String>, priority: Priority, due_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority,
            due_date,
            context: TaskContext {
                time_available: 0,
                mood: Mood::Relaxed,
                previous_completed_tasks: Vec::new(),
            },
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_time_available(mut self, minutes: i64) -> Self {
        self.context.time_available = minutes;
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.context.mood = mood;
        self
    }

    pub fn with_previous_completed(mut self, ids: Vec<TaskId>) -> Self {
        self.context.previous_completed_tasks = ids;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Display only; never a scoring input.
    pub due_date: NaiveDate,
    pub completed: bool,
    pub context: TaskContext,
}

impl Task {
    pub(crate) fn from_new(id: TaskId, new: NewTask) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            priority: new.priority,
            due_date: new.due_date,
            completed: false,
            context: new.context,
        }
    }

    /// Description length in characters (Unicode scalar values).
    pub fn description_len(&self) -> usize {
        self.description.chars().count()
    }
}
