//! Add-task boundary: raw form text in, validated [`NewTask`] out.
//!
//! Anything the ranking engine cannot compare (non-numeric minutes, unknown
//! enum values, bad dates) is rejected here.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::{Mood, NewTask, Priority, TaskContext, TaskId};
use crate::time::parse_due_date;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntakeError {
    #[error("title cannot be empty")]
    EmptyTitle,
    #[error("unknown priority '{0}' (expected high, medium or low)")]
    UnknownPriority(String),
    #[error("unknown mood '{0}' (expected productive, energetic or relaxed)")]
    UnknownMood(String),
    #[error("invalid due date '{0}' (expected YYYY-MM-DD)")]
    InvalidDueDate(String),
    #[error("time available must be a whole number of minutes, got '{0}'")]
    InvalidTimeAvailable(String),
}

impl FromStr for Priority {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" | "alta" => Ok(Priority::High),
            "medium" | "media" => Ok(Priority::Medium),
            "low" | "baja" => Ok(Priority::Low),
            _ => Err(IntakeError::UnknownPriority(s.trim().to_string())),
        }
    }
}

impl FromStr for Mood {
    type Err = IntakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "productive" | "productivo" => Ok(Mood::Productive),
            "energetic" | "energético" | "energetico" => Ok(Mood::Energetic),
            "relaxed" | "relajado" => Ok(Mood::Relaxed),
            _ => Err(IntakeError::UnknownMood(s.trim().to_string())),
        }
    }
}

/// Parse minutes. Negative values are allowed; they just never fit.
pub fn parse_minutes(s: &str) -> Result<i64, IntakeError> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| IntakeError::InvalidTimeAvailable(s.trim().to_string()))
}

/// The add-task form exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: String,
    pub time_available: String,
    pub mood: String,
}

impl TaskForm {
    /// Validate every field; the first failure wins, in form order.
    pub fn into_new_task(self, previous_completed: Vec<TaskId>) -> Result<NewTask, IntakeError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(IntakeError::EmptyTitle);
        }
        let priority: Priority = self.priority.parse()?;
        let due_date = parse_due_date(&self.due_date)
            .map_err(|_| IntakeError::InvalidDueDate(self.due_date.trim().to_string()))?;
        let time_available = parse_minutes(&self.time_available)?;
        let mood: Mood = self.mood.parse()?;

        Ok(NewTask {
            title: title.to_string(),
            description: self.description,
            priority,
            due_date,
            context: TaskContext {
                time_available,
                mood,
                previous_completed_tasks: previous_completed,
            },
        })
    }
}
