//! Ranking engine: integer score per task and a descending-score view.
//!
//! Scoring:
//! - priority base: high +5, medium +3, low +1
//! - +3 if time_available >= description length * 2
//! - mood: productive +2, energetic +1, relaxed +0
//! - +1 if any tasks were already completed when this one was created
//!
//! Ordering: score DESC, then insertion order (stable sort).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::task::{Mood, Priority, Task, TaskId};

/// The four score terms, kept separate so a score can be explained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub priority: u32,
    pub time_fit: u32,
    pub mood: u32,
    pub momentum: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.priority + self.time_fit + self.mood + self.momentum
    }
}

pub fn priority_points(priority: Priority) -> u32 {
    match priority {
        Priority::High => 5,
        Priority::Medium => 3,
        Priority::Low => 1,
    }
}

pub fn mood_points(mood: Mood) -> u32 {
    match mood {
        Mood::Productive => 2,
        Mood::Energetic => 1,
        Mood::Relaxed => 0,
    }
}

/// Description length stands in for task size: two minutes per character.
pub fn time_fit_points(time_available: i64, description_len: usize) -> u32 {
    let needed = i64::try_from(description_len)
        .unwrap_or(i64::MAX)
        .saturating_mul(2);
    if time_available >= needed { 3 } else { 0 }
}

pub fn score_breakdown(task: &Task) -> ScoreBreakdown {
    let ctx = &task.context;
    ScoreBreakdown {
        priority: priority_points(task.priority),
        time_fit: time_fit_points(ctx.time_available, task.description_len()),
        mood: mood_points(ctx.mood),
        momentum: u32::from(!ctx.previous_completed_tasks.is_empty()),
    }
}

pub fn score(task: &Task) -> u32 {
    score_breakdown(task).total()
}

/// Tasks sorted by descending score; ties keep their input order.
pub fn rank(tasks: &[Task]) -> Vec<&Task> {
    let mut keyed: Vec<(u32, &Task)> = tasks.iter().map(|t| (score(t), t)).collect();
    // sort_by_key is stable, which gives the insertion-order tie-break.
    keyed.sort_by_key(|(s, _)| Reverse(*s));
    keyed.into_iter().map(|(_, t)| t).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// 1-based display position.
    pub position: usize,
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: NaiveDate,
    pub completed: bool,
    pub score: u32,
    pub breakdown: ScoreBreakdown,
}

/// Display-ordered projection of a task collection.
///
/// Always rebuilt from the store; never kept around as state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RankedView {
    pub entries: Vec<RankedEntry>,
}

impl RankedView {
    pub fn build(tasks: &[Task]) -> Self {
        let entries = rank(tasks)
            .into_iter()
            .enumerate()
            .map(|(i, t)| {
                let breakdown = score_breakdown(t);
                RankedEntry {
                    position: i + 1,
                    id: t.id,
                    title: t.title.clone(),
                    description: t.description.clone(),
                    priority: t.priority,
                    due_date: t.due_date,
                    completed: t.completed,
                    score: breakdown.total(),
                    breakdown,
                }
            })
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> Vec<TaskId> {
        self.entries.iter().map(|e| e.id).collect()
    }

    pub fn open(&self) -> impl Iterator<Item = &RankedEntry> {
        self.entries.iter().filter(|e| !e.completed)
    }

    pub fn completed(&self) -> impl Iterator<Item = &RankedEntry> {
        self.entries.iter().filter(|e| e.completed)
    }
}
