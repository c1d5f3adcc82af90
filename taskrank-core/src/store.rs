//! TaskStore: the authoritative, insertion-ordered task collection.
//!
//! Only two mutations exist: append a new task, and flip `completed` to true.
//! Callers get shared references only, so a task's context can never change
//! after creation.

use crate::task::{NewTask, Task, TaskId};

/// Result of [`TaskStore::mark_completed`]. None of these are errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Completed,
    AlreadyCompleted,
    NotFound,
}

#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    // Next id to hand out; independent of tasks.len().
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Ids of completed tasks, in insertion order.
    pub fn completed_ids(&self) -> Vec<TaskId> {
        self.tasks
            .iter()
            .filter(|t| t.completed)
            .map(|t| t.id)
            .collect()
    }

    /// Append a task and return its freshly assigned id. Always succeeds.
    pub fn add_task(&mut self, new: NewTask) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::from_new(id, new));
        id
    }

    /// Set `completed = true` on the matching task. Unknown ids leave the store untouched.
    pub fn mark_completed(&mut self, id: TaskId) -> Completion {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Completion::NotFound;
        };
        if task.completed {
            return Completion::AlreadyCompleted;
        }
        task.completed = true;
        Completion::Completed
    }
}
