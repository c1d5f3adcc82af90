//! Board — session-scoped owner of a [`TaskStore`].
//!
//! Every mutation re-ranks the whole collection and hands the fresh
//! [`RankedView`] back to the caller. There is no cached view to drift.

use tracing::{debug, info};

use crate::intake::{IntakeError, TaskForm};
use crate::ranking::RankedView;
use crate::store::{Completion, TaskStore};
use crate::task::{NewTask, Task, TaskId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOptions {
    /// Fill `previous_completed_tasks` from the store when adding via a form.
    pub capture_momentum: bool,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            capture_momentum: true,
        }
    }
}

/// What a mutation published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Published<T> {
    pub outcome: T,
    pub view: RankedView,
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    store: TaskStore,
    options: BoardOptions,
}

impl Board {
    pub fn new(options: BoardOptions) -> Self {
        Self {
            store: TaskStore::new(),
            options,
        }
    }

    pub fn options(&self) -> BoardOptions {
        self.options
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    /// Current ranked view, rebuilt from the store.
    pub fn view(&self) -> RankedView {
        RankedView::build(self.store.tasks())
    }

    pub fn add(&mut self, new: NewTask) -> Published<TaskId> {
        let id = self.store.add_task(new);
        info!(task_id = %id, total = self.store.len(), "task added");
        self.publish(id)
    }

    /// Validate a raw form, capture context, and add the task.
    pub fn add_form(&mut self, form: TaskForm) -> Result<Published<TaskId>, IntakeError> {
        let previous = if self.options.capture_momentum {
            self.store.completed_ids()
        } else {
            Vec::new()
        };
        let new = form.into_new_task(previous)?;
        Ok(self.add(new))
    }

    pub fn complete(&mut self, id: TaskId) -> Published<Completion> {
        let outcome = self.store.mark_completed(id);
        match outcome {
            Completion::Completed => info!(task_id = %id, "task completed"),
            Completion::AlreadyCompleted => debug!(task_id = %id, "task already completed"),
            Completion::NotFound => debug!(task_id = %id, "complete ignored: no such task"),
        }
        self.publish(outcome)
    }

    fn publish<T>(&self, outcome: T) -> Published<T> {
        let view = self.view();
        debug!(entries = view.len(), "ranked view published");
        Published { outcome, view }
    }
}
