//! taskrank-core: task store and ranking engine for the taskrank to-do board

pub mod board;
pub mod intake;
pub mod ranking;
pub mod store;
pub mod task;
pub mod time;

pub use board::{Board, BoardOptions, Published};
pub use intake::{IntakeError, TaskForm, parse_minutes};
pub use ranking::{RankedEntry, RankedView, ScoreBreakdown, rank, score, score_breakdown};
pub use store::{Completion, TaskStore};
pub use task::{Mood, NewTask, Priority, Task, TaskContext, TaskId};
