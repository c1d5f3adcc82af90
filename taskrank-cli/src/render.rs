//! Display boundary: ranked view to text or JSON.

use anyhow::Result;
use chrono::NaiveDate;
use std::fmt::Write as _;
use taskrank_core::time::relative_label;
use taskrank_core::{RankedView, ScoreBreakdown, Task};

#[derive(Debug, Clone)]
pub struct Renderer {
    pub today: NaiveDate,
    pub show_completed: bool,
    pub limit: usize,
    pub json: bool,
}

impl Renderer {
    pub fn render(&self, view: &RankedView) -> Result<String> {
        if self.json {
            return Ok(serde_json::to_string_pretty(view)?);
        }
        Ok(self.render_table(view))
    }

    fn render_table(&self, view: &RankedView) -> String {
        if view.is_empty() {
            return "No tasks yet. Type `add` to create one.\n".to_string();
        }

        let mut s = String::new();
        let _ = writeln!(s, "{:>3}  {:>4}  {:>5}  {:<6}  {:<3}  {}", "#", "id", "score", "prio", "", "title");

        let mut shown = 0;
        for e in &view.entries {
            if e.completed && !self.show_completed {
                continue;
            }
            if shown == self.limit {
                break;
            }
            shown += 1;
            let mark = if e.completed { "[x]" } else { "[ ]" };
            let _ = writeln!(
                s,
                "{:>3}  {:>4}  {:>5}  {:<6}  {}  {} (due {}, {})",
                e.position,
                e.id,
                e.score,
                e.priority,
                mark,
                e.title,
                e.due_date,
                relative_label(e.due_date, self.today)
            );
        }

        let open = view.open().count();
        let done = view.len() - open;
        let _ = writeln!(s, "{open} open, {done} completed");
        s
    }
}

/// Multi-line explanation of where a score comes from.
pub fn explain(task: &Task, b: &ScoreBreakdown) -> String {
    let ctx = &task.context;
    let needed = task.description_len() * 2;
    let mut s = String::new();
    let _ = writeln!(s, "Task {}: {}", task.id, task.title);
    let _ = writeln!(s, "  priority {:<10} +{}", task.priority.as_str(), b.priority);
    let _ = writeln!(
        s,
        "  time fit {:<10} +{}",
        format!("{}/{}m", ctx.time_available, needed),
        b.time_fit
    );
    let _ = writeln!(s, "  mood     {:<10} +{}", ctx.mood.as_str(), b.mood);
    let _ = writeln!(
        s,
        "  momentum {:<10} +{}",
        format!("{} done", ctx.previous_completed_tasks.len()),
        b.momentum
    );
    let _ = writeln!(s, "  total               {}", b.total());
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskrank_core::{Board, Mood, NewTask, Priority, score_breakdown};

    fn renderer() -> Renderer {
        Renderer {
            today: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            show_completed: true,
            limit: 50,
            json: false,
        }
    }

    fn board() -> Board {
        let mut b = Board::default();
        let due = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        b.add(NewTask::new("Low thing", Priority::Low, due).with_description("long enough text"));
        b.add(
            NewTask::new("Urgent thing", Priority::High, due)
                .with_description("abcd")
                .with_time_available(10)
                .with_mood(Mood::Productive),
        );
        b
    }

    #[test]
    fn table_lists_in_rank_order() {
        let out = renderer().render(&board().view()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[1].contains("Urgent thing"));
        assert!(lines[1].contains("in 2 days"));
        assert!(lines[2].contains("Low thing"));
        assert_eq!(lines.last(), Some(&"2 open, 0 completed"));
    }

    #[test]
    fn hides_completed_when_configured() {
        let mut b = board();
        b.complete(taskrank_core::TaskId(2));
        let mut r = renderer();
        r.show_completed = false;
        let out = r.render(&b.view()).unwrap();
        assert!(!out.contains("Urgent thing"));
        assert!(out.contains("1 open, 1 completed"));
    }

    #[test]
    fn limit_caps_rows() {
        let mut r = renderer();
        r.limit = 1;
        let out = r.render(&board().view()).unwrap();
        assert!(out.contains("Urgent thing"));
        assert!(!out.contains("Low thing"));
    }

    #[test]
    fn json_output_is_the_view() {
        let mut r = renderer();
        r.json = true;
        let out = r.render(&board().view()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["entries"][0]["title"], "Urgent thing");
        assert_eq!(v["entries"][0]["score"], 10);
    }

    #[test]
    fn empty_view_hint() {
        let out = renderer().render(&RankedView::default()).unwrap();
        assert!(out.contains("No tasks yet"));
    }

    #[test]
    fn explain_shows_each_term() {
        let b = board();
        let t = b.get(taskrank_core::TaskId(2)).unwrap();
        let out = explain(t, &score_breakdown(t));
        assert!(out.contains("priority high"));
        assert!(out.contains("10/8m"));
        assert!(out.contains("total               10"));
    }
}
