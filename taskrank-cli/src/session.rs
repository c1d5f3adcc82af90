//! Interactive session: a line-oriented stand-in for the add/complete/list page.
//!
//! All tasks live in the session's [`Board`]; quitting (or EOF) drops them.

use anyhow::Result;
use std::io::{BufRead, Write};
use taskrank_core::{Board, Completion, TaskForm, TaskId, score_breakdown};
use tracing::{debug, warn};

use crate::render::{Renderer, explain};

const HELP: &str = "\
Commands:
  add          create a task (prompts for each field)
  done <id>    mark a task completed
  list         show the ranked tasks
  explain <id> show how a task's score is computed
  help         this message
  quit         end the session (tasks are discarded)
";

pub struct Session<R, W> {
    board: Board,
    renderer: Renderer,
    input: R,
    out: W,
}

enum Step {
    Continue,
    Quit,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(board: Board, renderer: Renderer, input: R, out: W) -> Self {
        Self {
            board,
            renderer,
            input,
            out,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "taskrank session. Type `help` for commands.")?;
        loop {
            let Some(line) = self.prompt("taskrank")? else { break };
            if let Step::Quit = self.dispatch(&line)? {
                break;
            }
        }
        let n = self.board().store().len();
        writeln!(self.out, "Session ended; {n} task(s) discarded.")?;
        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> Result<Step> {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Ok(Step::Continue);
        };
        let arg = parts.next();
        debug!(cmd, ?arg, "session command");

        match cmd {
            "add" | "a" => self.add()?,
            "done" | "complete" | "d" => match parse_id(arg) {
                Some(id) => self.complete(id)?,
                None => writeln!(self.out, "usage: done <id>")?,
            },
            "list" | "ls" | "l" => self.list()?,
            "explain" | "x" => match parse_id(arg) {
                Some(id) => self.explain(id)?,
                None => writeln!(self.out, "usage: explain <id>")?,
            },
            "help" | "h" | "?" => write!(self.out, "{HELP}")?,
            "quit" | "exit" | "q" => return Ok(Step::Quit),
            other => writeln!(self.out, "unknown command '{other}'; type `help`")?,
        }
        Ok(Step::Continue)
    }

    fn add(&mut self) -> Result<()> {
        let Some(form) = self.read_form()? else {
            return Ok(());
        };
        match self.board.add_form(form) {
            Ok(published) => {
                writeln!(self.out, "Added task {}.", published.outcome)?;
                let text = self.renderer.render(&published.view)?;
                write!(self.out, "{text}")?;
            }
            Err(e) => {
                warn!(error = %e, "task rejected");
                writeln!(self.out, "Not added: {e}")?;
            }
        }
        Ok(())
    }

    fn complete(&mut self, id: TaskId) -> Result<()> {
        let published = self.board.complete(id);
        match published.outcome {
            Completion::Completed => writeln!(self.out, "Completed task {id}.")?,
            Completion::AlreadyCompleted => writeln!(self.out, "Task {id} was already completed.")?,
            Completion::NotFound => writeln!(self.out, "No task {id}.")?,
        }
        let text = self.renderer.render(&published.view)?;
        write!(self.out, "{text}")?;
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let text = self.renderer.render(&self.board.view())?;
        write!(self.out, "{text}")?;
        Ok(())
    }

    fn explain(&mut self, id: TaskId) -> Result<()> {
        match self.board.get(id) {
            Some(t) => write!(self.out, "{}", explain(t, &score_breakdown(t)))?,
            None => writeln!(self.out, "No task {id}.")?,
        }
        Ok(())
    }

    /// Collect the add-task form; `None` if input ran out midway.
    fn read_form(&mut self) -> Result<Option<TaskForm>> {
        let Some(title) = self.prompt("Title")? else { return Ok(None) };
        let Some(description) = self.prompt("Description")? else { return Ok(None) };
        let Some(priority) = self.prompt("Priority (high/medium/low)")? else { return Ok(None) };
        let Some(due_date) = self.prompt("Due date (YYYY-MM-DD)")? else { return Ok(None) };
        let Some(time_available) = self.prompt("Time available (minutes)")? else { return Ok(None) };
        let Some(mood) = self.prompt("Mood (productive/energetic/relaxed)")? else { return Ok(None) };

        Ok(Some(TaskForm {
            title,
            description,
            priority,
            due_date,
            time_available,
            mood,
        }))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}: ")?;
        self.out.flush()?;
        let mut s = String::new();
        if self.input.read_line(&mut s)? == 0 {
            return Ok(None);
        }
        // Only the line ending goes; TaskForm trims the fields that need it.
        Ok(Some(s.trim_end_matches(['\n', '\r']).to_string()))
    }
}

fn parse_id(arg: Option<&str>) -> Option<TaskId> {
    arg?.trim_start_matches('#').parse::<u64>().ok().map(TaskId)
}
