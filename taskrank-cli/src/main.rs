use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use std::io;
use taskrank_core::time::today_in;
use taskrank_core::{Board, Mood, NewTask, Priority, TaskId, TaskStore, score_breakdown};
use tracing_subscriber::EnvFilter;

mod config;
mod render;
mod session;
mod state;

use config::Config;
use render::Renderer;
use session::Session;

#[derive(Parser, Debug)]
#[command(
    name = "taskrank",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("TASKRANK_BUILD_SHA"), ")"),
    about = "Rank your to-do list by priority, time and mood"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session: add tasks, complete them, see the ranking (tasks are kept in memory only)
    Session {
        /// Print the ranked view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score a single ad hoc task and explain the result
    Score {
        #[arg(long, default_value = "medium")]
        priority: Priority,

        #[arg(long, default_value = "")]
        description: String,

        /// Minutes available
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        time_available: i64,

        #[arg(long, default_value = "relaxed")]
        mood: Mood,

        /// Pretend some tasks were already completed
        #[arg(long)]
        momentum: bool,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default ~/.taskrank/config.toml if none exists
    Init,
    /// Print the effective configuration
    Show,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Session { json: false }) {
        Command::Session { json } => {
            let cfg = config::load_config()?;
            run_session(&cfg, json)?;
        }

        Command::Score {
            priority,
            description,
            time_available,
            mood,
            momentum,
        } => {
            // The store never issues id 0, so it cannot collide with a real task.
            let previous = if momentum { vec![TaskId(0)] } else { vec![] };
            let new = NewTask::new("ad hoc", priority, Utc::now().date_naive())
                .with_description(description)
                .with_time_available(time_available)
                .with_mood(mood)
                .with_previous_completed(previous);

            let mut store = TaskStore::new();
            let id = store.add_task(new);
            let task = store.get(id).context("ad hoc task missing from store")?;
            print!("{}", render::explain(task, &score_breakdown(task)));
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                config::init_config()?;
            }
            ConfigCommand::Show => {
                let p = config::config_path()?;
                let cfg = config::load_config()?;
                println!("# {}", p.display());
                print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
            }
        },
    }

    Ok(())
}

fn run_session(cfg: &Config, json: bool) -> Result<()> {
    let today: NaiveDate = today_in(&cfg.display.timezone, Utc::now())
        .with_context(|| format!("display.timezone = {:?}", cfg.display.timezone))?;

    let renderer = Renderer {
        today,
        show_completed: cfg.display.show_completed,
        limit: cfg.display.limit,
        json: json || cfg.display.json,
    };
    tracing::info!(timezone = %cfg.display.timezone, %today, "session starting");

    let stdin = io::stdin();
    let mut session = Session::new(
        Board::new(cfg.board_options()),
        renderer,
        stdin.lock(),
        io::stdout(),
    );
    session.run()
}
