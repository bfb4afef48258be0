//! Tasklight CLI presentation layer.
//!
//! # Responsibility
//! - Translate subcommands into store operations.
//! - Render filtered views, stats and severity-classified notifications.
//! - Resolve the slot path and optional log directory from the
//!   environment.
//!
//! # Invariants
//! - Store mutations are immediate and synchronous; any visual delay
//!   belongs to a front end, never to the store contract.
//! - `clear` asks for confirmation unless `--yes` is passed; the store
//!   itself never prompts.

mod notify;

use clap::{Parser, Subcommand};
use notify::{notify, Severity};
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write as _};
use std::path::PathBuf;
use std::process::ExitCode;
use tasklight_core::{
    default_log_level, init_logging, FileSlot, Filter, StoreError, TaskId, TaskSlot, TaskStore,
    EXPORT_FILE_NAME,
};

const SLOT_ENV: &str = "TASKLIGHT_SLOT_PATH";
const LOG_DIR_ENV: &str = "TASKLIGHT_LOG_DIR";
const SLOT_DIR_NAME: &str = ".tasklight";
const SLOT_FILE_NAME: &str = "tasks.json";

#[derive(Debug, Parser)]
#[command(name = "tasklight", about = "Persistent to-do task list", version)]
struct Cli {
    /// File holding the persisted task sequence.
    #[arg(long, env = SLOT_ENV, global = true)]
    slot: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a new pending task.
    Add {
        /// Task text; multiple words are joined with spaces.
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List tasks in the selected view.
    List {
        /// View selector: all, completed or pending.
        #[arg(long, default_value = "all")]
        filter: Filter,
    },
    /// Flip a task between completed and pending.
    Toggle { id: TaskId },
    /// Delete a task.
    Delete { id: TaskId },
    /// Delete every task.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Write the full task sequence to a JSON backup file.
    Export {
        /// Target path; defaults to todo-tasks.json.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show task counters.
    Stats,
}

fn main() -> ExitCode {
    let Cli { slot, command } = Cli::parse();
    init_file_logging();

    let slot_path = slot.unwrap_or_else(default_slot_path);
    log::debug!(
        "event=cli_start module=cli status=ok slot={}",
        slot_path.display()
    );
    let mut store = TaskStore::open(FileSlot::new(slot_path));
    let severity = run(command, &mut store);
    ExitCode::from(severity.exit_code())
}

fn run(command: Command, store: &mut TaskStore<FileSlot>) -> Severity {
    match command {
        Command::Add { text } => match store.add(&text.join(" ")) {
            Ok(_) => notify(Severity::Success, "Task added successfully!"),
            Err(StoreError::Validation(_)) => notify(Severity::Warning, "Please enter a task!"),
            Err(err) => notify(Severity::Error, &format!("add failed: {err}")),
        },
        Command::List { filter } => {
            print!("{}", render_list(store, filter));
            Severity::Success
        }
        Command::Toggle { id } => match store.toggle(id) {
            Ok(task) if task.completed => notify(Severity::Success, "Task completed!"),
            Ok(_) => notify(Severity::Success, "Task marked as pending"),
            Err(err) => notify(Severity::Error, &format!("toggle failed: {err}")),
        },
        Command::Delete { id } => match store.delete(id) {
            Ok(()) => notify(Severity::Info, "Task deleted!"),
            Err(err) => notify(Severity::Error, &format!("delete failed: {err}")),
        },
        Command::Clear { yes } => {
            if !yes && !prompt_for_confirmation() {
                return notify(Severity::Info, "Clear cancelled.");
            }
            match store.clear_all() {
                Ok(()) => notify(Severity::Info, "All tasks cleared!"),
                Err(err) => notify(Severity::Error, &format!("clear failed: {err}")),
            }
        }
        Command::Export { output } => {
            let path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
            let payload = match store.export_json() {
                Ok(payload) => payload,
                Err(err) => return notify(Severity::Error, &format!("export failed: {err}")),
            };
            match fs::write(&path, payload) {
                Ok(()) => notify(
                    Severity::Success,
                    &format!(
                        "Exported {} task(s) to {}",
                        store.stats().total,
                        path.display()
                    ),
                ),
                Err(err) => notify(Severity::Error, &format!("export failed: {err}")),
            }
        }
        Command::Stats => {
            let stats = store.stats();
            println!(
                "{} task{}, {} completed",
                stats.total,
                plural_suffix(stats.total),
                stats.completed
            );
            Severity::Success
        }
    }
}

/// Renders the selected view plus the stats footer, distinguishing an
/// empty store from an empty view.
fn render_list<S: TaskSlot>(store: &TaskStore<S>, filter: Filter) -> String {
    let mut out = String::new();
    let view = store.filtered_view(filter);

    if view.is_empty() {
        let message = if store.tasks().is_empty() {
            "No tasks yet"
        } else {
            "No tasks in this view"
        };
        let _ = writeln!(out, "{message}");
    } else {
        for task in &view {
            let mark = if task.completed { 'x' } else { ' ' };
            let _ = writeln!(out, "[{mark}] {}  {}", task.id, task.text);
        }
    }

    let stats = store.stats();
    let _ = writeln!(
        out,
        "{} task{}, {} completed",
        stats.total,
        plural_suffix(stats.total),
        stats.completed
    );
    out
}

fn plural_suffix(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

fn prompt_for_confirmation() -> bool {
    eprint!("Are you sure you want to clear all tasks? [y/N] ");
    let _ = io::stderr().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    confirmed(&answer)
}

fn confirmed(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn default_slot_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SLOT_DIR_NAME)
        .join(SLOT_FILE_NAME)
}

/// Enables file logging only when the user opted in via the log-dir
/// environment variable; a failed logger setup degrades to a warning
/// instead of blocking the session.
fn init_file_logging() {
    let Ok(raw) = std::env::var(LOG_DIR_ENV) else {
        return;
    };
    let dir = raw.trim();
    if dir.is_empty() {
        return;
    }
    if let Err(err) = init_logging(default_log_level(), dir) {
        notify(Severity::Warning, &format!("logging disabled: {err}"));
    }
}

#[cfg(test)]
mod tests {
    use super::{confirmed, render_list, Cli, Command};
    use clap::Parser;
    use tasklight_core::{Filter, MemorySlot, TaskStore};

    #[test]
    fn add_joins_multiword_text() {
        let cli = Cli::try_parse_from(["tasklight", "add", "buy", "milk"]).unwrap();
        match cli.command {
            Command::Add { text } => assert_eq!(text.join(" "), "buy milk"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn add_requires_text() {
        assert!(Cli::try_parse_from(["tasklight", "add"]).is_err());
    }

    #[test]
    fn list_parses_filter_and_defaults_to_all() {
        let cli = Cli::try_parse_from(["tasklight", "list"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::List {
                filter: Filter::All
            }
        ));

        let cli = Cli::try_parse_from(["tasklight", "list", "--filter", "completed"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::List {
                filter: Filter::Completed
            }
        ));

        assert!(Cli::try_parse_from(["tasklight", "list", "--filter", "done"]).is_err());
    }

    #[test]
    fn confirmed_accepts_only_yes_answers() {
        assert!(confirmed("y\n"));
        assert!(confirmed(" YES "));
        assert!(!confirmed(""));
        assert!(!confirmed("n\n"));
        assert!(!confirmed("maybe"));
    }

    #[test]
    fn render_list_distinguishes_empty_store_from_empty_view() {
        let mut store = TaskStore::open(MemorySlot::new());
        assert!(render_list(&store, Filter::All).starts_with("No tasks yet"));

        store.add("only pending").unwrap();
        let rendered = render_list(&store, Filter::Completed);
        assert!(rendered.starts_with("No tasks in this view"));
        assert!(rendered.ends_with("1 task, 0 completed\n"));
    }

    #[test]
    fn render_list_marks_completed_tasks() {
        let mut store = TaskStore::open(MemorySlot::new());
        let task = store.add("ship it").unwrap();
        store.toggle(task.id).unwrap();

        let rendered = render_list(&store, Filter::All);
        assert!(rendered.contains("[x]"));
        assert!(rendered.contains("ship it"));
        assert!(rendered.ends_with("1 task, 1 completed\n"));
    }
}
