//! Terminal front end for the task list core.
//!
//! # Responsibility
//! - Drive one `TaskListStore` session from line-based stdin commands.
//! - Print the rendered list after every change.

mod command;

use clap::Parser;
use command::{parse_command, Command};
use log::warn;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tasklist_core::{
    default_log_level, init_logging, render_plain, TaskId, TaskListStore, TaskListView,
};

#[derive(Debug, Parser)]
#[command(name = "tasklist", version, about = "Single-session task list")]
struct Args {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, env = "TASKLIST_LOG_LEVEL")]
    log_level: Option<String>,
    /// Absolute directory for rolling log files. File logging is off when unset.
    #[arg(long, env = "TASKLIST_LOG_DIR")]
    log_dir: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(log_dir) = args.log_dir.as_deref() {
        let level = args.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("tasklist: {err}");
            return ExitCode::FAILURE;
        }
    }

    match run(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tasklist: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(input: impl BufRead, mut out: impl Write) -> io::Result<()> {
    let mut store = TaskListStore::new();
    write!(out, "{}", render(&store))?;

    for line in input.lines() {
        match parse_command(&line?) {
            Command::Add(text) => {
                if store.admit(&text).is_created() {
                    write!(out, "{}", render(&store))?;
                }
            }
            Command::RemoveId(id) => {
                if store.remove(&TaskId::from(id.as_str())) {
                    write!(out, "{}", render(&store))?;
                } else {
                    writeln!(out, "no task with id {id}")?;
                }
            }
            Command::RemoveAt(position) => {
                let view = TaskListView::from_snapshot(&store.snapshot());
                match view.row_at(position) {
                    Some(row) => {
                        store.remove(&TaskId::from(row.id.as_str()));
                        write!(out, "{}", render(&store))?;
                    }
                    None => writeln!(out, "no task at #{position}")?,
                }
            }
            Command::List => write!(out, "{}", render(&store))?,
            Command::Help => writeln!(out, "{}", command::HELP)?,
            Command::Quit => break,
            Command::Empty => {}
            Command::Invalid(reason) => {
                warn!("event=cli_command module=cli status=invalid");
                writeln!(out, "{reason}")?;
            }
        }
        out.flush()?;
    }
    Ok(())
}

fn render(store: &TaskListStore) -> String {
    render_plain(&TaskListView::from_snapshot(&store.snapshot()))
}
