//! `todo` — command-line task list manager over a JSON storage file.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "todo", about = "Manage a todo list stored as a JSON file", version)]
struct Args {
    /// Path to the todo storage file
    #[arg(
        long,
        env = "TODO_FILE_NAME_ENV",
        default_value = ".todo.json",
        global = true
    )]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List tasks in insertion order
    List {
        /// Show only tasks that are not done yet
        #[arg(long)]
        uncompleted: bool,

        /// Include creation and completion timestamps
        #[arg(long)]
        verbose: bool,
    },

    /// Add a task from the arguments, or one task per stdin line
    Add {
        /// Task description; omit it to enter tasks interactively
        description: Vec<String>,
    },

    /// Mark the task at the given position as done
    Complete { position: usize },

    /// Remove the task at the given position
    Delete { position: usize },
}

fn main() -> ExitCode {
    init_tracing();

    match commands::run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("todo: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // stdout is the data channel; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TODO_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
