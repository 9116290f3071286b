mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tasklist_core::filter::Filter;
use tasklist_core::task::TaskId;
use tracing_subscriber::EnvFilter;

/// Log directives used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "tasklist=warn,tasklist_core=warn,tasklist_store=warn";

#[derive(Parser)]
#[command(name = "tasklist", about = "Personal task list", version)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Directory containing the .tasklist/ workspace (default: search upward)
    #[arg(long, global = true, env = "TASKLIST_DIR")]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a task list in the current directory
    Init,

    /// Add a task
    Add {
        /// Task text
        text: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },

    /// Mark a task completed, or pending again
    Toggle {
        /// Task ID
        id: TaskId,
    },

    /// Change the text or due date of a task
    Edit {
        /// Task ID
        id: TaskId,

        /// New text
        #[arg(short, long)]
        text: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "no_due")]
        due: Option<String>,

        /// Remove the due date
        #[arg(long)]
        no_due: bool,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: TaskId,
    },

    /// List tasks in display order
    List {
        /// Which tasks to show (all, pending, completed)
        #[arg(short, long, default_value = "all")]
        filter: Filter,
    },

    /// Show task counts
    Stats,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let dir = cli.dir;

    let result = match cli.command {
        Commands::Init => commands::init::run(dir),
        Commands::Add { text, due } => commands::add::run(dir, text, due, cli.json),
        Commands::Toggle { id } => commands::toggle::run(dir, id, cli.json),
        Commands::Edit {
            id,
            text,
            due,
            no_due,
        } => commands::edit::run(dir, id, text, due, no_due, cli.json),
        Commands::Delete { id } => commands::delete::run(dir, id, cli.json),
        Commands::List { filter } => commands::list::run(dir, filter, cli.json),
        Commands::Stats => commands::stats::run(dir, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
