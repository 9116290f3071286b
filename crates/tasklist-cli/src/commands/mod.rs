pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod stats;
pub mod toggle;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::env;
use std::path::PathBuf;
use tasklist_core::task::{parse_due_date, Task};
use tasklist_store::repository::Repository;

/// Open the workspace named by `--dir`/`TASKLIST_DIR`, or discover one
/// upward from the current directory.
pub fn open_repo(dir: Option<PathBuf>) -> Result<Repository> {
    let repo = match dir {
        Some(dir) => Repository::open(&dir)
            .with_context(|| format!("no task list in {}", dir.display()))?,
        None => {
            let cwd = env::current_dir()?;
            Repository::discover(&cwd)
                .context("not a task list (or any parent); run `tasklist init` first")?
        }
    };
    tracing::debug!(root = %repo.root().display(), tasks = repo.tasks().len(), "opened task list");
    Ok(repo)
}

pub fn parse_due(due: Option<&str>) -> Result<Option<NaiveDate>> {
    due.map(|d| parse_due_date(d).context("invalid --due"))
        .transpose()
}

/// One line per task: checkbox, id, text, then due date and overdue flag.
pub fn format_task(task: &Task, today: NaiveDate) -> String {
    let check = if task.completed { "[x]" } else { "[ ]" };
    let mut line = format!("{} {}  {}", check, task.id, task.text);
    if let Some(due) = task.due_date {
        line.push_str(&format!("  (due {})", due.format("%Y-%m-%d")));
    }
    if task.is_overdue_on(today) {
        line.push_str("  OVERDUE");
    }
    line
}
