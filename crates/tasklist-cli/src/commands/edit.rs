use super::{open_repo, parse_due};
use anyhow::Result;
use std::path::PathBuf;
use tasklist_core::task::TaskId;

/// Edit through a session pre-filled from the task: only the given flags
/// change the draft, so omitted fields keep their current values.
pub fn run(
    dir: Option<PathBuf>,
    id: TaskId,
    text: Option<String>,
    due: Option<String>,
    no_due: bool,
    json: bool,
) -> Result<()> {
    let due = parse_due(due.as_deref())?;
    let mut repo = open_repo(dir)?;

    let Some(mut session) = repo.begin_edit(id) else {
        if json {
            println!("null");
        } else {
            println!("No task {}", id);
        }
        return Ok(());
    };

    if let Some(text) = text {
        session.set_text(text);
    }
    if let Some(due) = due {
        session.set_due(due);
    }
    if no_due {
        session.clear_due();
    }
    let applied = repo.commit_edit(session);

    if json {
        println!("{}", serde_json::to_string_pretty(&repo.get(id))?);
    } else if applied {
        println!("Updated task {}", id);
    } else {
        println!("Task {} unchanged: text cannot be blank", id);
    }
    Ok(())
}
