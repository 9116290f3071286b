use super::open_repo;
use anyhow::Result;
use std::path::PathBuf;
use tasklist_core::task::TaskId;

pub fn run(dir: Option<PathBuf>, id: TaskId, json: bool) -> Result<()> {
    let mut repo = open_repo(dir)?;
    repo.toggle(id);

    let task = repo.get(id);
    if json {
        println!("{}", serde_json::to_string_pretty(&task)?);
        return Ok(());
    }
    match task {
        Some(t) if t.completed => println!("Completed task {}", id),
        Some(_) => println!("Reopened task {}", id),
        None => println!("No task {}", id),
    }
    Ok(())
}
