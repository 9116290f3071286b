use super::open_repo;
use anyhow::Result;
use std::path::PathBuf;
use tasklist_core::task::TaskId;

pub fn run(dir: Option<PathBuf>, id: TaskId, json: bool) -> Result<()> {
    let mut repo = open_repo(dir)?;
    let deleted = repo.delete(id);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "id": id,
                "deleted": deleted,
            }))?
        );
    } else if deleted {
        println!("Deleted task {}", id);
    } else {
        println!("No task {}", id);
    }
    Ok(())
}
