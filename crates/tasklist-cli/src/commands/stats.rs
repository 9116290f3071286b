use super::open_repo;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(dir: Option<PathBuf>, json: bool) -> Result<()> {
    let repo = open_repo(dir)?;
    let stats = repo.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("Total:     {}", stats.total);
        println!("Completed: {}", stats.completed);
        println!("Pending:   {}", stats.pending);
    }
    Ok(())
}
