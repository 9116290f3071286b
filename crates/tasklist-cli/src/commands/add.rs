use super::{open_repo, parse_due};
use anyhow::Result;
use std::path::PathBuf;

pub fn run(dir: Option<PathBuf>, text: String, due: Option<String>, json: bool) -> Result<()> {
    let due = parse_due(due.as_deref())?;
    let mut repo = open_repo(dir)?;

    let id = repo.add(&text, due);
    if json {
        let task = id.and_then(|id| repo.get(id));
        println!("{}", serde_json::to_string_pretty(&task)?);
        return Ok(());
    }
    match id {
        Some(id) => println!("Added task {}", id),
        None => println!("Nothing to add: task text is blank"),
    }
    Ok(())
}
