use super::{format_task, open_repo};
use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;
use tasklist_core::filter::Filter;

pub fn run(dir: Option<PathBuf>, filter: Filter, json: bool) -> Result<()> {
    let repo = open_repo(dir)?;
    let tasks = repo.view(filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        match filter {
            Filter::All => println!("No tasks yet. Add one with `tasklist add <TEXT>`."),
            Filter::Pending => println!("No pending tasks."),
            Filter::Completed => println!("No completed tasks."),
        }
        return Ok(());
    }

    let today = Local::now().date_naive();
    for task in &tasks {
        println!("{}", format_task(task, today));
    }
    Ok(())
}
