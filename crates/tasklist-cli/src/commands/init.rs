use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use tasklist_store::repository::{Repository, TASKLIST_DIR};

pub fn run(dir: Option<PathBuf>) -> Result<()> {
    let root = match dir {
        Some(dir) => dir,
        None => env::current_dir().context("failed to get current directory")?,
    };
    Repository::init(&root).context("failed to initialize task list")?;
    println!(
        "Initialized empty task list in {}",
        root.join(TASKLIST_DIR).display()
    );
    Ok(())
}
