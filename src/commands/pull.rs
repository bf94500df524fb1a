use crate::commands::open_engine;
use crate::core::{print_success, Result};
use std::path::PathBuf;

/// Fetch and fast-forward the library from its remote
pub fn execute_pull(path: Option<PathBuf>) -> Result<()> {
    let mut engine = open_engine(path)?;

    engine.pull()?;
    print_success("Pull completed successfully");
    Ok(())
}
