use crate::commands::open_engine;
use crate::core::{print_info, Result};
use std::path::PathBuf;

/// Manual refresh: immediate fetch attempt, tree rebuild and status
/// reconciliation
pub fn execute_refresh(path: Option<PathBuf>) -> Result<()> {
    let mut engine = open_engine(path)?;

    engine.refresh();

    if let Some(fetched) = engine.last_fetch() {
        println!("\nLast fetch: {}", fetched.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    print_info(engine.summary());

    Ok(())
}
