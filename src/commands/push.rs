use crate::commands::open_engine;
use crate::core::{print_info, print_success, Result};
use std::path::PathBuf;

/// Push local library commits to the remote.
///
/// Short-circuits with an informational message when no local commits are
/// ahead of the remote; no network traffic happens in that case.
pub fn execute_push(path: Option<PathBuf>) -> Result<()> {
    let mut engine = open_engine(path)?;

    engine.push()?;

    if engine.summary() == "Push completed successfully" {
        print_success("Push completed successfully");
    } else {
        print_info(engine.summary());
    }

    Ok(())
}
