use crate::commands::open_engine;
use crate::core::{print_info, print_success, CommitOutcome, Result, StageAllCommitFlow};
use std::path::PathBuf;

/// Stage every change in the library and commit it with the given message
pub fn execute_commit(path: Option<PathBuf>, message: String) -> Result<()> {
    let mut engine = open_engine(path)?;

    let flow = StageAllCommitFlow::new(message);
    match engine.commit(&flow)? {
        CommitOutcome::Committed => print_success("Changes committed"),
        CommitOutcome::Cancelled => print_info("Nothing to commit"),
    }

    Ok(())
}
