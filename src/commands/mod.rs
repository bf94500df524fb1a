pub mod commit;
pub mod pull;
pub mod push;
pub mod refresh;
pub mod status;
pub mod tree;
pub mod watch;

pub use commit::*;
pub use pull::*;
pub use push::*;
pub use refresh::*;
pub use status::*;
pub use tree::*;
pub use watch::*;

use crate::core::{DeadlineScheduler, GitRemoteOps, PanelConfig, Result, SyncEngine};
use std::env;
use std::path::PathBuf;

/// Library path from the command line, defaulting to the current directory
pub(crate) fn resolve_library_path(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => Ok(env::current_dir()?),
    }
}

/// Build an engine bound to the given library path with the persisted
/// configuration and an initial status reconciliation already applied
pub(crate) fn open_engine(path: Option<PathBuf>) -> Result<SyncEngine> {
    let path = resolve_library_path(path)?;
    let config = PanelConfig::load_or_default();

    let mut engine = SyncEngine::new(
        config.clone(),
        Box::new(DeadlineScheduler::new()),
        Box::new(GitRemoteOps::new(config)),
    );
    engine.set_library_path(&path);
    engine.on_status_timer();

    Ok(engine)
}
