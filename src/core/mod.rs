//! Core functionality for the KiCad library git panel.
//!
//! This module provides the building blocks for the library tree overlay:
//! repository binding, file status classification, tree indexing, status
//! caching, timer scheduling and the sync engine that ties them together.

pub mod config;
pub mod dirs;
pub mod engine;
pub mod error;
pub mod file_status;
pub mod output;
pub mod remote;
pub mod repo;
pub mod scheduler;
pub mod status_cache;
pub mod tree;

// === Error handling ===
// Core error type and result alias used throughout the crate
pub use error::{LibGitError, Result};

// === File status classification ===
// Precedence-ordered mapping from raw git status flags to display states
pub use file_status::FileStatus;

// === Repository binding ===
// Owned handle over the library's git repository with cached branch info
pub use repo::RepoHandle;

// === Tree indexing ===
// Filesystem walk producing the ordered, filtered library tree
pub use tree::{should_show, TreeIndex, TreeNode, MISSING_ROOT_LABEL};

// === Status caching ===
// Path-keyed snapshot of repository status with change counters
pub use status_cache::StatusCache;

// === Scheduling ===
// One-shot timer abstraction injected into the engine
pub use scheduler::{DeadlineScheduler, ManualScheduler, Scheduler, TimerId};

// === Remote transport ===
// Fetch/pull/push over git2 with the credential fallback chain
pub use remote::{CommitFlow, CommitOutcome, GitRemoteOps, RemoteOps, StageAllCommitFlow};

// === Sync engine ===
// Status reconciliation, timer cycles and command entry points
pub use engine::{RefreshOutcome, SyncEngine};

// === Configuration ===
// Persisted panel settings (remote name, intervals, credentials)
pub use config::PanelConfig;

// === Output formatting ===
// Consistent CLI message and tree color helpers
pub use output::{
    colored_marker, colored_name, print_error, print_info, print_section_header, print_success,
};
