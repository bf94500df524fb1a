//! KiCad Library Git - git status overlay and background sync for KiCad
//! library directories.
//!
//! This library binds a KiCad library directory to its git repository,
//! walks the directory into an ordered tree of library-relevant entries,
//! classifies every path into a single display status, and keeps the two
//! in sync through short-delay status refreshes and a long-delay
//! background fetch cycle.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Repository binding and branch information
//! - File status classification and the path-keyed status cache
//! - Library tree indexing and filtering
//! - The sync engine with its timer scheduling abstraction
//! - Remote operations (fetch, pull, push) and the commit flow
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    colored_marker,
    colored_name,
    // Output formatting
    print_error,
    print_info,
    print_section_header,
    print_success,

    // Remote transport
    CommitFlow,
    CommitOutcome,

    // Scheduling
    DeadlineScheduler,
    // File status classification
    FileStatus,
    GitRemoteOps,
    // Error handling
    LibGitError,
    ManualScheduler,
    // Configuration
    PanelConfig,
    RefreshOutcome,
    RemoteOps,
    // Repository binding
    RepoHandle,
    Result,
    Scheduler,
    StageAllCommitFlow,
    // Status caching
    StatusCache,
    // Sync engine
    SyncEngine,
    TimerId,
    // Tree indexing
    TreeIndex,
    TreeNode,
};
