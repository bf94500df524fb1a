//! Type-safe git file status enumeration for tree markers.
//!
//! This module defines [`FileStatus`], the per-path status code painted onto
//! the library tree. Codes are recomputed from live repository state on every
//! reconciliation pass and are never persisted.
//!
//! # Public API
//! - [`FileStatus`]: Enumeration of all tree-marker status codes
//!
//! # Key Features
//! - **git2 integration**: Direct classification from `git2::Status` flag sets
//! - **Fixed precedence**: First matching flag wins, in display-priority order
//! - **Display formatting**: Marker strings for UI output

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-file status code shown as a tree marker.
///
/// Variants are declared in display priority order: when a status entry
/// carries several flags, classification stops at the first match in this
/// order (see [`FileStatus::from_entry_flags`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileStatus {
    /// Modified in worktree or index (M)
    Modified,
    /// New in worktree or index (A)
    Added,
    /// Deleted from worktree or index (D)
    Deleted,
    /// Merge conflict (C)
    Conflicted,
    /// Flags set but none of the above (renamed, typechange, ...)
    Untracked,
    /// Unchanged relative to HEAD
    Current,
}

impl FileStatus {
    /// Classify a full `git2::Status` flag set into a single marker code.
    ///
    /// Precedence, stopping at the first match:
    /// 1. worktree/index modified -> `Modified`
    /// 2. worktree/index new      -> `Added`
    /// 3. worktree/index deleted  -> `Deleted`
    /// 4. conflicted              -> `Conflicted`
    /// 5. no flags at all         -> `Current`
    /// 6. anything else           -> `Untracked`
    ///
    /// Renamed and typechange entries intentionally fall through to
    /// `Untracked`; the panel has no dedicated marker for them.
    pub fn from_entry_flags(flags: git2::Status) -> FileStatus {
        if flags.intersects(git2::Status::WT_MODIFIED | git2::Status::INDEX_MODIFIED) {
            FileStatus::Modified
        } else if flags.intersects(git2::Status::WT_NEW | git2::Status::INDEX_NEW) {
            FileStatus::Added
        } else if flags.intersects(git2::Status::WT_DELETED | git2::Status::INDEX_DELETED) {
            FileStatus::Deleted
        } else if flags.contains(git2::Status::CONFLICTED) {
            FileStatus::Conflicted
        } else if flags.is_empty() {
            FileStatus::Current
        } else {
            FileStatus::Untracked
        }
    }

    /// Short marker string for tree display
    pub fn as_str(&self) -> &'static str {
        match self {
            FileStatus::Modified => "M",
            FileStatus::Added => "A",
            FileStatus::Deleted => "D",
            FileStatus::Conflicted => "C",
            FileStatus::Untracked => "?",
            FileStatus::Current => " ",
        }
    }

    /// Human-readable description for status lines
    pub fn description(&self) -> &'static str {
        match self {
            FileStatus::Modified => "modified",
            FileStatus::Added => "added",
            FileStatus::Deleted => "deleted",
            FileStatus::Conflicted => "conflicted",
            FileStatus::Untracked => "untracked",
            FileStatus::Current => "current",
        }
    }

    /// True for any state the user would want to commit or inspect
    pub fn is_change(&self) -> bool {
        !matches!(self, FileStatus::Current)
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
