//! Point-in-time mapping from absolute path to git status.
//!
//! This module provides [`StatusCache`], rebuilt wholesale on every
//! reconciliation pass from the repository's live index and worktree state.
//! The cache is never merged or patched: a refresh fully replaces the
//! previous mapping, which is what makes the replacement atomic from the
//! tree-painting side's point of view.
//!
//! # Public API
//! - [`StatusCache`]: Path-to-status mapping plus change counters
//!
//! # Join semantics
//! Paths present in the cache but absent from the current tree index are
//! ignored by the read side; tree paths absent from the cache default to
//! [`FileStatus::Current`] via [`StatusCache::status_for`].

use crate::core::{
    error::{LibGitError, Result},
    file_status::FileStatus,
    repo::RepoHandle,
};
use git2::{StatusOptions, StatusShow};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Snapshot of per-path git status with display counters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusCache {
    statuses: HashMap<PathBuf, FileStatus>,
    modified: usize,
    added: usize,
    deleted: usize,
}

impl StatusCache {
    /// An empty cache; every lookup reports `Current`
    pub fn empty() -> Self {
        Self::default()
    }

    /// Recompute the cache from the bound repository.
    ///
    /// Queries a full status listing covering index and worktree, including
    /// untracked entries (recursing into untracked directories) and
    /// unmodified entries. Each entry is keyed by its absolute path (workdir
    /// root joined with the entry's relative path); entries with no derivable
    /// path on either diff side are skipped individually.
    pub fn refresh(handle: &RepoHandle) -> Result<StatusCache> {
        let repo = handle.repo().ok_or(LibGitError::NoRepository)?;
        let workdir = repo.workdir().ok_or(LibGitError::BareRepository)?;

        let mut opts = StatusOptions::new();
        opts.show(StatusShow::IndexAndWorkdir)
            .include_untracked(true)
            .include_unmodified(true)
            .recurse_untracked_dirs(true);

        let statuses = repo.statuses(Some(&mut opts))?;
        let mut cache = StatusCache::empty();

        for entry in statuses.iter() {
            let rel_path = entry
                .head_to_index()
                .and_then(|diff| diff.old_file().path())
                .or_else(|| entry.index_to_workdir().and_then(|diff| diff.old_file().path()));

            let rel_path = match rel_path {
                Some(path) => path,
                None => continue,
            };

            let status = FileStatus::from_entry_flags(entry.status());
            cache.insert(workdir.join(rel_path), status);
        }

        Ok(cache)
    }

    fn insert(&mut self, path: PathBuf, status: FileStatus) {
        match status {
            FileStatus::Modified => self.modified += 1,
            FileStatus::Added => self.added += 1,
            FileStatus::Deleted => self.deleted += 1,
            _ => {}
        }
        self.statuses.insert(path, status);
    }

    /// Status for a tree path, defaulting to `Current` when absent
    pub fn status_for<P: AsRef<Path>>(&self, path: P) -> FileStatus {
        self.statuses
            .get(path.as_ref())
            .copied()
            .unwrap_or(FileStatus::Current)
    }

    /// Exact cache entry, `None` when the path was not in the listing
    pub fn get<P: AsRef<Path>>(&self, path: P) -> Option<FileStatus> {
        self.statuses.get(path.as_ref()).copied()
    }

    /// (modified, added, deleted) display counters
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.modified, self.added, self.deleted)
    }

    /// One-line human summary of the working-tree state
    pub fn summary(&self) -> String {
        if self.modified + self.added + self.deleted == 0 {
            "Clean - no changes".to_string()
        } else {
            format!(
                "Changes: {} modified, {} added, {} deleted",
                self.modified, self.added, self.deleted
            )
        }
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}
