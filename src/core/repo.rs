//! Repository handle lifecycle and branch metadata.
//!
//! This module provides [`RepoHandle`], the single owned connection to the
//! on-disk git repository backing a bound library path. At most one handle is
//! open per panel instance; rebinding always releases the previous repository
//! before opening the new one, and `git2::Repository` guarantees the
//! underlying libgit2 handle is freed on every exit path.
//!
//! # Public API
//! - [`RepoHandle`]: Bind/unbind lifecycle plus cached branch queries
//!
//! # Key Features
//! - **Non-fatal bind**: A path without a repository leaves the handle
//!   unbound and is reported as `false`, never as an error
//! - **Cached branch info**: Branch name, ahead/behind counts and remote
//!   presence are refreshed explicitly so queries stay pure

use crate::core::error::Result;
use git2::Repository;
use log::debug;
use std::path::{Path, PathBuf};

/// Owned handle to the library's git repository, absent when no repository
/// is bound.
pub struct RepoHandle {
    repo: Option<Repository>,
    branch_name: String,
    ahead: usize,
    behind: usize,
    has_remote: bool,
}

impl RepoHandle {
    /// Create an unbound handle
    pub fn new() -> Self {
        RepoHandle {
            repo: None,
            branch_name: String::new(),
            ahead: 0,
            behind: 0,
            has_remote: false,
        }
    }

    /// Attempt to open a repository at `path`.
    ///
    /// Returns `true` on success. On failure (no repository, permission
    /// error, corrupt metadata) the handle is left unbound and `false` is
    /// returned; callers show a neutral "no repository" state instead of an
    /// error dialog. Any previously bound repository is released first.
    pub fn bind<P: AsRef<Path>>(&mut self, path: P) -> bool {
        self.unbind();

        match Repository::open(path.as_ref()) {
            Ok(repo) => {
                self.repo = Some(repo);
                true
            }
            Err(e) => {
                debug!("No git repo at {}: {}", path.as_ref().display(), e);
                false
            }
        }
    }

    /// Release the open repository. Idempotent; safe on an unbound handle.
    pub fn unbind(&mut self) {
        self.repo = None;
        self.branch_name.clear();
        self.ahead = 0;
        self.behind = 0;
        self.has_remote = false;
    }

    pub fn is_bound(&self) -> bool {
        self.repo.is_some()
    }

    /// Access the open repository for status queries and remote operations
    pub fn repo(&self) -> Option<&Repository> {
        self.repo.as_ref()
    }

    /// Root of the checked-out file tree, `None` when unbound or bare
    pub fn workdir(&self) -> Option<PathBuf> {
        self.repo
            .as_ref()
            .and_then(|r| r.workdir())
            .map(Path::to_path_buf)
    }

    /// Refresh cached branch name, ahead/behind counts and remote presence.
    ///
    /// No-op on an unbound handle. Missing upstream or unborn HEAD degrade
    /// to empty values rather than errors.
    pub fn update_branch_info(&mut self, remote_name: &str) -> Result<()> {
        let repo = match &self.repo {
            Some(repo) => repo,
            None => return Ok(()),
        };

        self.branch_name = current_branch_name(repo);
        self.has_remote = repo.find_remote(remote_name).is_ok();

        let (ahead, behind) = ahead_behind(repo).unwrap_or((0, 0));
        self.ahead = ahead;
        self.behind = behind;

        Ok(())
    }

    /// Cached branch name; empty when unbound
    pub fn branch_name(&self) -> &str {
        &self.branch_name
    }

    /// Cached (ahead, behind) commit counts relative to upstream
    pub fn ahead_behind(&self) -> (usize, usize) {
        (self.ahead, self.behind)
    }

    /// True when the local branch has commits the remote lacks
    pub fn has_local_commits(&self) -> bool {
        self.ahead > 0
    }

    /// True when a fetch/push remote is configured
    pub fn has_push_pull_remote(&self) -> bool {
        self.has_remote
    }
}

impl Default for RepoHandle {
    fn default() -> Self {
        Self::new()
    }
}

fn current_branch_name(repo: &Repository) -> String {
    let head = match repo.head() {
        Ok(head) => head,
        Err(_) => return String::new(), // unborn HEAD
    };

    if head.is_branch() {
        head.shorthand().unwrap_or("").to_string()
    } else if let Some(oid) = head.target() {
        format!("detached at {}", &oid.to_string()[..7])
    } else {
        String::new()
    }
}

/// Ahead/behind counts for HEAD relative to its upstream, `None` when no
/// upstream is configured or the repository has no commits yet
fn ahead_behind(repo: &Repository) -> Option<(usize, usize)> {
    let head = repo.head().ok()?;
    let local_oid = head.target()?;
    let branch_name = head.shorthand()?;

    let local_branch = repo.find_branch(branch_name, git2::BranchType::Local).ok()?;
    let upstream = local_branch.upstream().ok()?;
    let upstream_oid = upstream.get().target()?;

    repo.graph_ahead_behind(local_oid, upstream_oid).ok()
}
