//! The sync engine: status reconciliation, refresh scheduling and mutual
//! exclusion around the repository handle.
//!
//! [`SyncEngine`] owns the [`RepoHandle`], the [`TreeIndex`] and the
//! [`StatusCache`], and joins the last two by path equality to produce the
//! per-node status assignments the presentation layer paints. It drives two
//! one-shot timers through an injected [`Scheduler`]: a short-delay status
//! reconciliation and a self-perpetuating long-delay background fetch.
//!
//! # Concurrency discipline
//! A single non-reentrant lock guards the repository handle and the status
//! cache. Every refresh path acquires it with a non-blocking attempt and
//! abandons the cycle on contention: the status timer reschedules itself,
//! a fetch-triggered reconciliation skips silently. The cache is replaced
//! wholesale under the lock, so the read side never observes a partially
//! written mapping.
//!
//! # Cancellation
//! Unbinding or rebinding cancels both timers before releasing the handle
//! and bumps a generation counter; a fetch completing against a stale
//! generation discards its result instead of writing into torn-down state.

use crate::core::{
    config::PanelConfig,
    error::{LibGitError, Result},
    file_status::FileStatus,
    remote::{CommitFlow, CommitOutcome, RemoteOps},
    repo::RepoHandle,
    scheduler::{Scheduler, TimerId},
    status_cache::StatusCache,
    tree::{TreeIndex, TreeNode},
};
use chrono::{DateTime, Utc};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Neutral summary when no path is bound
const SUMMARY_NO_LIBRARY: &str = "No library configured";
/// Neutral summary when the bound path holds no repository
const SUMMARY_NO_REPO: &str = "No git repository in library path";

/// Result of one reconciliation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The pass ran and the cache was replaced (or left as-is on a
    /// status-query failure)
    Completed,
    /// The lock was contended or no repository is bound; nothing changed
    Skipped,
}

/// Background-sync engine for one bound library path.
///
/// Single-threaded by design: all methods run on the host's interactive
/// worker, and long-running network operations are delegated to the injected
/// [`RemoteOps`] collaborator.
pub struct SyncEngine {
    config: PanelConfig,
    scheduler: Box<dyn Scheduler>,
    remote_ops: Box<dyn RemoteOps>,
    library_path: Option<PathBuf>,
    handle: RepoHandle,
    tree: Option<TreeIndex>,
    status: StatusCache,
    status_lock: Arc<Mutex<()>>,
    generation: u64,
    summary: String,
    last_fetch: Option<DateTime<Utc>>,
}

impl SyncEngine {
    pub fn new(
        config: PanelConfig,
        scheduler: Box<dyn Scheduler>,
        remote_ops: Box<dyn RemoteOps>,
    ) -> Self {
        SyncEngine {
            config,
            scheduler,
            remote_ops,
            library_path: None,
            handle: RepoHandle::new(),
            tree: None,
            status: StatusCache::empty(),
            status_lock: Arc::new(Mutex::new(())),
            generation: 0,
            summary: SUMMARY_NO_LIBRARY.to_string(),
            last_fetch: None,
        }
    }

    // === Binding ===

    /// Bind the engine to a library directory.
    ///
    /// No-op when the path is already bound. Otherwise performs a full
    /// reset: timers cancelled, previous handle released, caches cleared,
    /// then the repository (if any) is opened, the tree rebuilt and the
    /// timers armed.
    pub fn set_library_path<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref().to_path_buf();
        if self.library_path.as_deref() == Some(path.as_path()) {
            return;
        }

        self.library_path = Some(path);
        self.init_repo();
        self.rebuild_tree();
    }

    /// Clear the bound path, releasing the handle and stopping all timers
    pub fn clear_library_path(&mut self) {
        if self.library_path.is_none() {
            return;
        }

        self.library_path = None;
        self.init_repo();
        self.tree = None;
    }

    fn init_repo(&mut self) {
        // Timers must stop deterministically before the handle is released
        self.scheduler.cancel(TimerId::Status);
        self.scheduler.cancel(TimerId::Sync);

        self.handle.unbind();
        self.generation += 1;
        self.status = StatusCache::empty();

        let path = match &self.library_path {
            Some(path) => path.clone(),
            None => {
                self.summary = SUMMARY_NO_LIBRARY.to_string();
                return;
            }
        };

        if !self.handle.bind(&path) {
            self.summary = SUMMARY_NO_REPO.to_string();
            return;
        }

        if let Err(e) = self.handle.update_branch_info(&self.config.remote_name) {
            debug!("Branch info unavailable for {}: {e}", path.display());
        }

        self.summary = format!("Repository: {}", path.display());
        self.scheduler.arm(TimerId::Status, self.config.status_delay());
        self.scheduler.arm(TimerId::Sync, self.config.fetch_interval());

        info!("Initialized git repo for library: {}", path.display());
    }

    /// Rebuild the tree index from a fresh filesystem walk and re-arm the
    /// short-delay status refresh
    pub fn rebuild_tree(&mut self) {
        self.tree = self.library_path.as_ref().map(TreeIndex::build);

        if self.handle.is_bound() {
            self.scheduler.arm(TimerId::Status, self.config.status_delay());
        }
    }

    // === Reconciliation ===

    /// Recompute the status cache under the status lock.
    ///
    /// On contention the cycle is abandoned and [`RefreshOutcome::Skipped`]
    /// is returned; the caller decides whether to reschedule. A failing
    /// status query leaves the previous cache untouched.
    fn reconcile_status(&mut self) -> RefreshOutcome {
        if !self.handle.is_bound() {
            return RefreshOutcome::Skipped;
        }

        let lock = Arc::clone(&self.status_lock);
        let guard = match lock.try_lock() {
            Ok(guard) => guard,
            Err(_) => return RefreshOutcome::Skipped,
        };

        match StatusCache::refresh(&self.handle) {
            Ok(cache) => {
                // Wholesale replacement: the read side never sees a partial cache
                self.status = cache;
                self.summary = self.status.summary();
            }
            Err(e) => {
                debug!("Failed to get status: {e}");
            }
        }

        drop(guard);
        RefreshOutcome::Completed
    }

    fn do_fetch(&mut self) {
        let lock = Arc::clone(&self.status_lock);
        let guard = match lock.try_lock() {
            Ok(guard) => guard,
            Err(_) => return, // another cycle owns the repo, skip this one
        };

        let generation = self.generation;
        let result = match self.handle.repo() {
            Some(repo) => self.remote_ops.fetch(repo, &self.config.remote_name),
            None => return,
        };

        // A rebind while the fetch was in flight invalidates the result
        if self.generation != generation {
            debug!("Discarding fetch result for stale repository handle");
            return;
        }

        match result {
            Ok(()) => self.last_fetch = Some(Utc::now()),
            Err(message) => debug!("Library fetch failed: {message}"),
        }

        drop(guard);
    }

    // === Timer callbacks ===

    /// Short-delay status timer: reconcile only, no network.
    /// Contention re-arms the timer for another attempt.
    pub fn on_status_timer(&mut self) {
        if !self.handle.is_bound() {
            return;
        }

        match self.reconcile_status() {
            RefreshOutcome::Completed => {
                if let Err(e) = self.handle.update_branch_info(&self.config.remote_name) {
                    debug!("Branch info refresh failed: {e}");
                }
            }
            RefreshOutcome::Skipped => {
                self.scheduler.arm(TimerId::Status, self.config.status_delay());
            }
        }
    }

    /// Long-delay sync timer: fetch, reconcile, then re-arm the same timer.
    /// Re-arming happens only after the cycle's work completes.
    pub fn on_sync_timer(&mut self) {
        if !self.handle.is_bound() {
            return;
        }

        self.do_fetch();
        self.reconcile_status();
        self.scheduler.arm(TimerId::Sync, self.config.fetch_interval());
    }

    /// Host polling entry point: dispatch every timer that is due at `now`
    /// to its engine callback and report which ones fired
    pub fn poll_timers(&mut self, now: std::time::Instant) -> Vec<TimerId> {
        let fired = self.scheduler.due(now);
        for id in &fired {
            match id {
                TimerId::Status => self.on_status_timer(),
                TimerId::Sync => self.on_sync_timer(),
            }
        }
        fired
    }

    /// Earliest pending timer deadline, for host sleep calculations
    pub fn next_deadline(&self) -> Option<std::time::Instant> {
        self.scheduler.next_deadline()
    }

    // === Commands ===

    /// Manual refresh: immediate fetch attempt, branch info update, tree
    /// rebuild and reconciliation. Leaves the background fetch schedule
    /// untouched.
    pub fn refresh(&mut self) {
        if self.handle.is_bound() {
            self.do_fetch();
            if let Err(e) = self.handle.update_branch_info(&self.config.remote_name) {
                debug!("Branch info refresh failed: {e}");
            }
        }

        self.rebuild_tree();
        self.reconcile_status();
    }

    /// Pull from the remote. Failure surfaces one message and leaves the
    /// tree untouched; success rebuilds tree and status.
    pub fn pull(&mut self) -> Result<()> {
        let repo = self.handle.repo().ok_or(LibGitError::NoRepository)?;

        self.remote_ops
            .pull(repo, &self.config.remote_name)
            .map_err(LibGitError::pull_failed)?;

        self.rebuild_tree();
        self.reconcile_status();
        self.summary = "Pull completed successfully".to_string();
        Ok(())
    }

    /// Push local commits. Short-circuits to an informational state when
    /// nothing is ahead of the remote; otherwise status is reconciled after
    /// the attempt regardless of outcome.
    pub fn push(&mut self) -> Result<()> {
        if !self.handle.is_bound() {
            return Err(LibGitError::NoRepository);
        }

        if let Err(e) = self.handle.update_branch_info(&self.config.remote_name) {
            debug!("Branch info refresh failed: {e}");
        }

        if !self.handle.has_local_commits() {
            self.summary = "Nothing to push - no local commits ahead of remote".to_string();
            return Ok(());
        }

        let result = match self.handle.repo() {
            Some(repo) => self
                .remote_ops
                .push(repo, &self.config.remote_name)
                .map_err(LibGitError::push_failed),
            None => Err(LibGitError::NoRepository),
        };

        self.reconcile_status();
        self.scheduler.arm(TimerId::Status, self.config.status_delay());

        result?;
        self.summary = "Push completed successfully".to_string();
        Ok(())
    }

    /// Run the interactive commit collaborator. Confirmation reconciles
    /// status and branch display; cancellation changes nothing.
    pub fn commit(&mut self, flow: &dyn CommitFlow) -> Result<CommitOutcome> {
        let repo = self.handle.repo().ok_or(LibGitError::NoRepository)?;

        let outcome = flow.run(repo).map_err(LibGitError::commit_failed)?;

        if outcome == CommitOutcome::Committed {
            self.reconcile_status();
            self.scheduler.arm(TimerId::Status, self.config.status_delay());
            if let Err(e) = self.handle.update_branch_info(&self.config.remote_name) {
                debug!("Branch info refresh failed: {e}");
            }
            self.summary = "Changes committed".to_string();
        }

        Ok(outcome)
    }

    // === Queries ===

    pub fn library_path(&self) -> Option<&Path> {
        self.library_path.as_deref()
    }

    pub fn has_repository(&self) -> bool {
        self.handle.is_bound()
    }

    pub fn current_branch_name(&self) -> &str {
        self.handle.branch_name()
    }

    /// (ahead, behind) commit counts relative to upstream
    pub fn ahead_behind(&self) -> (usize, usize) {
        self.handle.ahead_behind()
    }

    /// One-line status summary for the panel footer
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Timestamp of the last successful background or manual fetch
    pub fn last_fetch(&self) -> Option<DateTime<Utc>> {
        self.last_fetch
    }

    /// (modified, added, deleted) counters from the current cache
    pub fn status_counts(&self) -> (usize, usize, usize) {
        self.status.counts()
    }

    pub fn tree(&self) -> Option<&TreeIndex> {
        self.tree.as_ref()
    }

    /// Read-only joined view of tree index and status cache: every tree
    /// node with its status, defaulting to `Current` when the cache has no
    /// entry for the path
    pub fn entries(&self) -> Vec<(&TreeNode, FileStatus)> {
        match &self.tree {
            Some(tree) => tree
                .nodes()
                .iter()
                .map(|node| (node, self.status.status_for(&node.path)))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn scheduler(&self) -> &dyn Scheduler {
        self.scheduler.as_ref()
    }

    #[cfg(test)]
    fn status_lock_handle(&self) -> Arc<Mutex<()>> {
        Arc::clone(&self.status_lock)
    }

    #[cfg(test)]
    fn generation(&self) -> u64 {
        self.generation
    }
}
