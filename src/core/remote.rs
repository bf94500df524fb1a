//! Remote protocol collaborators: fetch, pull, push and the commit flow.
//!
//! The sync engine never talks to the network itself; it delegates to a
//! [`RemoteOps`] implementation. The stock [`GitRemoteOps`] drives git2 with
//! a credentials chain built from the panel configuration (SSH key, then SSH
//! agent, then username/token, then the git credential helper). Tests inject
//! recording fakes instead.
//!
//! All methods return `Err(String)` carrying exactly one human-readable
//! message; the engine decides whether that message is logged (fetch) or
//! surfaced to the user (pull/push).

use crate::core::config::PanelConfig;
use git2::build::CheckoutBuilder;
use git2::{Cred, FetchOptions, PushOptions, RemoteCallbacks, Repository, StatusOptions};
use log::debug;
use std::cell::RefCell;

/// Result of the interactive commit collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    Cancelled,
}

/// Network operations against the library's remote
pub trait RemoteOps {
    /// Fetch the remote's default refspecs
    fn fetch(&self, repo: &Repository, remote_name: &str) -> Result<(), String>;

    /// Fetch and fast-forward the current branch; refuses non-fast-forward
    /// merges and dirty worktrees
    fn pull(&self, repo: &Repository, remote_name: &str) -> Result<(), String>;

    /// Push the current branch to the remote
    fn push(&self, repo: &Repository, remote_name: &str) -> Result<(), String>;
}

/// Commit collaborator: stages and commits, or reports cancellation
pub trait CommitFlow {
    fn run(&self, repo: &Repository) -> Result<CommitOutcome, String>;
}

/// git2-backed remote operations using panel-config credentials
pub struct GitRemoteOps {
    config: PanelConfig,
}

impl GitRemoteOps {
    pub fn new(config: PanelConfig) -> Self {
        Self { config }
    }

    fn callbacks<'a>(&self, repo: &Repository) -> RemoteCallbacks<'a> {
        let git_config = repo.config().ok();
        let ssh_key = self.config.ssh_key_path.clone();
        let username = self.config.username.clone();
        let token = self.config.token.clone();

        let mut callbacks = RemoteCallbacks::new();
        callbacks.credentials(move |url, username_from_url, allowed| {
            if allowed.is_ssh_key() {
                if let Some(key) = &ssh_key {
                    return Cred::ssh_key(username_from_url.unwrap_or("git"), None, key, None);
                }
                if let Some(user) = username_from_url {
                    if let Ok(cred) = Cred::ssh_key_from_agent(user) {
                        return Ok(cred);
                    }
                }
            }
            if allowed.is_user_pass_plaintext() {
                if let (Some(user), Some(token)) = (&username, &token) {
                    return Cred::userpass_plaintext(user, token);
                }
                if let Some(cfg) = &git_config {
                    if let Ok(cred) = Cred::credential_helper(cfg, url, username_from_url) {
                        return Ok(cred);
                    }
                }
            }
            Cred::default()
        });

        callbacks
    }
}

impl RemoteOps for GitRemoteOps {
    fn fetch(&self, repo: &Repository, remote_name: &str) -> Result<(), String> {
        let mut remote = repo
            .find_remote(remote_name)
            .map_err(|e| format!("No remote '{remote_name}': {}", e.message()))?;

        let mut opts = FetchOptions::new();
        opts.remote_callbacks(self.callbacks(repo));

        remote
            .fetch(&[] as &[&str], Some(&mut opts), Some("library auto-fetch"))
            .map_err(|e| e.message().to_string())?;

        debug!("Library fetch from '{remote_name}' OK");
        Ok(())
    }

    fn pull(&self, repo: &Repository, remote_name: &str) -> Result<(), String> {
        if worktree_has_changes(repo)? {
            return Err(
                "The library has uncommitted changes. Commit them before pulling.".to_string(),
            );
        }

        self.fetch(repo, remote_name)?;

        let fetch_head = repo
            .find_reference("FETCH_HEAD")
            .map_err(|e| e.message().to_string())?;
        let fetch_commit = repo
            .reference_to_annotated_commit(&fetch_head)
            .map_err(|e| e.message().to_string())?;

        let (analysis, _) = repo
            .merge_analysis(&[&fetch_commit])
            .map_err(|e| e.message().to_string())?;

        if analysis.is_up_to_date() {
            return Ok(());
        }

        if !analysis.is_fast_forward() {
            return Err(
                "Remote history has diverged; resolve the merge manually and commit.".to_string(),
            );
        }

        let head = repo.head().map_err(|e| e.message().to_string())?;
        let branch = head
            .shorthand()
            .ok_or_else(|| "Cannot pull with a detached HEAD".to_string())?;
        let refname = format!("refs/heads/{branch}");

        let mut reference = repo
            .find_reference(&refname)
            .map_err(|e| e.message().to_string())?;
        reference
            .set_target(fetch_commit.id(), "fast-forward pull")
            .map_err(|e| e.message().to_string())?;
        repo.set_head(&refname).map_err(|e| e.message().to_string())?;
        repo.checkout_head(Some(CheckoutBuilder::default().force()))
            .map_err(|e| e.message().to_string())?;

        Ok(())
    }

    fn push(&self, repo: &Repository, remote_name: &str) -> Result<(), String> {
        let head = repo.head().map_err(|e| e.message().to_string())?;
        if !head.is_branch() {
            return Err("Cannot push with a detached HEAD".to_string());
        }
        let branch = head
            .shorthand()
            .ok_or_else(|| "Cannot determine the current branch".to_string())?;
        let refspec = format!("refs/heads/{branch}:refs/heads/{branch}");

        let mut remote = repo
            .find_remote(remote_name)
            .map_err(|e| format!("No remote '{remote_name}': {}", e.message()))?;

        let rejection: RefCell<Option<String>> = RefCell::new(None);
        {
            let mut callbacks = self.callbacks(repo);
            callbacks.push_update_reference(|_refname, status| {
                if let Some(message) = status {
                    *rejection.borrow_mut() = Some(message.to_string());
                }
                Ok(())
            });

            let mut opts = PushOptions::new();
            opts.remote_callbacks(callbacks);

            remote
                .push(&[refspec], Some(&mut opts))
                .map_err(|e| e.message().to_string())?;
        }

        match rejection.into_inner() {
            Some(message) => Err(message),
            None => Ok(()),
        }
    }
}

/// True when the index or worktree carries staged or modified entries
/// (untracked files alone do not block a pull)
fn worktree_has_changes(repo: &Repository) -> Result<bool, String> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(false).include_ignored(false);

    let statuses = repo
        .statuses(Some(&mut opts))
        .map_err(|e| e.message().to_string())?;

    Ok(!statuses.is_empty())
}

/// Stage-everything commit flow matching the panel's commit dialog: all
/// changes are staged and committed with one message.
pub struct StageAllCommitFlow {
    message: String,
}

impl StageAllCommitFlow {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl CommitFlow for StageAllCommitFlow {
    fn run(&self, repo: &Repository) -> Result<CommitOutcome, String> {
        if self.message.trim().is_empty() {
            return Ok(CommitOutcome::Cancelled);
        }

        let mut index = repo.index().map_err(|e| e.message().to_string())?;
        index
            .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
            .map_err(|e| e.message().to_string())?;
        index.write().map_err(|e| e.message().to_string())?;

        let tree_id = index.write_tree().map_err(|e| e.message().to_string())?;
        let tree = repo.find_tree(tree_id).map_err(|e| e.message().to_string())?;

        let parent = match repo.head() {
            Ok(head) => {
                let commit = head
                    .peel_to_commit()
                    .map_err(|e| e.message().to_string())?;
                // Nothing staged relative to HEAD means nothing to commit
                if commit.tree_id() == tree_id {
                    return Ok(CommitOutcome::Cancelled);
                }
                Some(commit)
            }
            Err(_) => None, // unborn branch, first commit
        };

        let signature = repo.signature().map_err(|e| e.message().to_string())?;
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            self.message.trim(),
            &tree,
            &parents,
        )
        .map_err(|e| e.message().to_string())?;

        Ok(CommitOutcome::Committed)
    }
}
