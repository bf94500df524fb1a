//! Git repository management and setup utilities
//!
//! Functions for creating test library directories and repositories in
//! various states, including bare remotes for pull/push scenarios.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test repository setup result containing both the temporary directory
/// and the library path. The TempDir must be kept alive for the duration
/// of the test to prevent cleanup.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Get the library path as a reference
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn git(repo_path: &Path, args: &[&str]) -> anyhow::Result<()> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;
    anyhow::ensure!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(())
}

/// Runs a git command in the repository, failing the test on a non-zero exit
pub fn run_git(repo_path: &Path, args: &[&str]) -> anyhow::Result<()> {
    git(repo_path, args)
}

/// Captured stdout of a git command, for branch names and commit hashes
pub fn git_stdout(repo_path: &Path, args: &[&str]) -> anyhow::Result<String> {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Creates a temporary library directory without any git repository
pub fn setup_library_dir() -> anyhow::Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().to_path_buf();
    Ok(TestRepo { temp_dir, path })
}

/// Sets up a fresh git repository for testing
///
/// Creates a temporary directory, initializes it as a git repository,
/// and sets up basic git configuration to avoid user prompts.
pub fn setup_test_repo() -> anyhow::Result<TestRepo> {
    let repo = setup_library_dir()?;

    git(&repo.path, &["init"])?;
    git(&repo.path, &["config", "user.name", "Test User"])?;
    git(&repo.path, &["config", "user.email", "test@example.com"])?;

    Ok(repo)
}

/// Sets up a git repository with an initial committed symbol library
pub fn setup_test_repo_with_initial_commit() -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "parts.kicad_sym", "(kicad_symbol_lib)\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial library")?;

    Ok(repo)
}

/// Sets up a working repository tracking a local bare remote named origin.
///
/// Returns the working repository and the bare remote directory; both
/// temporary directories must stay alive for the duration of the test.
pub fn setup_repo_with_remote() -> anyhow::Result<(TestRepo, TestRepo)> {
    let repo = setup_test_repo_with_initial_commit()?;

    let remote = setup_library_dir()?;
    git(&remote.path, &["init", "--bare"])?;

    git(
        &repo.path,
        &["remote", "add", "origin", &remote.path.to_string_lossy()],
    )?;
    let branch = git_stdout(&repo.path, &["rev-parse", "--abbrev-ref", "HEAD"])?;
    git(&repo.path, &["push", "-u", "origin", &branch])?;

    Ok((repo, remote))
}

/// Clones the bare remote into a second working repository
pub fn clone_from_remote(remote: &TestRepo) -> anyhow::Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("clone");

    let output = std::process::Command::new("git")
        .args(["clone", &remote.path.to_string_lossy(), "clone"])
        .current_dir(temp_dir.path())
        .output()?;
    anyhow::ensure!(
        output.status.success(),
        "git clone failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    git(&path, &["config", "user.name", "Test User"])?;
    git(&path, &["config", "user.email", "test@example.com"])?;

    Ok(TestRepo { temp_dir, path })
}

/// Creates a file with specified content in the library
pub fn create_file(repo_path: &Path, filename: &str, content: &str) -> anyhow::Result<()> {
    if let Some(parent) = repo_path.join(filename).parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(repo_path.join(filename), content)?;
    Ok(())
}

/// Removes a file from the filesystem (not from git)
pub fn remove_file(repo_path: &Path, filename: &str) -> anyhow::Result<()> {
    fs::remove_file(repo_path.join(filename))?;
    Ok(())
}

/// Adds a file to the git index (or "." for all files)
pub fn git_add(repo_path: &Path, filename: &str) -> anyhow::Result<()> {
    git(repo_path, &["add", filename])
}

/// Creates a git commit with the specified message
pub fn git_commit(repo_path: &Path, message: &str) -> anyhow::Result<()> {
    git(repo_path, &["commit", "-m", message])
}
