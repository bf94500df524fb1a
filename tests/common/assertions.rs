//! Common assertion helpers for test output validation
//!
//! Predicates for validating kicad-lib-git command output, summary lines
//! and error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate for the no-repository informational message
pub fn no_repository() -> impl Predicate<str> {
    predicates::str::contains("No git repository in library path")
}

/// Creates a predicate for the clean-worktree summary line
pub fn clean_summary() -> impl Predicate<str> {
    predicates::str::contains("Clean - no changes")
}

/// Creates a predicate for the change-counter summary line
pub fn changes_summary(modified: usize, added: usize, deleted: usize) -> impl Predicate<str> {
    predicates::str::contains(format!(
        "Changes: {modified} modified, {added} added, {deleted} deleted"
    ))
}

/// Creates a predicate for the branch header of the status command
pub fn has_branch_header() -> impl Predicate<str> {
    predicates::str::contains("On branch")
}

/// Creates a predicate for the missing-library placeholder entry
pub fn missing_library_placeholder() -> impl Predicate<str> {
    predicates::str::contains("Library path not found")
}

/// Creates a predicate for a marker-prefixed status line of an entry
pub fn has_status_line(marker: char, name: &str) -> impl Predicate<str> {
    let escaped = name.replace('.', r"\.");
    predicates::str::is_match(format!(r"(?m)^\s*{marker}\s+.*{escaped}"))
        .expect("valid status line pattern")
}
