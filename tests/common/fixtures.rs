//! Test data generation utilities and predefined scenarios
//!
//! Functions for creating library repositories with specific file states
//! to exercise the status overlay consistently.

#![allow(dead_code)]

use super::repository::*;

/// Scenario: Committed library with one modification and one new symbol.
///
/// Layout after setup:
/// - `connectors.pretty/pin_header.kicad_mod` (committed, then modified)
/// - `parts.kicad_sym` (committed, clean)
/// - `new_part.kicad_sym` (untracked)
pub fn create_changed_library_repo() -> anyhow::Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(
        &repo.path,
        "connectors.pretty/pin_header.kicad_mod",
        "(footprint pin_header)\n",
    )?;
    create_file(&repo.path, "parts.kicad_sym", "(kicad_symbol_lib)\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial library")?;

    create_file(
        &repo.path,
        "connectors.pretty/pin_header.kicad_mod",
        "(footprint pin_header v2)\n",
    )?;
    create_file(&repo.path, "new_part.kicad_sym", "(kicad_symbol_lib new)\n")?;

    Ok(repo)
}

/// Scenario: Library mixing shown and filtered entries.
///
/// Shown: `symbols/` directory, `cap.kicad_sym`, `README.md`.
/// Filtered out of the tree: `build.log`, `.hidden/` and its contents.
pub fn create_mixed_content_library() -> anyhow::Result<TestRepo> {
    let repo = setup_library_dir()?;

    create_file(&repo.path, "symbols/cap.kicad_sym", "(kicad_symbol_lib)\n")?;
    create_file(&repo.path, "README.md", "Component library\n")?;
    create_file(&repo.path, "build.log", "log output\n")?;
    create_file(&repo.path, ".hidden/secret.kicad_sym", "(kicad_symbol_lib)\n")?;

    Ok(repo)
}
