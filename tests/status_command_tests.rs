use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;
use common::{assertions, fixtures::*, repository::*};

#[cfg(test)]
mod status_command_tests {
    use super::*;

    #[test]
    fn test_status_on_clean_repository() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        let mut cmd = Command::cargo_bin("kicad-lib-git")?;
        cmd.arg("status")
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(assertions::has_branch_header())
            .stdout(assertions::clean_summary());

        Ok(())
    }

    #[test]
    fn test_status_shows_modified_and_added_entries() -> anyhow::Result<()> {
        let repo = create_changed_library_repo()?;

        let mut cmd = Command::cargo_bin("kicad-lib-git")?;
        cmd.arg("status")
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(assertions::has_status_line('M', "pin_header.kicad_mod"))
            .stdout(assertions::has_status_line('A', "new_part.kicad_sym"))
            .stdout(assertions::changes_summary(1, 1, 0))
            .stdout(predicate::str::contains("parts.kicad_sym").not());

        Ok(())
    }

    #[test]
    fn test_status_shows_deleted_entries_in_summary() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        remove_file(&repo.path, "parts.kicad_sym")?;

        let mut cmd = Command::cargo_bin("kicad-lib-git")?;
        cmd.arg("status")
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(assertions::changes_summary(0, 0, 1));

        Ok(())
    }

    #[test]
    fn test_status_without_repository_is_informational() -> anyhow::Result<()> {
        let repo = setup_library_dir()?;

        let mut cmd = Command::cargo_bin("kicad-lib-git")?;
        cmd.arg("status")
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(assertions::no_repository());

        Ok(())
    }
}
