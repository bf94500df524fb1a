use crate::commands::open_engine;
use crate::core::{colored_marker, print_info, Result};
use colored::*;
use std::path::PathBuf;

/// Print branch information and the changed entries of the library
pub fn execute_status(path: Option<PathBuf>) -> Result<()> {
    let engine = open_engine(path)?;

    if !engine.has_repository() {
        print_info("No git repository in library path");
        return Ok(());
    }

    let (ahead, behind) = engine.ahead_behind();
    println!(
        "\nOn branch {}{}",
        engine.current_branch_name().cyan().bold(),
        format_ahead_behind(ahead, behind)
    );

    let changed: Vec<String> = engine
        .entries()
        .iter()
        .filter(|(_, status)| status.is_change())
        .map(|(node, status)| format!("  {} {}", colored_marker(*status), node.name))
        .collect();

    if !changed.is_empty() {
        println!();
        for line in &changed {
            println!("{line}");
        }
    }

    println!("\n{}\n", engine.summary());
    Ok(())
}

fn format_ahead_behind(ahead: usize, behind: usize) -> String {
    if ahead > 0 && behind > 0 {
        format!(
            " {}+{}/-{}{}",
            "(".bright_black(),
            ahead.to_string().white(),
            behind.to_string().white(),
            ")".bright_black()
        )
    } else if ahead > 0 {
        format!(
            " {}+{}{}",
            "(".bright_black(),
            ahead.to_string().white(),
            ")".bright_black()
        )
    } else if behind > 0 {
        format!(
            " {}-{}{}",
            "(".bright_black(),
            behind.to_string().white(),
            ")".bright_black()
        )
    } else {
        String::new()
    }
}
