//! Output formatting utilities for consistent CLI presentation.
//!
//! Standardized message helpers plus the status color scheme used when
//! rendering the library tree: yellow for modified, green for added, red
//! for deleted and conflicted, muted for untracked.

use crate::core::file_status::FileStatus;
use colored::*;

/// Formats and prints an error message with consistent styling
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
pub fn print_success(message: &str) {
    println!("\n{} {}\n", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{} {}\n", "→".blue(), message.white());
}

/// Prints a section header in blue
pub fn print_section_header(title: &str) {
    println!("{}", title.blue());
}

/// Single-character status marker with the panel color scheme
pub fn colored_marker(status: FileStatus) -> ColoredString {
    match status {
        FileStatus::Modified => status.as_str().yellow(),
        FileStatus::Added => status.as_str().green(),
        FileStatus::Deleted => status.as_str().red(),
        FileStatus::Conflicted => status.as_str().red().bold(),
        FileStatus::Untracked => status.as_str().bright_black(),
        FileStatus::Current => status.as_str().normal(),
    }
}

/// Entry name colored by kind and status: directories in blue, changed
/// files in the marker color, clean files uncolored
pub fn colored_name(name: &str, status: FileStatus, is_dir: bool) -> ColoredString {
    if is_dir {
        return name.blue().bold();
    }

    match status {
        FileStatus::Modified => name.yellow(),
        FileStatus::Added => name.green(),
        FileStatus::Deleted => name.red(),
        FileStatus::Conflicted => name.red().bold(),
        FileStatus::Untracked => name.bright_black(),
        FileStatus::Current => name.normal(),
    }
}
