use crate::commands::open_engine;
use crate::core::{colored_marker, colored_name, FileStatus, Result, TreeNode};
use std::path::PathBuf;

/// Print the library tree with per-entry status markers and the change
/// summary footer
pub fn execute_tree(path: Option<PathBuf>) -> Result<()> {
    let engine = open_engine(path)?;

    println!();
    for (node, status) in engine.entries() {
        println!("{}", render_entry(node, status));
    }

    println!("\n{}\n", engine.summary());
    Ok(())
}

/// One tree line: marker column, depth indentation, colored entry name
fn render_entry(node: &TreeNode, status: FileStatus) -> String {
    let indent = "  ".repeat(node.depth);
    format!(
        "{} {}{}",
        colored_marker(status),
        indent,
        colored_name(&node.name, status, node.is_dir)
    )
}
