//! Library tree index built from a filesystem walk.
//!
//! This module provides [`TreeIndex`], the mapping from absolute file path to
//! display-node identity that the status overlay is joined against. The index
//! is rebuilt wholesale by a full depth-first walk of the bound directory;
//! there is no incremental patching by design.
//!
//! # Public API
//! - [`TreeIndex`]: Path-to-node mapping with insertion-ordered nodes
//! - [`TreeNode`]: One display node (path, leaf name, depth, dir flag)
//! - [`should_show`]: Static allow-list classification for library files
//!
//! # Walk rules
//! - Directories are enumerated and recursed into before files at the same
//!   level; each group is sorted alphabetically
//! - Entries whose leaf name begins with `.` are skipped entirely, which is
//!   how the `.git` metadata directory is excluded without special-casing
//! - Files are kept only when [`should_show`] holds for their name

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Displayed node label when the bound path does not exist
pub const MISSING_ROOT_LABEL: &str = "Library path not found";

/// Library file suffixes shown in the tree (checked case-insensitively)
const SHOWN_SUFFIXES: &[&str] = &[
    ".kicad_sym", // symbols
    ".kicad_mod", // footprints
    ".kicad_dbl", // database library
    ".lib",       // legacy symbols
    ".dcm",       // legacy descriptions
    ".pretty",    // footprint library folder
    ".3dshapes",  // 3D model folder
    ".step",
    ".wrl",
    ".schlib", // Altium symbol library
    ".pcblib", // Altium footprint library
];

/// Documentation and meta filenames shown verbatim (lowercased)
const SHOWN_NAMES: &[&str] = &["readme.md", ".gitignore", "license"];

/// True iff `name` is a library/archival file or a documentation filename.
///
/// Pure classification: the lowercased name must end with one of the fixed
/// library suffixes or exactly match one of the fixed meta filenames.
pub fn should_show(name: &str) -> bool {
    let lower = name.to_lowercase();

    if SHOWN_SUFFIXES.iter().any(|ext| lower.ends_with(ext)) {
        return true;
    }

    SHOWN_NAMES.contains(&lower.as_str())
}

pub type NodeId = usize;

/// One display node in the library tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: NodeId,
    /// Absolute path, uniquely owned by this node
    pub path: PathBuf,
    /// Leaf name shown in the tree
    pub name: String,
    /// Nesting depth below the root (root children are depth 0)
    pub depth: usize,
    pub is_dir: bool,
}

/// Mapping from absolute path to display-node identity, valid until the next
/// rebuild.
pub struct TreeIndex {
    root: PathBuf,
    nodes: Vec<TreeNode>,
    by_path: HashMap<PathBuf, NodeId>,
    root_missing: bool,
}

impl TreeIndex {
    /// Build the index by a synchronous depth-first walk of `root`.
    ///
    /// A missing or non-directory root produces an index holding a single
    /// placeholder node; that is a displayable state, not an error.
    pub fn build<P: AsRef<Path>>(root: P) -> TreeIndex {
        let root = root.as_ref().to_path_buf();

        let mut index = TreeIndex {
            root: root.clone(),
            nodes: Vec::new(),
            by_path: HashMap::new(),
            root_missing: false,
        };

        if !root.is_dir() {
            index.root_missing = true;
            index.nodes.push(TreeNode {
                id: 0,
                path: root,
                name: MISSING_ROOT_LABEL.to_string(),
                depth: 0,
                is_dir: false,
            });
            return index;
        }

        index.walk(&root, 0);
        index
    }

    fn walk(&mut self, dir: &Path, depth: usize) {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => return, // unreadable directory, show nothing beneath it
        };

        let mut dirs: Vec<(String, PathBuf)> = Vec::new();
        let mut files: Vec<(String, PathBuf)> = Vec::new();

        for entry in entries.flatten() {
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(_) => continue,
            };

            // Hidden entries (and thereby .git) never enter the tree
            if name.starts_with('.') {
                continue;
            }

            let path = entry.path();
            if path.is_dir() {
                dirs.push((name, path));
            } else {
                files.push((name, path));
            }
        }

        dirs.sort_by(|a, b| a.0.cmp(&b.0));
        files.sort_by(|a, b| a.0.cmp(&b.0));

        for (name, path) in dirs {
            self.insert(path.clone(), name, depth, true);
            self.walk(&path, depth + 1);
        }

        for (name, path) in files {
            if should_show(&name) {
                self.insert(path, name, depth, false);
            }
        }
    }

    fn insert(&mut self, path: PathBuf, name: String, depth: usize, is_dir: bool) {
        let id = self.nodes.len();
        self.by_path.insert(path.clone(), id);
        self.nodes.push(TreeNode {
            id,
            path,
            name,
            depth,
            is_dir,
        });
    }

    /// Bound root path this index was built from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// True when the bound path did not exist at build time
    pub fn root_missing(&self) -> bool {
        self.root_missing
    }

    /// Nodes in insertion order (directories before files per level)
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Node identity for an absolute path
    pub fn get<P: AsRef<Path>>(&self, path: P) -> Option<NodeId> {
        self.by_path.get(path.as_ref()).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
