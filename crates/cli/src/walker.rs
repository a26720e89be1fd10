// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! reStructuredText file discovery.
//!
//! Uses the `ignore` crate so discovery respects `.gitignore` and skips
//! hidden files. Each check scope builds its file set fresh; ordering is
//! sorted so invocations are deterministic.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

/// Directories to skip entirely during walking.
/// Skipping at the walker level prevents any I/O on these subtrees.
pub(crate) const SKIP_DIRECTORIES: &[&str] = &[".git", "node_modules"];

/// How deep a discovery scope reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeDepth {
    /// Files directly under the scope root only.
    TopLevel,
    /// The whole subtree.
    Recursive,
}

/// Collect existing `.rst` files under `dir`, sorted by path.
///
/// A `dir` that does not exist on disk yields an empty list; the checker
/// invocation still runs with zero file arguments.
pub fn rst_files(dir: &Path, depth: ScopeDepth) -> Vec<PathBuf> {
    let max_depth = match depth {
        ScopeDepth::TopLevel => Some(1),
        ScopeDepth::Recursive => None,
    };

    let walker = WalkBuilder::new(dir)
        .max_depth(max_depth)
        .filter_entry(|entry| {
            let skip = entry.file_type().is_some_and(|t| t.is_dir())
                && entry
                    .file_name()
                    .to_str()
                    .is_some_and(|name| SKIP_DIRECTORIES.contains(&name));
            !skip
        })
        .build();

    let mut files: Vec<PathBuf> = walker
        .filter_map(|entry| {
            let entry = entry.ok()?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                return None;
            }
            let path = entry.into_path();
            if path.extension().is_some_and(|ext| ext == "rst") {
                Some(path)
            } else {
                None
            }
        })
        .collect();

    files.sort();
    files
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
