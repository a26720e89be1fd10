//! Check scope planning.
//!
//! A run always covers the project root (top-level only), the docs subtree,
//! and one scope per configured lab, in that order. One checker invocation
//! per scope: N labs means N+2 invocations.

use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::walker::ScopeDepth;

/// One discovery/check pass.
#[derive(Debug)]
pub struct Scope {
    /// Display label (e.g., "root", "docs", "lab lab_1").
    pub label: String,
    /// Directory the file set is collected from.
    pub dir: PathBuf,
    /// Top-level-only or recursive collection.
    pub depth: ScopeDepth,
}

/// Build the ordered scope list for a run.
pub fn plan_scopes(root: &Path, project: &ProjectConfig, include_addons: bool) -> Vec<Scope> {
    let mut scopes = vec![
        Scope {
            label: "root".to_string(),
            dir: root.to_path_buf(),
            depth: ScopeDepth::TopLevel,
        },
        Scope {
            label: project.docs_dir.clone(),
            dir: root.join(&project.docs_dir),
            depth: ScopeDepth::Recursive,
        },
    ];

    for lab in project.labs_paths(include_addons) {
        scopes.push(Scope {
            label: format!("lab {}", lab),
            dir: root.join(lab),
            depth: ScopeDepth::Recursive,
        });
    }

    scopes
}

#[cfg(test)]
#[path = "scope_tests.rs"]
mod tests;
