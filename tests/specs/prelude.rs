//! Test helpers for behavioral specifications.
//!
//! Provides a temp-project builder and a stub interpreter that records
//! every argv it receives, so specs can count checker invocations and
//! inspect the constructed argument lists without a real doc8 install.

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command configured to run the docsweep binary
pub fn docsweep_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("docsweep"))
}

/// Temporary test project directory with helper methods.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Create an empty project with only a `.git` marker (stops config
    /// discovery from escaping the temp directory).
    pub fn empty() -> Self {
        let project = Self {
            dir: tempfile::tempdir().unwrap(),
        };
        std::fs::create_dir(project.path().join(".git")).unwrap();
        project
    }

    /// Create a project with a default docsweep.toml
    pub fn with_defaults() -> Self {
        let project = Self::empty();
        project.file("docsweep.toml", "version = 1\n");
        project
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write docsweep.toml (auto-prefixes with `version = 1` if not present)
    pub fn config(&self, content: &str) {
        let content = if content.contains("version") {
            content.to_string()
        } else {
            format!("version = 1\n{}", content)
        };
        std::fs::write(self.path().join("docsweep.toml"), content).unwrap();
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Write a minimal valid .rst file
    pub fn rst(&self, path: impl AsRef<Path>) {
        self.file(path, "Title\n=====\n\nBody text.\n");
    }
}

/// Stub interpreter that appends each argv to a log file.
pub struct StubChecker {
    pub script: PathBuf,
    pub log: PathBuf,
}

impl StubChecker {
    /// Create a stub that exits with `code` on every invocation.
    #[cfg(unix)]
    pub fn new(project: &Project, code: i32) -> Self {
        Self::with_output(project, code, "")
    }

    /// Create a stub that prints `stdout_line` and exits with `code`.
    #[cfg(unix)]
    pub fn with_output(project: &Project, code: i32, stdout_line: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let script = project.path().join("fake_python");
        let log = project.path().join("invocations.log");

        let mut body = format!("#!/bin/sh\necho \"$@\" >> \"{}\"\n", log.display());
        if !stdout_line.is_empty() {
            body.push_str(&format!("echo \"{}\"\n", stdout_line));
        }
        body.push_str(&format!("exit {}\n", code));

        std::fs::write(&script, body).unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        Self { script, log }
    }

    /// One entry per checker invocation, split into argv tokens.
    pub fn invocations(&self) -> Vec<Vec<String>> {
        let content = std::fs::read_to_string(&self.log).unwrap_or_default();
        content
            .lines()
            .map(|line| line.split_whitespace().map(String::from).collect())
            .collect()
    }

    /// File arguments of one invocation: tokens between "doc8" and "--config".
    pub fn file_args(invocation: &[String]) -> Vec<&String> {
        let config_pos = invocation
            .iter()
            .position(|a| a == "--config")
            .expect("invocation should carry --config");
        invocation[2..config_pos].iter().collect()
    }
}

/// Run `docsweep check` in `project` with the stub as interpreter.
#[cfg(unix)]
pub fn check_with_stub(project: &Project, stub: &StubChecker) -> assert_cmd::assert::Assert {
    docsweep_cmd()
        .arg("check")
        .current_dir(project.path())
        .env("DOCSWEEP_PYTHON", &stub.script)
        .assert()
}
