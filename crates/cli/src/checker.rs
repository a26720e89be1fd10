// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! doc8 invocation.
//!
//! doc8 is consumed as an opaque subprocess via `<interpreter> -m doc8
//! <files...> --config <path>`. Exit code 0 means no style violations;
//! anything else means violations or a tool error, with details in the
//! captured output.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};

/// Captured result of one checker invocation.
#[derive(Debug)]
pub struct CheckOutcome {
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
    /// Process exit code (-1 if terminated by signal).
    pub code: i32,
}

impl CheckOutcome {
    /// True when doc8 reported no violations.
    pub fn passed(&self) -> bool {
        self.code == 0
    }
}

/// Resolve the interpreter used to launch doc8.
///
/// An explicit override (`--checker` flag or `DOCSWEEP_PYTHON` env) wins;
/// otherwise `python3` then `python` are probed on PATH.
pub fn resolve_interpreter(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    for candidate in ["python3", "python"] {
        let found = Command::new(candidate)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok_and(|s| s.success());
        if found {
            return Ok(PathBuf::from(candidate));
        }
    }

    Err(Error::Checker(
        "no python interpreter found on PATH (set --checker or DOCSWEEP_PYTHON)".to_string(),
    ))
}

/// Invokes doc8 through a resolved interpreter with a fixed config file.
pub struct Doc8Checker {
    interpreter: PathBuf,
    config_path: PathBuf,
}

impl Doc8Checker {
    pub fn new(interpreter: PathBuf, config_path: PathBuf) -> Self {
        Self {
            interpreter,
            config_path,
        }
    }

    /// Path handed to doc8 via `--config`.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Build the checker argument list for a set of candidate files.
    ///
    /// Candidates that do not exist on disk are silently dropped. The
    /// `--config` pair always follows the file arguments, even when the
    /// filtered list is empty.
    pub fn args_for(&self, paths: &[PathBuf]) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec!["-m".into(), "doc8".into()];
        args.extend(
            paths
                .iter()
                .filter(|p| p.exists())
                .map(|p| p.as_os_str().to_os_string()),
        );
        args.push("--config".into());
        args.push(self.config_path.as_os_str().into());
        args
    }

    /// Run doc8 over `paths`, blocking until the child exits.
    ///
    /// Zero existing files is not a short-circuit: the invocation still
    /// runs with an empty file list.
    pub fn check(&self, paths: &[PathBuf]) -> Result<CheckOutcome> {
        let args = self.args_for(paths);
        tracing::debug!(
            interpreter = %self.interpreter.display(),
            files = args.len().saturating_sub(4),
            "launching doc8"
        );

        let output = Command::new(&self.interpreter)
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| {
                Error::Checker(format!(
                    "failed to launch {}: {}",
                    self.interpreter.display(),
                    e
                ))
            })?;

        Ok(CheckOutcome {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code().unwrap_or(-1),
        })
    }
}

#[cfg(test)]
#[path = "checker_tests.rs"]
mod tests;
