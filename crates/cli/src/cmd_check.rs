// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.
//!
//! Runs the three discovery passes (project root, docs subtree, one per
//! configured lab) strictly in sequence, one blocking doc8 invocation per
//! scope. A failing scope never prevents the remaining scopes from running;
//! findings are reported on the console and do not feed into the exit code.

use std::path::Path;

use docsweep::checker::{self, Doc8Checker};
use docsweep::cli::{CheckArgs, Cli};
use docsweep::config::{self, Config};
use docsweep::discovery;
use docsweep::error::ExitCode;
use docsweep::output::{TextFormatter, resolve_color};
use docsweep::scope::plan_scopes;
use docsweep::walker::rst_files;

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    // Determine the starting directory for config discovery
    let start = match &args.path {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => cwd.join(path),
        None => cwd,
    };

    let config_path = discovery::resolve_config(cli.config.as_deref(), &start)?;

    let config = match &config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            config::load_with_warnings(path)?
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Config::default()
        }
    };

    // The project root is the directory holding the config file, unless an
    // explicit path argument was given.
    let root = if args.path.is_some() {
        start
    } else {
        config_path
            .as_deref()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or(start)
    };

    let scopes = plan_scopes(&root, &config.project, args.addons);

    if args.debug_files {
        // Debug mode: list discovered files per scope without checking
        for scope in &scopes {
            for file in rst_files(&scope.dir, scope.depth) {
                let display_path = file.strip_prefix(&root).unwrap_or(&file);
                println!("{}: {}", scope.label, display_path.display());
            }
        }
        return Ok(ExitCode::Success);
    }

    let interpreter = checker::resolve_interpreter(args.checker.as_deref())?;
    let checker = Doc8Checker::new(interpreter, root.join(&config.project.checker_config));

    let mut formatter = TextFormatter::new(resolve_color());
    let mut failed = 0usize;

    for scope in &scopes {
        let files = rst_files(&scope.dir, scope.depth);
        tracing::info!(scope = %scope.label, files = files.len(), "running doc8");

        match checker.check(&files) {
            Ok(outcome) if outcome.passed() => {
                formatter.write_pass(&scope.label, files.len())?;
            }
            Ok(outcome) => {
                tracing::debug!(scope = %scope.label, code = outcome.code, "doc8 reported findings");
                failed += 1;
                formatter.write_fail(&scope.label, &outcome.stdout, &outcome.stderr)?;
            }
            Err(e) => {
                // Launch failure: report and keep going with the next scope
                tracing::error!(scope = %scope.label, "{}", e);
                failed += 1;
                formatter.write_error(&scope.label, &e.to_string())?;
            }
        }
    }

    formatter.write_summary(scopes.len(), failed)?;

    Ok(ExitCode::Success)
}
