// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Discovers reStructuredText docs across a project and runs doc8 over them
#[derive(Parser)]
#[command(name = "docsweep")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific project config file
    #[arg(short = 'C', long = "config", global = true, env = "DOCSWEEP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run doc8 style checks over discovered .rst files
    Check(CheckArgs),
}

#[derive(clap::Args, Default)]
pub struct CheckArgs {
    /// Project root to check (default: directory of the discovered config)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Interpreter used to launch doc8 (default: python3 or python on PATH)
    #[arg(long, env = "DOCSWEEP_PYTHON", value_name = "PATH")]
    pub checker: Option<PathBuf>,

    /// Also check addon labs from the project config
    #[arg(long)]
    pub addons: bool,

    /// List discovered files per scope without invoking the checker
    #[arg(long, hide = true)]
    pub debug_files: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
