// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console output and terminal styling.
//!
//! Per-scope results are streamed as they complete:
//! ```text
//! <scope>: FAIL
//!   <captured doc8 output, indented>
//! ```
//! Passing scopes print a single PASS line. Color resolution:
//! `NO_COLOR` > `COLOR` > tty/agent-environment detection.

use std::io::{IsTerminal, Write};

use termcolor::{ColorChoice, StandardStream, WriteColor};

/// Resolve color choice from environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any
/// value (including empty string) disables color.
pub fn resolve_color() -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() {
        return ColorChoice::Never;
    }
    if is_agent_environment() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Check if running in an AI agent environment.
fn is_agent_environment() -> bool {
    std::env::var_os("CLAUDE_CODE").is_some()
        || std::env::var_os("CODEX").is_some()
        || std::env::var_os("CURSOR").is_some()
        || std::env::var_os("CI").is_some()
}

/// Color scheme for scope results.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Bold scope name (e.g., "docs").
    pub fn scope_name() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Red "FAIL" indicator.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Green "PASS" indicator.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Yellow "ERROR" indicator for launch failures.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }
}

/// Text formatter for scope results with color support.
pub struct TextFormatter {
    stdout: StandardStream,
}

impl TextFormatter {
    pub fn new(color_choice: ColorChoice) -> Self {
        Self {
            stdout: StandardStream::stdout(color_choice),
        }
    }

    /// Write a passing scope line.
    pub fn write_pass(&mut self, scope: &str, file_count: usize) -> std::io::Result<()> {
        self.write_scope(scope)?;
        self.stdout.set_color(&scheme::pass())?;
        write!(self.stdout, "PASS")?;
        self.stdout.reset()?;
        writeln!(
            self.stdout,
            " ({} file{})",
            file_count,
            if file_count == 1 { "" } else { "s" }
        )
    }

    /// Write a failing scope with the captured doc8 output indented under it.
    pub fn write_fail(&mut self, scope: &str, stdout: &str, stderr: &str) -> std::io::Result<()> {
        self.write_scope(scope)?;
        self.stdout.set_color(&scheme::fail())?;
        write!(self.stdout, "FAIL")?;
        self.stdout.reset()?;
        writeln!(self.stdout)?;

        for line in stdout.lines().chain(stderr.lines()) {
            writeln!(self.stdout, "  {}", line)?;
        }
        Ok(())
    }

    /// Write a scope whose checker process could not be launched.
    pub fn write_error(&mut self, scope: &str, message: &str) -> std::io::Result<()> {
        self.write_scope(scope)?;
        self.stdout.set_color(&scheme::error())?;
        write!(self.stdout, "ERROR")?;
        self.stdout.reset()?;
        writeln!(self.stdout)?;
        writeln!(self.stdout, "  {}", message)
    }

    /// Write the trailing summary line.
    pub fn write_summary(&mut self, checked: usize, failed: usize) -> std::io::Result<()> {
        if failed == 0 {
            writeln!(
                self.stdout,
                "{} scope{} checked",
                checked,
                if checked == 1 { "" } else { "s" }
            )
        } else {
            writeln!(
                self.stdout,
                "{} scope{} checked, {} with findings",
                checked,
                if checked == 1 { "" } else { "s" },
                failed
            )
        }
    }

    fn write_scope(&mut self, scope: &str) -> std::io::Result<()> {
        self.stdout.set_color(&scheme::scope_name())?;
        write!(self.stdout, "{}", scope)?;
        self.stdout.reset()?;
        write!(self.stdout, ": ")
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
