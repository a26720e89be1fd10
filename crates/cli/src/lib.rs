pub mod checker;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod output;
pub mod scope;
pub mod walker;

pub use checker::{CheckOutcome, Doc8Checker, resolve_interpreter};
pub use cli::{CheckArgs, Cli, Command};
pub use config::{Config, ProjectConfig};
pub use error::{Error, ExitCode, Result};
pub use scope::{Scope, plan_scopes};
pub use walker::{ScopeDepth, rst_files};
