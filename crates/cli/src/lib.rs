//! Command implementations behind the `stocksync` binary.
//!
//! Argument parsing stays in `main.rs`; everything after it lives here so
//! integration tests can drive commands without spawning a process.

pub mod exit_codes;
pub mod inspect;
pub mod run;
pub mod validate;

use std::path::Path;

use stocksync_engine::{ReconError, RunConfig};

use crate::exit_codes::{engine_exit_code, EXIT_USAGE, EXIT_WRITE};

pub use inspect::cmd_inspect;
pub use run::cmd_run;
pub use validate::cmd_validate;

/// Error carrying the process exit code, a stderr message, and an
/// optional one-line hint.
#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn write(msg: impl Into<String>) -> Self {
        Self { code: EXIT_WRITE, message: msg.into(), hint: None }
    }

    /// Create error from an engine error with the mapped exit code.
    pub fn engine(err: ReconError) -> Self {
        let code = engine_exit_code(&err);
        let hint = match &err {
            ReconError::MissingColumn { side, .. } => Some(format!(
                "run `stocksync inspect <file> --side {side}` to see the headers that were found"
            )),
            ReconError::HeaderNotFound { .. } => Some(
                "adjust [warehouse].header_scan in the config, or set require_marker = false"
                    .to_string(),
            ),
            ReconError::NegativeQuantity { .. } => {
                Some("no artifact was written; fix the inputs and rerun".to_string())
            }
            _ => None,
        };
        Self { code, message: err.to_string(), hint }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Load the run configuration: the TOML file when one is given,
/// built-in defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<RunConfig, CliError> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::usage(format!("{}: {e}", path.display())))?;
            RunConfig::from_toml(&text).map_err(CliError::engine)
        }
        None => Ok(RunConfig::default()),
    }
}
