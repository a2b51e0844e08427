use std::fmt;

use crate::model::{Role, Side};

#[derive(Debug)]
pub enum ReconError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty alias list, zero scan window, etc.).
    ConfigValidation(String),
    /// Input file could not be read or parsed into a table.
    Load { path: String, message: String },
    /// Required header marker not found within the scan window.
    HeaderNotFound { marker: String, window: usize },
    /// No configured alias matched a required column.
    MissingColumn {
        side: Side,
        role: Role,
        aliases: Vec<String>,
        found: Vec<String>,
    },
    /// At least one final quantity went negative; the run produces no output.
    NegativeQuantity { keys: Vec<String> },
    /// IO error (artifact write, config read).
    Io(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::Load { path, message } => write!(f, "cannot load '{path}': {message}"),
            Self::HeaderNotFound { marker, window } => {
                write!(f, "header marker '{marker}' not found in the first {window} row(s)")
            }
            Self::MissingColumn { side, role, aliases, found } => {
                write!(
                    f,
                    "{side} input has no {role} column; tried [{}]; columns present: [{}]",
                    aliases.join(", "),
                    found.join(", ")
                )
            }
            Self::NegativeQuantity { keys } => {
                write!(
                    f,
                    "negative final quantity for {} SKU(s): {}",
                    keys.len(),
                    keys.join(", ")
                )
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}
