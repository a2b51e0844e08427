//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract; scripts and cron wrappers
//! branch on them, so renumbering is a breaking change.
//!
//! # Exit Codes
//!
//! | Code | Meaning                                            |
//! |------|----------------------------------------------------|
//! | 0    | Success                                            |
//! | 1    | General error (unspecified)                        |
//! | 2    | Usage error (bad args, invalid config)             |
//! | 3    | Load error (unreadable input, header not found)    |
//! | 4    | Schema error (required column missing)             |
//! | 5    | Integrity error (negative final quantity)          |
//! | 6    | Write error (artifact could not be written)        |
//!
//! # Adding New Exit Codes
//!
//! 1. Add the constant below with a doc comment saying what triggers it
//! 2. Update the table above
//! 3. Extend `engine_exit_code` if it maps from an engine error
//! 4. Mention it in the relevant command's `after_help`

use stocksync_engine::ReconError;

// =============================================================================
// Codes
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
/// Avoid using this; prefer a specific error code.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, or a config file that does not parse
/// or fails validation.
pub const EXIT_USAGE: u8 = 2;

/// Load error - an input file is missing, unreadable, undecodable,
/// or its header row was not found inside the scan window.
pub const EXIT_LOAD: u8 = 3;

/// Schema error - no alias matched a required column after cleaning.
pub const EXIT_SCHEMA: u8 = 4;

/// Integrity error - a final quantity came out negative.
/// Guarantees that no artifact was written.
pub const EXIT_INTEGRITY: u8 = 5;

/// Write error - an output artifact could not be written.
pub const EXIT_WRITE: u8 = 6;

// =============================================================================
// Mapping
// =============================================================================

/// Map an engine error to its exit code.
pub fn engine_exit_code(err: &ReconError) -> u8 {
    match err {
        ReconError::ConfigParse(_) | ReconError::ConfigValidation(_) => EXIT_USAGE,
        ReconError::Load { .. } | ReconError::HeaderNotFound { .. } => EXIT_LOAD,
        ReconError::MissingColumn { .. } => EXIT_SCHEMA,
        ReconError::NegativeQuantity { .. } => EXIT_INTEGRITY,
        ReconError::Io(_) => EXIT_WRITE,
    }
}
