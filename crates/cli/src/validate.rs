//! `stocksync validate`: parse and validate a config file without running.

use std::path::PathBuf;

use stocksync_engine::RunConfig;

use crate::CliError;

pub fn cmd_validate(config: PathBuf) -> Result<(), CliError> {
    let text = std::fs::read_to_string(&config)
        .map_err(|e| CliError::usage(format!("{}: {e}", config.display())))?;
    RunConfig::from_toml(&text).map_err(CliError::engine)?;
    println!("{}: ok", config.display());
    Ok(())
}
