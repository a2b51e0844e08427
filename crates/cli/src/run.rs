//! `stocksync run`: load both exports, reconcile, write the artifacts.

use std::path::{Path, PathBuf};

use stocksync_engine::RunResult;
use stocksync_io::{load_table, write_apply, write_audit};

use crate::exit_codes::EXIT_ERROR;
use crate::{load_config, CliError};

#[allow(clippy::too_many_arguments)]
pub fn cmd_run(
    ecommerce: PathBuf,
    warehouse: PathBuf,
    apply: PathBuf,
    audit: PathBuf,
    config: Option<PathBuf>,
    json: bool,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    if apply == audit {
        return Err(CliError::usage("apply and audit outputs point at the same file")
            .with_hint("pass distinct paths to --apply and --audit"));
    }

    let config = load_config(config.as_deref())?;

    let ecommerce = load_table(&ecommerce, &config.ecommerce).map_err(CliError::engine)?;
    let warehouse = load_table(&warehouse, &config.warehouse).map_err(CliError::engine)?;

    let result =
        stocksync_engine::run(&config, &ecommerce, &warehouse).map_err(CliError::engine)?;

    write_apply(&apply, &result.apply, &config.output).map_err(CliError::engine)?;
    write_audit(&audit, &result.rows).map_err(CliError::engine)?;

    if let Some(path) = &output {
        std::fs::write(path, to_json(&result)?)
            .map_err(|e| CliError::write(format!("{}: {e}", path.display())))?;
    }

    if json {
        println!("{}", to_json(&result)?);
    }

    if !quiet {
        print_summary(&result, &apply, &audit);
    }

    Ok(())
}

fn to_json(result: &RunResult) -> Result<String, CliError> {
    serde_json::to_string_pretty(result).map_err(|e| CliError {
        code: EXIT_ERROR,
        message: format!("failed to encode the result as JSON: {e}"),
        hint: None,
    })
}

/// Stderr recap in one `label: value` line per counter. Rare categories
/// only get a line when they occurred.
fn print_summary(result: &RunResult, apply: &Path, audit: &Path) {
    for warning in &result.warnings {
        eprintln!("warning: {warning}");
    }

    let s = &result.summary;
    eprintln!("keys: {}", s.total_keys);
    eprintln!("increased: {}", s.increased);
    eprintln!("decreased: {}", s.decreased);
    eprintln!("unchanged: {}", s.unchanged);
    if s.newly_stocked > 0 {
        eprintln!("newly stocked: {}", s.newly_stocked);
    }
    if s.stockouts > 0 {
        eprintln!("stockouts: {}", s.stockouts);
    }
    if s.ghosts > 0 {
        eprintln!("ghosts: {}", s.ghosts);
    }
    if s.no_stock_either_side > 0 {
        eprintln!("no stock either side: {}", s.no_stock_either_side);
    }
    if s.new_in_warehouse > 0 {
        eprintln!("new in warehouse: {}", s.new_in_warehouse);
    }
    eprintln!("apply: {} rows -> {}", s.apply_rows, apply.display());
    eprintln!("audit: {} rows -> {}", s.total_keys, audit.display());
}
