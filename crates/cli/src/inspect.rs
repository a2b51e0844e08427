//! `stocksync inspect`: show how one input file loads, before running.
//!
//! Prints the detected header row, the cleaned headers, and which alias
//! (if any) resolved each column role. This is the first stop when a run
//! exits with a schema error.

use std::path::PathBuf;

use stocksync_engine::columns::describe_resolution;
use stocksync_engine::model::Role;
use stocksync_engine::Side;
use stocksync_io::load_table;

use crate::exit_codes::EXIT_ERROR;
use crate::{load_config, CliError};

pub fn cmd_inspect(
    file: PathBuf,
    side: Side,
    config: Option<PathBuf>,
    json: bool,
) -> Result<(), CliError> {
    let config = load_config(config.as_deref())?;
    let side_config = match side {
        Side::Ecommerce => &config.ecommerce,
        Side::Warehouse => &config.warehouse,
    };

    let table = load_table(&file, side_config).map_err(CliError::engine)?;
    let roles = describe_resolution(&table, side_config);

    if json {
        let value = serde_json::json!({
            "file": file.display().to_string(),
            "side": side.to_string(),
            "header_row": table.header_row,
            "data_rows": table.row_count(),
            "headers": table.headers,
            "roles": roles,
        });
        let text = serde_json::to_string_pretty(&value).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: format!("failed to encode the report as JSON: {e}"),
            hint: None,
        })?;
        println!("{text}");
        return Ok(());
    }

    println!("file: {}", file.display());
    println!("side: {side}");
    println!("header row: {}", table.header_row + 1);
    println!("data rows: {}", table.row_count());
    println!("headers: {}", table.headers.join(" | "));
    for role in &roles {
        match &role.column {
            Some(column) => println!("{}: {}", role.role, column),
            None => println!("{}: not found (tried: {})", role.role, role.aliases.join(", ")),
        }
    }
    if side == Side::Ecommerce
        && roles.iter().any(|r| r.role == Role::Quantity && r.column.is_none())
    {
        println!("note: without an ecommerce quantity column, prior stock reads as 0");
    }

    Ok(())
}
