use serde::Serialize;

use crate::config::SideConfig;
use crate::error::ReconError;
use crate::model::{Role, Side};
use crate::table::Table;

/// Resolved column positions for one input table.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColumns {
    pub key: usize,
    /// None on the e-commerce side means prior stock reads as 0 everywhere.
    pub quantity: Option<usize>,
    pub title: Option<usize>,
}

/// Resolve each role to a column index, first alias in priority order wins.
///
/// The key column is always required. The quantity column is required on the
/// warehouse side; an e-commerce table without one gets the zero-filled
/// default. Title is optional on both sides.
pub fn resolve_columns(
    table: &Table,
    side: Side,
    config: &SideConfig,
) -> Result<ResolvedColumns, ReconError> {
    let key = find_alias(table, &config.key)
        .ok_or_else(|| missing(side, Role::Key, &config.key, table))?;

    let quantity = match find_alias(table, &config.quantity) {
        Some(idx) => Some(idx),
        None if side == Side::Warehouse => {
            return Err(missing(side, Role::Quantity, &config.quantity, table));
        }
        None => None,
    };

    let title = find_alias(table, &config.title);

    Ok(ResolvedColumns { key, quantity, title })
}

fn find_alias(table: &Table, aliases: &[String]) -> Option<usize> {
    aliases.iter().find_map(|alias| table.column_index(alias))
}

fn missing(side: Side, role: Role, aliases: &[String], table: &Table) -> ReconError {
    ReconError::MissingColumn {
        side,
        role,
        aliases: aliases.to_vec(),
        found: table.headers.clone(),
    }
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// Per-role resolution outcome, in report form. This is what `inspect`
/// prints when an operator is diagnosing a schema failure.
#[derive(Debug, Clone, Serialize)]
pub struct RoleResolution {
    pub role: Role,
    /// Matched column name, or None if no alias was present.
    pub column: Option<String>,
    pub aliases: Vec<String>,
}

pub fn describe_resolution(table: &Table, config: &SideConfig) -> Vec<RoleResolution> {
    let describe = |role: Role, aliases: &[String]| RoleResolution {
        role,
        column: find_alias(table, aliases).map(|idx| table.headers[idx].clone()),
        aliases: aliases.to_vec(),
    };
    vec![
        describe(Role::Key, &config.key),
        describe(Role::Quantity, &config.quantity),
        describe(Role::Title, &config.title),
    ]
}
