// Input loading: pick a reader by extension, build the engine table

use std::path::Path;

use stocksync_engine::{ReconError, SideConfig, Table};

use crate::{sheet, text};

/// Extensions routed through calamine; everything else reads as delimited
/// text.
const SHEET_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Load one input file into a [`Table`], applying the side's header scan.
pub fn load_table(path: &Path, side: &SideConfig) -> Result<Table, ReconError> {
    let rows = if is_spreadsheet(path) {
        sheet::load_rows(path)
    } else {
        text::load_rows(path)
    }
    .map_err(|message| ReconError::Load {
        path: path.display().to_string(),
        message,
    })?;

    Table::from_rows(rows, side.header_scan.as_ref())
}

fn is_spreadsheet(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SHEET_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
