// Excel import via calamine

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader, Sheets};

use stocksync_engine::Cell;

/// Load the first worksheet of a workbook (xlsx, xlsm, xlsb, xls, ods) into
/// raw cells. Warehouse exports keep the stock list on sheet one; any other
/// sheet is ignored.
pub fn load_rows(path: &Path) -> Result<Vec<Vec<Cell>>, String> {
    let mut workbook: Sheets<_> =
        open_workbook_auto(path).map_err(|e| format!("failed to open workbook: {e}"))?;

    let sheet_names = workbook.sheet_names();
    let first = sheet_names
        .first()
        .ok_or_else(|| "workbook contains no sheets".to_string())?;

    let range = workbook
        .worksheet_range(first)
        .map_err(|e| format!("failed to read sheet '{first}': {e}"))?;

    let (height, _) = range.get_size();
    let mut rows = Vec::with_capacity(height);
    for row in range.rows() {
        rows.push(row.iter().map(cell_from).collect());
    }
    Ok(rows)
}

/// Map a calamine cell onto the engine's cell model. Numbers stay numeric
/// (dates included, as their serial value); everything else with a face
/// value becomes text.
fn cell_from(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Number(*n as f64),
        Data::Bool(b) => {
            let text = if *b { "TRUE" } else { "FALSE" };
            Cell::Text(text.to_string())
        }
        Data::Error(e) => Cell::Text(format!("#{e:?}")),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}
