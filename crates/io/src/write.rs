// Report artifacts: apply-ready update and audit trail, CSV or XLSX

use std::path::Path;

use rust_xlsxwriter::Workbook;

use stocksync_engine::{ApplyRow, OutputConfig, ReconError, ReconciledRow};

/// Audit trail column order.
const AUDIT_HEADERS: [&str; 6] =
    ["sku", "title", "prior_quantity", "new_quantity", "delta", "status"];

/// Write the apply-ready update. `.xlsx` paths get a workbook, anything
/// else a CSV.
pub fn write_apply(
    path: &Path,
    rows: &[ApplyRow],
    output: &OutputConfig,
) -> Result<(), ReconError> {
    let written = if is_xlsx(path) {
        apply_xlsx(path, rows, output)
    } else {
        apply_csv(path, rows, output)
    };
    written.map_err(|message| io_error(path, message))
}

/// Write the audit trail, same format dispatch as the apply file.
pub fn write_audit(path: &Path, rows: &[ReconciledRow]) -> Result<(), ReconError> {
    let written = if is_xlsx(path) {
        audit_xlsx(path, rows)
    } else {
        audit_csv(path, rows)
    };
    written.map_err(|message| io_error(path, message))
}

fn io_error(path: &Path, message: String) -> ReconError {
    ReconError::Io(format!("{}: {message}", path.display()))
}

fn is_xlsx(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"))
}

/// Quantities print integral when whole, so a count of 8 never becomes
/// `8.0` in a file a human has to eyeball.
fn number_text(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

fn apply_csv(path: &Path, rows: &[ApplyRow], output: &OutputConfig) -> Result<(), String> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(|e| e.to_string())?;

    writer
        .write_record([output.key_header.as_str(), output.quantity_header.as_str()])
        .map_err(|e| e.to_string())?;
    for row in rows {
        let quantity = number_text(row.quantity);
        writer
            .write_record([row.key.as_str(), quantity.as_str()])
            .map_err(|e| e.to_string())?;
    }
    writer.flush().map_err(|e| e.to_string())
}

fn audit_csv(path: &Path, rows: &[ReconciledRow]) -> Result<(), String> {
    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(|e| e.to_string())?;

    writer.write_record(AUDIT_HEADERS).map_err(|e| e.to_string())?;
    for row in rows {
        let prior = number_text(row.source_quantity);
        let updated = number_text(row.target_quantity);
        let delta = number_text(row.delta);
        writer
            .write_record([
                row.key.as_str(),
                row.title.as_deref().unwrap_or(""),
                prior.as_str(),
                updated.as_str(),
                delta.as_str(),
                row.status.label(),
            ])
            .map_err(|e| e.to_string())?;
    }
    writer.flush().map_err(|e| e.to_string())
}

// ---------------------------------------------------------------------------
// XLSX
// ---------------------------------------------------------------------------

fn apply_xlsx(path: &Path, rows: &[ApplyRow], output: &OutputConfig) -> Result<(), String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook
        .add_worksheet()
        .set_name("Updates")
        .map_err(|e| e.to_string())?;

    worksheet
        .write_string(0, 0, &output.key_header)
        .map_err(|e| e.to_string())?;
    worksheet
        .write_string(0, 1, &output.quantity_header)
        .map_err(|e| e.to_string())?;
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, &row.key).map_err(|e| e.to_string())?;
        worksheet.write_number(r, 1, row.quantity).map_err(|e| e.to_string())?;
    }

    workbook.save(path).map_err(|e| e.to_string())
}

fn audit_xlsx(path: &Path, rows: &[ReconciledRow]) -> Result<(), String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook
        .add_worksheet()
        .set_name("Audit")
        .map_err(|e| e.to_string())?;

    for (col, header) in AUDIT_HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| e.to_string())?;
    }
    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, &row.key).map_err(|e| e.to_string())?;
        if let Some(title) = &row.title {
            worksheet.write_string(r, 1, title).map_err(|e| e.to_string())?;
        }
        worksheet
            .write_number(r, 2, row.source_quantity)
            .map_err(|e| e.to_string())?;
        worksheet
            .write_number(r, 3, row.target_quantity)
            .map_err(|e| e.to_string())?;
        worksheet.write_number(r, 4, row.delta).map_err(|e| e.to_string())?;
        worksheet
            .write_string(r, 5, row.status.label())
            .map_err(|e| e.to_string())?;
    }

    workbook.save(path).map_err(|e| e.to_string())
}
