use crate::model::{ApplyRow, Presence, QualityWarning, ReconciledRow, StockStatus, Summary};

/// Apply-file rows: every reconciled key except warehouse-only ones, which
/// have no listing to update yet. Ghost keys ride along with quantity 0.
pub fn apply_rows(rows: &[ReconciledRow]) -> Vec<ApplyRow> {
    rows.iter()
        .filter(|r| r.presence != Presence::WarehouseOnly)
        .map(|r| ApplyRow { key: r.key.clone(), quantity: r.target_quantity })
        .collect()
}

/// Roll classified rows up into the run counters.
pub fn compute_summary(
    rows: &[ReconciledRow],
    apply: &[ApplyRow],
    warnings: &[QualityWarning],
) -> Summary {
    let mut summary = Summary {
        total_keys: rows.len(),
        apply_rows: apply.len(),
        warnings: warnings.len(),
        ..Summary::default()
    };

    for row in rows {
        *summary.status_counts.entry(row.status.to_string()).or_insert(0) += 1;
        match row.status {
            StockStatus::Ghost => summary.ghosts += 1,
            StockStatus::NoStockEitherSide => summary.no_stock_either_side += 1,
            StockStatus::NewInWarehouse => summary.new_in_warehouse += 1,
            StockStatus::NewlyStocked => summary.newly_stocked += 1,
            StockStatus::Stockout => summary.stockouts += 1,
            StockStatus::Increased => summary.increased += 1,
            StockStatus::Decreased => summary.decreased += 1,
            StockStatus::Unchanged => summary.unchanged += 1,
        }
    }

    summary
}
