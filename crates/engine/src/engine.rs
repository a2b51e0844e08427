use crate::aggregate::aggregate;
use crate::columns::resolve_columns;
use crate::config::RunConfig;
use crate::error::ReconError;
use crate::model::{RunMeta, RunResult, Side};
use crate::normalize::{normalize, Normalized};
use crate::reconcile::reconcile;
use crate::report::{apply_rows, compute_summary};
use crate::table::Table;

/// Run a full reconciliation over two pre-loaded tables.
///
/// Fatal paths (schema, integrity) return before any output data is
/// assembled, so a caller that writes artifacts only on `Ok` can never
/// leave a partial file behind.
pub fn run(
    config: &RunConfig,
    ecommerce: &Table,
    warehouse: &Table,
) -> Result<RunResult, ReconError> {
    let ecom_cols = resolve_columns(ecommerce, Side::Ecommerce, &config.ecommerce)?;
    let wh_cols = resolve_columns(warehouse, Side::Warehouse, &config.warehouse)?;

    let Normalized { records: ecom_records, mut warnings } =
        normalize(ecommerce, Side::Ecommerce, &ecom_cols);
    let Normalized { records: wh_records, warnings: wh_warnings } =
        normalize(warehouse, Side::Warehouse, &wh_cols);
    warnings.extend(wh_warnings);

    let source = aggregate(&ecom_records);
    let target = aggregate(&wh_records);

    let rows = reconcile(&source, &target)?;
    let apply = apply_rows(&rows);
    let summary = compute_summary(&rows, &apply, &warnings);

    Ok(RunResult {
        meta: RunMeta {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary,
        rows,
        apply,
        warnings,
    })
}
