use std::collections::BTreeMap;

use crate::model::{AggregatedInventory, SkuRecord, SkuTotal};

/// Group records by key: quantities sum, the first non-empty title wins.
/// Duplicate SKU rows are the norm in warehouse exports (one row per batch
/// or location), so summation has to be order-independent.
pub fn aggregate(records: &[SkuRecord]) -> AggregatedInventory {
    let mut totals: AggregatedInventory = BTreeMap::new();

    for record in records {
        let entry = totals
            .entry(record.key.clone())
            .or_insert_with(|| SkuTotal { quantity: 0.0, title: None });
        entry.quantity += record.quantity;
        if entry.title.is_none() {
            entry.title = record.title.clone();
        }
    }

    totals
}
