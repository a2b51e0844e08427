use std::collections::BTreeSet;

use crate::classify::classify;
use crate::error::ReconError;
use crate::model::{AggregatedInventory, Presence, ReconciledRow};

/// Full outer join over both aggregations: exactly one row per key in the
/// union, key order, each row classified.
///
/// Quantities read as 0 on the side a key is absent from, which is also
/// what zeroes ghosts out on apply. Any negative final quantity rejects the
/// whole run here, before any report or artifact exists.
pub fn reconcile(
    ecommerce: &AggregatedInventory,
    warehouse: &AggregatedInventory,
) -> Result<Vec<ReconciledRow>, ReconError> {
    let keys: BTreeSet<&String> = ecommerce.keys().chain(warehouse.keys()).collect();

    let mut rows = Vec::with_capacity(keys.len());
    for key in keys {
        let source = ecommerce.get(key);
        let target = warehouse.get(key);

        let presence = match (source.is_some(), target.is_some()) {
            (true, true) => Presence::Both,
            (true, false) => Presence::EcommerceOnly,
            _ => Presence::WarehouseOnly,
        };

        let source_quantity = source.map(|t| t.quantity).unwrap_or(0.0);
        let target_quantity = target.map(|t| t.quantity).unwrap_or(0.0);
        let delta = target_quantity - source_quantity;

        let title = source
            .and_then(|t| t.title.clone())
            .or_else(|| target.and_then(|t| t.title.clone()));

        rows.push(ReconciledRow {
            key: key.clone(),
            title,
            source_quantity,
            target_quantity,
            delta,
            presence,
            status: classify(presence, source_quantity, target_quantity, delta),
        });
    }

    let negative: Vec<String> = rows
        .iter()
        .filter(|r| r.target_quantity < 0.0)
        .map(|r| r.key.clone())
        .collect();
    if !negative.is_empty() {
        return Err(ReconError::NegativeQuantity { keys: negative });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SkuTotal, StockStatus};

    fn inventory(entries: &[(&str, f64)]) -> AggregatedInventory {
        entries
            .iter()
            .map(|(key, quantity)| {
                (key.to_string(), SkuTotal { quantity: *quantity, title: None })
            })
            .collect()
    }

    #[test]
    fn join_covers_the_key_union_in_order() {
        let ecom = inventory(&[("b", 1.0), ("a", 2.0)]);
        let wh = inventory(&[("c", 3.0), ("b", 4.0)]);
        let rows = reconcile(&ecom, &wh).unwrap();
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);

        assert_eq!(rows[0].presence, Presence::EcommerceOnly);
        assert_eq!(rows[1].presence, Presence::Both);
        assert_eq!(rows[2].presence, Presence::WarehouseOnly);
    }

    #[test]
    fn absent_side_reads_as_zero() {
        let ecom = inventory(&[("SKU-2", 3.0)]);
        let wh = inventory(&[]);
        let rows = reconcile(&ecom, &wh).unwrap();
        assert_eq!(rows[0].target_quantity, 0.0);
        assert_eq!(rows[0].delta, -3.0);
        assert_eq!(rows[0].status, StockStatus::Ghost);
    }

    #[test]
    fn delta_is_target_minus_source() {
        let ecom = inventory(&[("SKU-1", 3.0)]);
        let wh = inventory(&[("SKU-1", 8.0)]);
        let rows = reconcile(&ecom, &wh).unwrap();
        assert_eq!(rows[0].delta, 5.0);
        assert_eq!(rows[0].status, StockStatus::Increased);
    }

    #[test]
    fn title_prefers_the_ecommerce_side() {
        let mut ecom = inventory(&[("SKU-1", 1.0)]);
        ecom.get_mut("SKU-1").unwrap().title = Some("Store name".into());
        let mut wh = inventory(&[("SKU-1", 1.0)]);
        wh.get_mut("SKU-1").unwrap().title = Some("CEDI name".into());

        let rows = reconcile(&ecom, &wh).unwrap();
        assert_eq!(rows[0].title.as_deref(), Some("Store name"));
    }

    #[test]
    fn warehouse_title_fills_the_gap() {
        let ecom = inventory(&[]);
        let mut wh = inventory(&[("SKU-9", 2.0)]);
        wh.get_mut("SKU-9").unwrap().title = Some("Sólo CEDI".into());

        let rows = reconcile(&ecom, &wh).unwrap();
        assert_eq!(rows[0].title.as_deref(), Some("Sólo CEDI"));
    }

    #[test]
    fn negative_final_quantity_aborts_with_keys() {
        let ecom = inventory(&[("SKU-1", 2.0)]);
        let wh = inventory(&[("SKU-1", -4.0), ("SKU-2", -1.0), ("SKU-3", 5.0)]);
        let err = reconcile(&ecom, &wh).unwrap_err();
        match err {
            ReconError::NegativeQuantity { keys } => {
                assert_eq!(keys, vec!["SKU-1", "SKU-2"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_source_alone_does_not_abort() {
        let ecom = inventory(&[("SKU-1", -2.0)]);
        let wh = inventory(&[("SKU-1", 4.0)]);
        let rows = reconcile(&ecom, &wh).unwrap();
        assert_eq!(rows[0].status, StockStatus::Increased);
        assert_eq!(rows[0].delta, 6.0);
    }

    #[test]
    fn empty_both_sides_is_an_empty_result() {
        let rows = reconcile(&inventory(&[]), &inventory(&[])).unwrap();
        assert!(rows.is_empty());
    }
}
