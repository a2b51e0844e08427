use crate::model::{Presence, StockStatus};

/// Status for one joined key. The cascade runs top to bottom and the first
/// matching rule wins; later arms rely on earlier ones not having fired.
pub fn classify(presence: Presence, source: f64, target: f64, delta: f64) -> StockStatus {
    if presence == Presence::EcommerceOnly && source > 0.0 {
        StockStatus::Ghost
    } else if presence == Presence::EcommerceOnly && source == 0.0 {
        StockStatus::NoStockEitherSide
    } else if presence == Presence::WarehouseOnly {
        StockStatus::NewInWarehouse
    } else if presence == Presence::Both && source == 0.0 && target > 0.0 {
        StockStatus::NewlyStocked
    } else if presence == Presence::Both && target == 0.0 && source > 0.0 {
        StockStatus::Stockout
    } else if delta > 0.0 {
        StockStatus::Increased
    } else if delta < 0.0 {
        StockStatus::Decreased
    } else {
        StockStatus::Unchanged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(presence: Presence, source: f64, target: f64) -> StockStatus {
        classify(presence, source, target, target - source)
    }

    #[test]
    fn ghost_beats_everything_for_stocked_ecommerce_only() {
        assert_eq!(status(Presence::EcommerceOnly, 5.0, 0.0), StockStatus::Ghost);
    }

    #[test]
    fn zero_stock_ecommerce_only_is_no_stock_either_side() {
        assert_eq!(
            status(Presence::EcommerceOnly, 0.0, 0.0),
            StockStatus::NoStockEitherSide
        );
    }

    #[test]
    fn warehouse_only_is_new_in_warehouse() {
        assert_eq!(status(Presence::WarehouseOnly, 0.0, 7.0), StockStatus::NewInWarehouse);
        // Even at zero quantity: unknown to the store is still unknown
        assert_eq!(status(Presence::WarehouseOnly, 0.0, 0.0), StockStatus::NewInWarehouse);
    }

    #[test]
    fn newly_stocked_beats_increased() {
        // delta is +6 here, but rule 4 fires first
        assert_eq!(status(Presence::Both, 0.0, 6.0), StockStatus::NewlyStocked);
    }

    #[test]
    fn stockout_beats_decreased() {
        assert_eq!(status(Presence::Both, 6.0, 0.0), StockStatus::Stockout);
    }

    #[test]
    fn plain_moves_fall_through_to_direction() {
        assert_eq!(status(Presence::Both, 3.0, 8.0), StockStatus::Increased);
        assert_eq!(status(Presence::Both, 8.0, 3.0), StockStatus::Decreased);
        assert_eq!(status(Presence::Both, 4.0, 4.0), StockStatus::Unchanged);
    }

    #[test]
    fn zero_zero_both_is_unchanged() {
        // Neither newly-stocked (target not > 0) nor stockout (source not > 0)
        assert_eq!(status(Presence::Both, 0.0, 0.0), StockStatus::Unchanged);
    }

    #[test]
    fn negative_source_ecommerce_only_falls_through_to_direction() {
        // Oversold listing unknown to the warehouse: source is neither > 0
        // nor == 0, so no presence rule claims it and the +3 delta decides.
        assert_eq!(status(Presence::EcommerceOnly, -3.0, 0.0), StockStatus::Increased);
    }

    #[test]
    fn negative_source_both_sides_uses_direction() {
        assert_eq!(status(Presence::Both, -2.0, 4.0), StockStatus::Increased);
    }
}
