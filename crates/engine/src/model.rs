use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Sides + roles
// ---------------------------------------------------------------------------

/// Which input a record or diagnostic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Ecommerce,
    Warehouse,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ecommerce => write!(f, "ecommerce"),
            Self::Warehouse => write!(f, "warehouse"),
        }
    }
}

/// Logical column role inside one input table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Key,
    Quantity,
    Title,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => write!(f, "product key"),
            Self::Quantity => write!(f, "quantity"),
            Self::Title => write!(f, "title"),
        }
    }
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One normalized product row from either input.
#[derive(Debug, Clone)]
pub struct SkuRecord {
    pub key: String,
    pub quantity: f64,
    pub title: Option<String>,
}

/// Per-key totals after duplicate rows are summed.
#[derive(Debug, Clone)]
pub struct SkuTotal {
    pub quantity: f64,
    pub title: Option<String>,
}

/// Key-ordered aggregation of one side. BTreeMap keeps every downstream
/// artifact deterministic.
pub type AggregatedInventory = BTreeMap<String, SkuTotal>;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Which side(s) a key appeared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Both,
    EcommerceOnly,
    WarehouseOnly,
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Both => write!(f, "both"),
            Self::EcommerceOnly => write!(f, "ecommerce_only"),
            Self::WarehouseOnly => write!(f, "warehouse_only"),
        }
    }
}

/// Outcome bucket for one reconciled key. Rule order is load-bearing: the
/// classifier applies these top to bottom, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Listed online with stock, unknown to the warehouse. Zeroed on apply.
    Ghost,
    /// Listed online at zero, unknown to the warehouse.
    NoStockEitherSide,
    /// In the warehouse, not listed online. Excluded from the apply file.
    NewInWarehouse,
    /// Was at zero online, warehouse now has stock.
    NewlyStocked,
    /// Had stock online, warehouse is at zero.
    Stockout,
    Increased,
    Decreased,
    Unchanged,
}

impl StockStatus {
    /// Audit-file label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ghost => "GHOST",
            Self::NoStockEitherSide => "NO_STOCK_EITHER_SIDE",
            Self::NewInWarehouse => "NEW_IN_WAREHOUSE",
            Self::NewlyStocked => "NEWLY_STOCKED",
            Self::Stockout => "STOCKOUT",
            Self::Increased => "INCREASED",
            Self::Decreased => "DECREASED",
            Self::Unchanged => "UNCHANGED",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ghost => write!(f, "ghost"),
            Self::NoStockEitherSide => write!(f, "no_stock_either_side"),
            Self::NewInWarehouse => write!(f, "new_in_warehouse"),
            Self::NewlyStocked => write!(f, "newly_stocked"),
            Self::Stockout => write!(f, "stockout"),
            Self::Increased => write!(f, "increased"),
            Self::Decreased => write!(f, "decreased"),
            Self::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// One key in the union of both aggregations, fully classified.
#[derive(Debug, Clone, Serialize)]
pub struct ReconciledRow {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Quantity the e-commerce side currently advertises.
    pub source_quantity: f64,
    /// Quantity the warehouse reports; what the apply file will carry.
    pub target_quantity: f64,
    pub delta: f64,
    pub presence: Presence,
    pub status: StockStatus,
}

/// Row of the apply-ready update artifact.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyRow {
    pub key: String,
    pub quantity: f64,
}

// ---------------------------------------------------------------------------
// Data quality
// ---------------------------------------------------------------------------

/// Non-fatal input problems, accumulated during normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityWarning {
    /// Non-empty text in a quantity cell that did not parse as a number.
    CoercedQuantity {
        side: Side,
        key: String,
        column: String,
        value: String,
    },
    /// A row with data but a blank product key; excluded from aggregation.
    EmptyKey { side: Side, row: usize },
}

impl fmt::Display for QualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoercedQuantity { side, key, column, value } => {
                write!(
                    f,
                    "{side} '{key}': non-numeric quantity '{value}' in '{column}' treated as 0"
                )
            }
            Self::EmptyKey { side, row } => {
                write!(f, "{side} row {row}: blank product key, row skipped")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Summary + output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    /// Distinct keys across both sides (= audit row count).
    pub total_keys: usize,
    /// Rows in the apply file (everything except new_in_warehouse keys).
    pub apply_rows: usize,
    pub increased: usize,
    pub decreased: usize,
    pub unchanged: usize,
    pub newly_stocked: usize,
    pub stockouts: usize,
    pub ghosts: usize,
    pub no_stock_either_side: usize,
    pub new_in_warehouse: usize,
    pub warnings: usize,
    pub status_counts: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunMeta {
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunResult {
    pub meta: RunMeta,
    pub summary: Summary,
    pub rows: Vec<ReconciledRow>,
    pub apply: Vec<ApplyRow>,
    pub warnings: Vec<QualityWarning>,
}
