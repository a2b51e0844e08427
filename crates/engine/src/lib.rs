//! `stocksync-engine` — Inventory reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded tables, returns classified rows,
//! apply-file rows, and summary counters. No file or terminal dependencies;
//! formats live in `stocksync-io`, presentation in `stocksync-cli`.

pub mod aggregate;
pub mod classify;
pub mod columns;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod normalize;
pub mod reconcile;
pub mod report;
pub mod table;

pub use config::{HeaderScan, OutputConfig, RunConfig, SideConfig};
pub use engine::run;
pub use error::ReconError;
pub use model::{
    ApplyRow, Presence, QualityWarning, ReconciledRow, RunMeta, RunResult, Side, StockStatus,
    Summary,
};
pub use table::{Cell, Table};
