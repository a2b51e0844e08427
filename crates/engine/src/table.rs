//! In-memory tabular input.
//!
//! Loaders produce raw rows of [`Cell`]s; [`Table::from_rows`] locates the
//! header row, cleans the column names, and keeps everything below it as the
//! body. Real exports put the header anywhere in the first screenful (pivot
//! exports stack title and filter rows above it), so header location is a
//! scan, not an assumption.

use crate::config::HeaderScan;
use crate::error::ReconError;

// ---------------------------------------------------------------------------
// Cells
// ---------------------------------------------------------------------------

/// A single cell as loaded from CSV or a spreadsheet.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

const EMPTY: Cell = Cell::Empty;

impl Cell {
    /// Cell content as display text. Whole numbers print without a fraction
    /// so a spreadsheet `42.0` compares equal to a CSV `42`.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    format!("{n}")
                }
            }
            Cell::Empty => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }
}

/// Column-name cleanup applied to every header cell and every configured
/// alias before comparison: drop carriage returns, collapse embedded
/// newlines to spaces, trim.
pub fn clean_header(raw: &str) -> String {
    raw.replace('\r', "").replace('\n', " ").trim().to_string()
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

/// Cleaned headers plus body rows. Body rows may be ragged; [`Table::cell`]
/// treats missing trailing cells as empty.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    /// Index of the header row in the raw input, for diagnostics.
    pub header_row: usize,
}

impl Table {
    /// Build a table from raw rows.
    ///
    /// With a scan config, the first row within the window containing a cell
    /// equal (after cleaning) to the marker becomes the header; rows above
    /// it are discarded. No match falls back to row 0 unless the scan is
    /// marked `require_marker`. Without a scan config row 0 is the header.
    pub fn from_rows(
        mut raw: Vec<Vec<Cell>>,
        scan: Option<&HeaderScan>,
    ) -> Result<Self, ReconError> {
        let header_row = match scan {
            Some(scan) => match find_header_row(&raw, scan) {
                Some(idx) => idx,
                None if scan.require_marker => {
                    return Err(ReconError::HeaderNotFound {
                        marker: scan.marker.clone(),
                        window: scan.window,
                    });
                }
                None => 0,
            },
            None => 0,
        };

        if raw.is_empty() {
            return Ok(Table { headers: Vec::new(), rows: Vec::new(), header_row: 0 });
        }

        let mut body = raw.split_off(header_row + 1);
        let headers = raw
            .pop()
            .map(|row| row.iter().map(|c| clean_header(&c.as_text())).collect())
            .unwrap_or_default();

        // Trailing fully blank rows are padding, not data.
        while body.last().is_some_and(|row| row.iter().all(Cell::is_empty)) {
            body.pop();
        }

        Ok(Table { headers, rows: body, header_row })
    }

    /// Position of a column by cleaned name, exact match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let want = clean_header(name);
        self.headers.iter().position(|h| *h == want)
    }

    /// Cell at (row, col); out-of-range positions read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows.get(row).and_then(|r| r.get(col)).unwrap_or(&EMPTY)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_is_blank(&self, row: usize) -> bool {
        match self.rows.get(row) {
            Some(cells) => cells.iter().all(Cell::is_empty),
            None => true,
        }
    }
}

fn find_header_row(raw: &[Vec<Cell>], scan: &HeaderScan) -> Option<usize> {
    let marker = clean_header(&scan.marker);
    raw.iter()
        .take(scan.window)
        .position(|row| row.iter().any(|cell| clean_header(&cell.as_text()) == marker))
}
