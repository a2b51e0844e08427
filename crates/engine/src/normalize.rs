use crate::columns::ResolvedColumns;
use crate::model::{QualityWarning, Side, SkuRecord};
use crate::table::{Cell, Table};

/// Records plus the warnings produced while cleaning them.
#[derive(Debug)]
pub struct Normalized {
    pub records: Vec<SkuRecord>,
    pub warnings: Vec<QualityWarning>,
}

/// Turn table rows into [`SkuRecord`]s.
///
/// Keys are trimmed. Rows with data but a blank key are skipped with a
/// warning; fully blank rows are skipped silently. Quantities parse
/// leniently, and non-empty text that still fails to parse coerces to 0
/// with a warning. A side with no quantity column reads as all zeros.
pub fn normalize(table: &Table, side: Side, cols: &ResolvedColumns) -> Normalized {
    let mut records = Vec::with_capacity(table.row_count());
    let mut warnings = Vec::new();

    for row in 0..table.row_count() {
        let key = table.cell(row, cols.key).as_text().trim().to_string();
        if key.is_empty() {
            if !table.row_is_blank(row) {
                warnings.push(QualityWarning::EmptyKey { side, row });
            }
            continue;
        }

        let quantity = match cols.quantity {
            Some(col) => match quantity_value(table.cell(row, col)) {
                Ok(q) => q,
                Err(raw) => {
                    warnings.push(QualityWarning::CoercedQuantity {
                        side,
                        key: key.clone(),
                        column: table.headers[col].clone(),
                        value: raw,
                    });
                    0.0
                }
            },
            None => 0.0,
        };

        let title = cols.title.and_then(|col| {
            let text = table.cell(row, col).as_text().trim().to_string();
            if text.is_empty() { None } else { Some(text) }
        });

        records.push(SkuRecord { key, quantity, title });
    }

    Normalized { records, warnings }
}

/// Numeric value of a quantity cell. Empty reads as 0; text goes through the
/// lenient parser; the Err carries the raw text for the warning.
fn quantity_value(cell: &Cell) -> Result<f64, String> {
    match cell {
        Cell::Number(n) => Ok(*n),
        Cell::Empty => Ok(0.0),
        Cell::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(0.0)
            } else {
                parse_quantity(trimmed).ok_or_else(|| trimmed.to_string())
            }
        }
    }
}

/// Parse a quantity out of export text: thousands separators, currency
/// marks, and stray whitespace are tolerated, `(3)` reads as -3. Anything
/// else non-numeric means the cell is not a quantity.
pub fn parse_quantity(s: &str) -> Option<f64> {
    let trimmed = s.trim();

    // Accounting exports write negatives as (3)
    let (sign, body) = match trimmed.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        Some(inner) => (-1.0, inner),
        None => (1.0, trimmed),
    };

    let cleaned: String = body
        .chars()
        .filter(|&c| c != '$' && c != ',' && !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    // A leading sign is fine unless the parentheses already supplied one
    let plain_number = cleaned.chars().enumerate().all(|(i, c)| match c {
        '0'..='9' | '.' => true,
        '-' | '+' => i == 0 && sign > 0.0,
        _ => false,
    });
    if !plain_number {
        return None;
    }

    cleaned.parse::<f64>().ok().map(|value| sign * value)
}
