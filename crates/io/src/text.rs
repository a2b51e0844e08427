// Delimited text import: comma, semicolon, tab, or pipe separated

use std::path::Path;

use stocksync_engine::Cell;

/// Load a delimited text file into raw cells. The delimiter is sniffed from
/// the content; bytes that are not UTF-8 decode as Windows-1252.
pub fn load_rows(path: &Path) -> Result<Vec<Vec<Cell>>, String> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    rows_from_string(&content, delimiter)
}

/// Read a file as UTF-8, recovering the buffer for a Windows-1252 decode
/// when it is not. Warehouse CSVs saved out of Excel routinely arrive in
/// 1252 with accented column names.
pub fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

/// Pick the most plausible field delimiter. Each candidate is anchored on
/// the first sampled line it splits into more than one field; the winner is
/// the one whose anchor field count repeats across the most of the first
/// ten lines, higher counts breaking ties. Banner lines above a warehouse
/// header contain no separator at all, so they never anchor a candidate.
pub fn sniff_delimiter(content: &str) -> u8 {
    const CANDIDATES: [u8; 4] = [b'\t', b';', b',', b'|'];

    let sample: Vec<&str> = content.lines().take(10).collect();
    if sample.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;
    for delimiter in CANDIDATES {
        let target = sample
            .iter()
            .map(|line| field_count(line, delimiter))
            .find(|&count| count > 1);
        let Some(target) = target else {
            continue;
        };
        let consistent = sample
            .iter()
            .filter(|line| field_count(line, delimiter) == target)
            .count() as u64;
        let score = consistent * target as u64;
        if score > best_score {
            best_score = score;
            best = delimiter;
        }
    }
    best
}

/// Field count of one line under a candidate delimiter, quoting respected.
fn field_count(line: &str, delimiter: u8) -> usize {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes())
        .records()
        .next()
        .and_then(|r| r.ok())
        .map(|r| r.len())
        .unwrap_or(1)
}

fn rows_from_string(content: &str, delimiter: u8) -> Result<Vec<Vec<Cell>>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| e.to_string())?;
        let row = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    Cell::Empty
                } else {
                    Cell::Text(field.to_string())
                }
            })
            .collect();
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_sniff_comma_delimiter() {
        let content = "Variant SKU,Title,Qty\nSKU-1,Candle,5\nSKU-2,Mug,3\n";
        assert_eq!(sniff_delimiter(content), b',');
    }

    #[test]
    fn test_sniff_semicolon_delimiter() {
        let content = "Código Producto;Cant. Disponible\nSKU-1;5\nSKU-2;3\n";
        assert_eq!(sniff_delimiter(content), b';');
    }

    #[test]
    fn test_sniff_tab_delimiter() {
        let content = "Variant SKU\tQty\nSKU-1\t5\nSKU-2\t3\n";
        assert_eq!(sniff_delimiter(content), b'\t');
    }

    #[test]
    fn test_sniff_pipe_delimiter() {
        let content = "Variant SKU|Qty\nSKU-1|5\nSKU-2|3\n";
        assert_eq!(sniff_delimiter(content), b'|');
    }

    #[test]
    fn test_sniff_semicolon_with_commas_in_quoted_values() {
        let content =
            "Código Producto;Descripción\nSKU-1;\"Vela, aromática\"\nSKU-2;\"Taza, grande\"\n";
        assert_eq!(sniff_delimiter(content), b';');
    }

    #[test]
    fn test_sniff_ignores_delimiterless_banner_lines() {
        // Warehouse exports open with banner rows that contain no separator
        let content = "Inventario CEDI\nCorte: 2026-08-01\n\nCódigo Producto;Cant. Disponible\nSKU-1;5\nSKU-2;3\n";
        assert_eq!(sniff_delimiter(content), b';');
    }

    #[test]
    fn test_windows_1252_fallback() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stock.csv");
        // "Código Producto" with 0xF3 for ó, invalid as UTF-8
        fs::write(&path, b"C\xf3digo Producto;Cant. Disponible\nSKU-1;5\n").unwrap();

        let content = read_file_as_utf8(&path).unwrap();
        assert!(content.contains("Código Producto"), "got: {content}");
    }

    #[test]
    fn test_empty_fields_become_empty_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        fs::write(&path, "Variant SKU,Title,Qty\nSKU-1,,5\n").unwrap();

        let rows = load_rows(&path).unwrap();
        assert_eq!(rows[1][0], Cell::Text("SKU-1".into()));
        assert_eq!(rows[1][1], Cell::Empty);
        assert_eq!(rows[1][2], Cell::Text("5".into()));
    }

    #[test]
    fn test_ragged_rows_keep_their_widths() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ragged.csv");
        fs::write(&path, "a,b,c\nd\ne,f\n").unwrap();

        let rows = load_rows(&path).unwrap();
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1].len(), 1);
        assert_eq!(rows[2].len(), 2);
    }
}
