//! CSV loading
//!
//! Reads an uploaded sales export into a [`RawTable`]. Inputs are decoded as
//! Latin-1, the encoding the source systems emit; every byte is a valid
//! Latin-1 scalar, so decoding itself never fails and malformed input
//! surfaces as a CSV structure error instead.

use csv::ReaderBuilder;

use crate::error::{SalescastError, SalescastResult};
use crate::services::detect;

/// An untyped table straight out of the CSV reader
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find a column by name, exact match first, then case-insensitive
    pub fn column_index(&self, name: &str) -> Option<usize> {
        if let Some(idx) = self.headers.iter().position(|h| h == name) {
            return Some(idx);
        }
        let lowered = name.trim().to_lowercase();
        self.headers
            .iter()
            .position(|h| h.trim().to_lowercase() == lowered)
    }
}

/// Which columns the user asked for, by name; `None` means auto-detect
#[derive(Debug, Clone, Default)]
pub struct ColumnSpec {
    pub date: Option<String>,
    pub sales: Option<String>,
    pub category: Option<String>,
}

/// Column indices the pipeline will read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub date: usize,
    pub sales: usize,
    pub category: Option<usize>,
}

/// Decode Latin-1 bytes into a String
///
/// Latin-1 maps each byte to the Unicode scalar of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Parse CSV bytes into a [`RawTable`]
///
/// The first row is the header row. Ragged rows and broken quoting are
/// reported as [`SalescastError::Parse`].
pub fn load_csv(bytes: &[u8]) -> SalescastResult<RawTable> {
    let text = decode_latin1(bytes);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| SalescastError::Parse(e.to_string()))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.is_empty() {
        return Err(SalescastError::Parse("input has no header row".into()));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| SalescastError::Parse(e.to_string()))?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    Ok(RawTable { headers, rows })
}

/// Resolve the working columns against the header row
///
/// Explicitly named columns must exist; the error names every column that is
/// missing. Unnamed date/sales columns fall back to keyword auto-detection,
/// and a failed detection names the logical column instead.
pub fn resolve_columns(table: &RawTable, spec: &ColumnSpec) -> SalescastResult<ResolvedColumns> {
    let mut missing = Vec::new();

    let date = match &spec.date {
        Some(name) => {
            let idx = table.column_index(name);
            if idx.is_none() {
                missing.push(name.clone());
            }
            idx
        }
        None => {
            let idx = detect::detect_date_column(&table.headers);
            if idx.is_none() {
                missing.push("a date column".to_string());
            }
            idx
        }
    };

    let sales = match &spec.sales {
        Some(name) => {
            let idx = table.column_index(name);
            if idx.is_none() {
                missing.push(name.clone());
            }
            idx
        }
        None => {
            let idx = detect::detect_sales_column(&table.headers);
            if idx.is_none() {
                missing.push("a sales column".to_string());
            }
            idx
        }
    };

    // The category column is optional, but a name the user typed must exist
    let category = match &spec.category {
        Some(name) => {
            let idx = table.column_index(name);
            if idx.is_none() {
                missing.push(name.clone());
            }
            idx
        }
        None => None,
    };

    if !missing.is_empty() {
        return Err(SalescastError::Schema { missing });
    }

    Ok(ResolvedColumns {
        date: date.unwrap(),
        sales: sales.unwrap(),
        category,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: &[u8] = b"Order Date,Sales,Category\n2024-01-05,100.00,Furniture\n2024-01-20,50.00,Office\n";

    #[test]
    fn test_load_simple_csv() {
        let table = load_csv(SIMPLE).unwrap();
        assert_eq!(table.headers, vec!["Order Date", "Sales", "Category"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0][1], "100.00");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Café" with an actual 0xE9 byte, as a legacy export would have it
        let bytes = b"Name,Sales\nCaf\xe9,10\n";
        let table = load_csv(bytes).unwrap();
        assert_eq!(table.rows[0][0], "Café");
    }

    #[test]
    fn test_broken_quoting_is_parse_error() {
        let bytes = b"Order Date,Sales\n\"2024-01-05,100\n2024-01-06,50\n";
        let err = load_csv(bytes).unwrap_err();
        assert!(matches!(err, SalescastError::Parse(_)));
    }

    #[test]
    fn test_ragged_row_is_parse_error() {
        let bytes = b"Order Date,Sales\n2024-01-05,100,extra\n";
        let err = load_csv(bytes).unwrap_err();
        assert!(matches!(err, SalescastError::Parse(_)));
    }

    #[test]
    fn test_resolve_explicit_columns() {
        let table = load_csv(SIMPLE).unwrap();
        let spec = ColumnSpec {
            date: Some("Order Date".into()),
            sales: Some("Sales".into()),
            category: Some("Category".into()),
        };
        let resolved = resolve_columns(&table, &spec).unwrap();
        assert_eq!(
            resolved,
            ResolvedColumns {
                date: 0,
                sales: 1,
                category: Some(2)
            }
        );
    }

    #[test]
    fn test_resolve_explicit_missing_column() {
        // A file with Sales_Value does not satisfy a required "Sales" schema
        let bytes = b"Order Date,Sales_Value\n2024-01-05,100\n";
        let table = load_csv(bytes).unwrap();
        let spec = ColumnSpec {
            date: Some("Order Date".into()),
            sales: Some("Sales".into()),
            category: None,
        };
        let err = resolve_columns(&table, &spec).unwrap_err();
        match err {
            SalescastError::Schema { missing } => assert_eq!(missing, vec!["Sales".to_string()]),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_auto_detect() {
        let table = load_csv(SIMPLE).unwrap();
        let resolved = resolve_columns(&table, &ColumnSpec::default()).unwrap();
        assert_eq!(resolved.date, 0);
        assert_eq!(resolved.sales, 1);
        assert_eq!(resolved.category, None);
    }

    #[test]
    fn test_resolve_auto_detect_failure_names_logical_columns() {
        let bytes = b"Region,Product\nWest,Chair\n";
        let table = load_csv(bytes).unwrap();
        let err = resolve_columns(&table, &ColumnSpec::default()).unwrap_err();
        match err {
            SalescastError::Schema { missing } => {
                assert_eq!(missing, vec!["a date column", "a sales column"]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_column_index_case_insensitive_fallback() {
        let table = load_csv(SIMPLE).unwrap();
        assert_eq!(table.column_index("order date"), Some(0));
        assert_eq!(table.column_index("Order Date"), Some(0));
        assert_eq!(table.column_index("Nope"), None);
    }
}
