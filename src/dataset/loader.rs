//! CSV ingestion with per-column type inference.
//!
//! The loader reads the whole file, then infers each column's type from its
//! non-empty cells: all integers ⇒ integer, all numeric ⇒ float, otherwise
//! text. Empty cells become the missing marker in every case.

use crate::dataset::types::{Cell, Column, ColumnKind, Dataset};
use crate::error::{DatabotError, Result};
use std::path::Path;
use tracing::info;

/// Loads a CSV file into a [`Dataset`].
///
/// The first record is treated as the header row. Ragged records are an
/// ingest error, which keeps the dataset's equal-length invariant intact.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| DatabotError::ingest(format!("{}: {e}", path.display())))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| DatabotError::ingest(e.to_string()))?
        .iter()
        .map(str::to_string)
        .collect();

    // The reader rejects ragged records itself, so every record seen here
    // has exactly headers.len() fields.
    let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(|e| DatabotError::ingest(e.to_string()))?;
        for (i, field) in record.iter().enumerate() {
            raw[i].push(field.to_string());
        }
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(raw)
        .map(|(name, cells)| build_column(name, cells))
        .collect();

    let dataset = Dataset::new(columns)?;
    info!(
        rows = dataset.n_rows(),
        cols = dataset.n_cols(),
        file = %path.display(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Infers a column type from raw string cells and converts them.
fn build_column(name: String, raw: Vec<String>) -> Column {
    let kind = infer_kind(&raw);
    let cells = raw
        .into_iter()
        .map(|field| {
            let trimmed = field.trim();
            if trimmed.is_empty() {
                return Cell::Missing;
            }
            match kind {
                ColumnKind::Int => match trimmed.parse::<i64>() {
                    Ok(v) => Cell::Int(v),
                    Err(_) => Cell::Missing,
                },
                ColumnKind::Float => match trimmed.parse::<f64>() {
                    Ok(v) => Cell::Float(v),
                    Err(_) => Cell::Missing,
                },
                ColumnKind::Text => Cell::Text(field),
            }
        })
        .collect();
    Column::new(name, kind, cells)
}

fn infer_kind(raw: &[String]) -> ColumnKind {
    let mut saw_value = false;
    let mut all_int = true;
    let mut all_float = true;
    for field in raw {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            continue;
        }
        saw_value = true;
        if trimmed.parse::<i64>().is_err() {
            all_int = false;
        }
        if trimmed.parse::<f64>().is_err() {
            all_float = false;
            break;
        }
    }
    // A column of nothing but missing markers stays text
    if !saw_value {
        ColumnKind::Text
    } else if all_int {
        ColumnKind::Int
    } else if all_float {
        ColumnKind::Float
    } else {
        ColumnKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_infers_types() {
        let file = write_csv("id,price,city\n1,9.5,Oslo\n2,12,Lima\n3,20.0,Quito\n");
        let df = load_csv(file.path()).unwrap();

        assert_eq!(df.n_rows(), 3);
        assert_eq!(df.n_cols(), 3);
        assert_eq!(df.column("id").unwrap().kind(), ColumnKind::Int);
        assert_eq!(df.column("price").unwrap().kind(), ColumnKind::Float);
        assert_eq!(df.column("city").unwrap().kind(), ColumnKind::Text);
    }

    #[test]
    fn test_load_empty_cells_become_missing() {
        let file = write_csv("a,b\n1,x\n,y\n3,\n");
        let df = load_csv(file.path()).unwrap();

        assert_eq!(df.column("a").unwrap().missing_count(), 1);
        assert_eq!(df.column("b").unwrap().missing_count(), 1);
        // Missing cells do not demote an otherwise-integer column
        assert_eq!(df.column("a").unwrap().kind(), ColumnKind::Int);
    }

    #[test]
    fn test_load_mixed_numeric_is_float() {
        let file = write_csv("v\n1\n2.5\n3\n");
        let df = load_csv(file.path()).unwrap();
        assert_eq!(df.column("v").unwrap().kind(), ColumnKind::Float);
        assert_eq!(df.column("v").unwrap().numeric_values(), vec![1.0, 2.5, 3.0]);
    }

    #[test]
    fn test_load_all_missing_column_is_text() {
        let file = write_csv("a,b\n1,\n2,\n");
        let df = load_csv(file.path()).unwrap();
        assert_eq!(df.column("b").unwrap().kind(), ColumnKind::Text);
        assert_eq!(df.column("b").unwrap().missing_count(), 2);
    }

    #[test]
    fn test_load_headers_only() {
        let file = write_csv("x,y\n");
        let df = load_csv(file.path()).unwrap();
        assert_eq!(df.n_rows(), 0);
        assert_eq!(df.n_cols(), 2);
    }

    #[test]
    fn test_load_missing_file_is_ingest_error() {
        let result = load_csv(Path::new("/nonexistent/data.csv"));
        assert!(matches!(result, Err(crate::error::DatabotError::Ingest(_))));
    }
}
