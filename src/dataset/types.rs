//! In-memory tabular dataset types.
//!
//! A [`Dataset`] is an ordered sequence of named, typed columns sharing one
//! row count. Missing values are a distinguished [`Cell::Missing`] marker,
//! never an absent cell, so the equal-length invariant always holds.

use crate::error::{DatabotError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell in a column.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub enum Cell {
    /// Missing value marker.
    #[default]
    Missing,

    /// Signed integer (up to i64).
    Int(i64),

    /// Floating point number.
    Float(f64),

    /// Text value.
    Text(String),
}

impl Cell {
    /// Returns true if this cell is the missing marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Returns the cell as a float, if it holds numeric data.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Converts the cell to its display representation.
    pub fn to_display_string(&self) -> String {
        match self {
            Cell::Missing => "NULL".to_string(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) => crate::commands::output::fmt_float(*f),
            Cell::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}

impl From<i64> for Cell {
    fn from(v: i64) -> Self {
        Cell::Int(v)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Float(v)
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

impl<T> From<Option<T>> for Cell
where
    T: Into<Cell>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Cell::Missing,
        }
    }
}

/// Inferred type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// All non-missing cells are integers.
    Int,
    /// All non-missing cells are floats (or a mix of ints and floats).
    Float,
    /// At least one non-missing cell is text.
    Text,
}

impl ColumnKind {
    /// Returns the display name of this type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int => "integer",
            Self::Float => "float",
            Self::Text => "text",
        }
    }

    /// Returns true if the type carries numeric semantics.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }
}

/// A named, homogeneously typed sequence of cells.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    name: String,
    kind: ColumnKind,
    cells: Vec<Cell>,
}

impl Column {
    /// Creates a column from a name, inferred kind, and cells.
    pub fn new(name: impl Into<String>, kind: ColumnKind, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            kind,
            cells,
        }
    }

    /// Convenience constructor for an integer column.
    pub fn from_ints(name: impl Into<String>, values: Vec<Option<i64>>) -> Self {
        let cells = values.into_iter().map(Cell::from).collect();
        Self::new(name, ColumnKind::Int, cells)
    }

    /// Convenience constructor for a float column.
    pub fn from_floats(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        let cells = values.into_iter().map(Cell::from).collect();
        Self::new(name, ColumnKind::Float, cells)
    }

    /// Convenience constructor for a text column.
    pub fn from_texts(name: impl Into<String>, values: Vec<Option<&str>>) -> Self {
        let cells = values.into_iter().map(Cell::from).collect();
        Self::new(name, ColumnKind::Text, cells)
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inferred column type.
    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// Number of cells, including missing markers.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells in row order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns true if the column holds numeric data.
    pub fn is_numeric(&self) -> bool {
        self.kind.is_numeric()
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_missing()).count()
    }

    /// Non-missing values as floats, in row order.
    ///
    /// Empty for text columns.
    pub fn numeric_values(&self) -> Vec<f64> {
        self.cells.iter().filter_map(Cell::as_f64).collect()
    }

    /// Every cell as an optional float, in row order.
    ///
    /// Used for pairwise-complete computations where row alignment matters.
    pub fn f64_cells(&self) -> Vec<Option<f64>> {
        self.cells.iter().map(Cell::as_f64).collect()
    }
}

/// An in-memory tabular dataset.
///
/// Created wholesale on ingestion and replaced wholesale on the next upload;
/// commands only ever borrow it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Creates a dataset from columns, enforcing the shared row count.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for col in &columns {
                if col.len() != expected {
                    return Err(DatabotError::dataset(format!(
                        "column '{}' has {} rows, expected {}",
                        col.name(),
                        col.len(),
                        expected
                    )));
                }
            }
        }
        Ok(Self { columns })
    }

    /// All columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by name (case-sensitive).
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Column names in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// Numeric columns in declaration order.
    pub fn numeric_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.is_numeric()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample() -> Dataset {
        Dataset::new(vec![
            Column::from_ints("id", vec![Some(1), Some(2), Some(3)]),
            Column::from_floats("price", vec![Some(9.5), None, Some(20.0)]),
            Column::from_texts("city", vec![Some("Oslo"), Some("Lima"), None]),
        ])
        .unwrap()
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Missing.to_display_string(), "NULL");
        assert_eq!(Cell::Int(42).to_display_string(), "42");
        assert_eq!(Cell::Float(2.5).to_display_string(), "2.5");
        assert_eq!(Cell::Text("hello".to_string()).to_display_string(), "hello");
    }

    #[test]
    fn test_cell_as_f64() {
        assert_eq!(Cell::Int(3).as_f64(), Some(3.0));
        assert_eq!(Cell::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(Cell::Text("x".to_string()).as_f64(), None);
        assert_eq!(Cell::Missing.as_f64(), None);
    }

    #[test]
    fn test_cell_from_conversions() {
        assert_eq!(Cell::from(42i64), Cell::Int(42));
        assert_eq!(Cell::from(2.5f64), Cell::Float(2.5));
        assert_eq!(Cell::from("hi"), Cell::Text("hi".to_string()));
        assert_eq!(Cell::from(None::<i64>), Cell::Missing);
        assert_eq!(Cell::from(Some(7i64)), Cell::Int(7));
    }

    #[test]
    fn test_column_kind_names() {
        assert_eq!(ColumnKind::Int.type_name(), "integer");
        assert_eq!(ColumnKind::Float.type_name(), "float");
        assert_eq!(ColumnKind::Text.type_name(), "text");
        assert!(ColumnKind::Int.is_numeric());
        assert!(ColumnKind::Float.is_numeric());
        assert!(!ColumnKind::Text.is_numeric());
    }

    #[test]
    fn test_column_missing_count() {
        let df = sample();
        assert_eq!(df.column("id").unwrap().missing_count(), 0);
        assert_eq!(df.column("price").unwrap().missing_count(), 1);
        assert_eq!(df.column("city").unwrap().missing_count(), 1);
    }

    #[test]
    fn test_column_numeric_values_skip_missing() {
        let df = sample();
        assert_eq!(df.column("price").unwrap().numeric_values(), vec![9.5, 20.0]);
        assert!(df.column("city").unwrap().numeric_values().is_empty());
    }

    #[test]
    fn test_dataset_shape() {
        let df = sample();
        assert_eq!(df.n_rows(), 3);
        assert_eq!(df.n_cols(), 3);
        assert_eq!(df.column_names(), vec!["id", "price", "city"]);
    }

    #[test]
    fn test_dataset_numeric_columns() {
        let df = sample();
        let numeric: Vec<&str> = df.numeric_columns().iter().map(|c| c.name()).collect();
        assert_eq!(numeric, vec!["id", "price"]);
    }

    #[test]
    fn test_dataset_rejects_ragged_columns() {
        let result = Dataset::new(vec![
            Column::from_ints("a", vec![Some(1), Some(2)]),
            Column::from_ints("b", vec![Some(1)]),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_dataset() {
        let df = Dataset::new(vec![]).unwrap();
        assert_eq!(df.n_rows(), 0);
        assert_eq!(df.n_cols(), 0);
    }
}
