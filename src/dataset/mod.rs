//! In-memory tabular dataset: types, CSV ingestion, and the numeric kernel.

pub mod loader;
pub mod stats;
pub mod types;

pub use loader::load_csv;
pub use types::{Cell, Column, ColumnKind, Dataset};
