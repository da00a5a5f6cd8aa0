//! Databot - a chat-driven data analysis and visualization engine.
//!
//! The library exposes one core operation: [`commands::process`] interprets
//! a free-text utterance against the current dataset snapshot and returns a
//! textual reply, optionally carrying a chart artifact reference. Everything
//! around it (CSV ingestion, the statistics kernel, chart rendering,
//! configuration) supports that entry point.

pub mod chart;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;

pub use chart::ArtifactStore;
pub use commands::{process, Reply};
pub use dataset::{load_csv, Dataset};
pub use error::{DatabotError, Result};
