//! Command interpretation for Databot.
//!
//! This module separates classification ([`dispatcher`]) from parameter
//! extraction ([`extract`]) and execution ([`handlers`]), so the dispatch
//! order and the extraction rules can each be unit tested in isolation.

pub mod dispatcher;
pub mod extract;
pub mod handlers;
pub mod help;
pub mod output;

pub use dispatcher::{classify, process, Category};
pub use extract::{resolve_column, resolve_threshold, Comparison, ParseError};
pub use output::Reply;
