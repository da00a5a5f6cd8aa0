//! Utterance classification and dispatch.
//!
//! Classification is a strictly ordered first-match-wins chain of substring
//! predicates over the lowercased utterance. The order is semantic, not
//! cosmetic: several triggers can hold at once ("correlation heatmap" also
//! contains "correlation"; "shape and describe" holds two predicates), and
//! priority decides the winner. Reordering this table changes behavior.

use super::{handlers, help};
use crate::chart::ArtifactStore;
use crate::commands::output::Reply;
use crate::dataset::Dataset;
use crate::error::Result;
use tracing::debug;

/// The fixed set of recognized command categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    NullReport,
    ColumnList,
    Shape,
    Describe,
    Dtypes,
    UniqueCounts,
    CorrelationHeatmap,
    Pairplot,
    CorrelationMatrix,
    Extract,
    Sort,
    Filter,
    ValueCounts,
    TopN,
    Visualize,
}

/// Dispatch table in priority order. A category matches when any of its
/// trigger substrings occurs in the lowercased utterance.
pub const DISPATCH_ORDER: &[(Category, &[&str])] = &[
    (Category::NullReport, &["null"]),
    (Category::ColumnList, &["columns"]),
    (Category::Shape, &["shape", "size"]),
    (Category::Describe, &["describe"]),
    (Category::Dtypes, &["dtypes", "data types"]),
    (Category::UniqueCounts, &["unique"]),
    (Category::CorrelationHeatmap, &["correlation heatmap"]),
    (Category::Pairplot, &["pairplot"]),
    (Category::CorrelationMatrix, &["correlation"]),
    (Category::Extract, &["extract", "sample"]),
    (Category::Sort, &["sort by"]),
    (Category::Filter, &["filter", "greater than", "less than"]),
    (Category::ValueCounts, &["value counts"]),
    (Category::TopN, &["top"]),
    (Category::Visualize, &["visualize", "plot", "graph"]),
];

/// Classifies a lowercased utterance into a category, or `None` when no
/// trigger matches (the caller replies with help text).
pub fn classify(message: &str) -> Option<Category> {
    for (category, triggers) in DISPATCH_ORDER {
        if triggers.iter().any(|t| message.contains(t)) {
            return Some(*category);
        }
    }
    None
}

/// Interprets one utterance against the current dataset snapshot.
///
/// The single entry point of the interpreter. Every recoverable failure
/// (no dataset, unknown command, unresolvable column, bad threshold) becomes
/// reply text; `Err` is reserved for unexpected internal failures such as an
/// artifact write going wrong, which the caller degrades to a generic
/// response.
pub fn process(
    utterance: &str,
    dataset: Option<&Dataset>,
    artifacts: &ArtifactStore,
) -> Result<Reply> {
    let Some(df) = dataset else {
        return Ok(Reply::text(help::NO_DATASET));
    };

    let message = utterance.to_lowercase();
    let category = classify(&message);
    debug!(?category, utterance, "classified");

    let Some(category) = category else {
        return Ok(Reply::text(help::HELP_TEXT));
    };

    match category {
        Category::NullReport => Ok(handlers::null_report(df)),
        Category::ColumnList => Ok(handlers::column_list(df)),
        Category::Shape => Ok(handlers::shape(df)),
        Category::Describe => Ok(handlers::describe(df)),
        Category::Dtypes => Ok(handlers::dtypes(df)),
        Category::UniqueCounts => Ok(handlers::unique_counts(df)),
        Category::CorrelationHeatmap => handlers::correlation_heatmap(df, artifacts),
        Category::Pairplot => handlers::pairplot(df, artifacts),
        Category::CorrelationMatrix => Ok(handlers::correlation_matrix(df)),
        Category::Extract => Ok(handlers::extract_values(&message, df)),
        Category::Sort => Ok(handlers::sort_by(&message, df)),
        Category::Filter => Ok(handlers::filter(&message, df)),
        Category::ValueCounts => Ok(handlers::value_counts(&message, df)),
        Category::TopN => Ok(handlers::top_n(&message, df)),
        Category::Visualize => handlers::visualize(&message, df, artifacts),
    }
}
