//! One handler per command category.
//!
//! Handlers are pure functions from (lowercased utterance, dataset) to a
//! [`Reply`]; the visualization handlers additionally take the artifact
//! store and are the only ones with a side effect (one file write). All
//! recoverable failures degrade to guidance text — a handler returning
//! `Err` means something genuinely unexpected (an artifact write failed).

use crate::chart::{self, ArtifactStore};
use crate::commands::extract::{resolve_column, resolve_threshold, Comparison};
use crate::commands::output::{fmt_float, format_pairs, format_table, Reply};
use crate::dataset::{stats, Dataset};
use crate::error::Result;
use tracing::info;

const PREVIEW_ROWS: usize = 10;

/// Per-column missing-value counts.
pub(crate) fn null_report(df: &Dataset) -> Reply {
    let pairs = df
        .columns()
        .iter()
        .map(|c| (c.name(), c.missing_count().to_string()));
    Reply::text(format!("Null values per column:\n{}", format_pairs(pairs)))
}

/// Comma-joined column names.
pub(crate) fn column_list(df: &Dataset) -> Reply {
    Reply::text(format!(
        "Columns in dataset: {}",
        df.column_names().join(", ")
    ))
}

/// Row and column counts.
pub(crate) fn shape(df: &Dataset) -> Reply {
    Reply::text(format!(
        "The dataset has {} rows and {} columns.",
        df.n_rows(),
        df.n_cols()
    ))
}

/// Summary statistics for every numeric column.
pub(crate) fn describe(df: &Dataset) -> Reply {
    let numeric = df.numeric_columns();
    if numeric.is_empty() {
        return Reply::text("The dataset has no numeric columns to describe.");
    }

    let summaries: Vec<(&str, stats::Summary)> = numeric
        .iter()
        .map(|c| (c.name(), stats::summarize(&c.numeric_values())))
        .collect();

    let mut headers = vec![String::new()];
    headers.extend(summaries.iter().map(|(name, _)| name.to_string()));

    let stat_rows: [(&str, fn(&stats::Summary) -> String); 8] = [
        ("count", |s| s.count.to_string()),
        ("mean", |s| fmt_float(s.mean)),
        ("std", |s| fmt_float(s.std)),
        ("min", |s| fmt_float(s.min)),
        ("25%", |s| fmt_float(s.q1)),
        ("50%", |s| fmt_float(s.median)),
        ("75%", |s| fmt_float(s.q3)),
        ("max", |s| fmt_float(s.max)),
    ];

    let rows: Vec<Vec<String>> = stat_rows
        .iter()
        .map(|(label, extract)| {
            let mut row = vec![label.to_string()];
            row.extend(summaries.iter().map(|(_, s)| extract(s)));
            row
        })
        .collect();

    Reply::text(format!("Description:\n{}", format_table(&headers, &rows)))
}

/// Per-column inferred type names.
pub(crate) fn dtypes(df: &Dataset) -> Reply {
    let pairs = df
        .columns()
        .iter()
        .map(|c| (c.name(), c.kind().type_name().to_string()));
    Reply::text(format!("Data types:\n{}", format_pairs(pairs)))
}

/// Per-column distinct non-missing counts.
pub(crate) fn unique_counts(df: &Dataset) -> Reply {
    let pairs = df
        .columns()
        .iter()
        .map(|c| (c.name(), stats::unique_count(c).to_string()));
    Reply::text(format!("Unique values:\n{}", format_pairs(pairs)))
}

/// Pairwise Pearson correlation among numeric columns, as text.
pub(crate) fn correlation_matrix(df: &Dataset) -> Reply {
    let numeric = df.numeric_columns();
    if numeric.is_empty() {
        return Reply::text("The dataset has no numeric columns to correlate.");
    }

    let matrix = stats::correlation_matrix(&numeric);
    let mut headers = vec![String::new()];
    headers.extend(numeric.iter().map(|c| c.name().to_string()));

    let rows: Vec<Vec<String>> = numeric
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let mut row = vec![col.name().to_string()];
            row.extend(matrix[i].iter().map(|v| fmt_float(*v)));
            row
        })
        .collect();

    Reply::text(format!(
        "Correlation matrix:\n{}",
        format_table(&headers, &rows)
    ))
}

/// First 10 non-missing values of the resolved column.
pub(crate) fn extract_values(message: &str, df: &Dataset) -> Reply {
    let Some(column) = resolve_column(message, df) else {
        return Reply::text("Please specify a valid column to extract data from.");
    };
    let values: Vec<String> = column
        .cells()
        .iter()
        .filter(|c| !c.is_missing())
        .take(PREVIEW_ROWS)
        .map(|c| c.to_display_string())
        .collect();
    Reply::text(values.join("\n"))
}

/// Top 10 values after sorting the resolved column ascending.
pub(crate) fn sort_by(message: &str, df: &Dataset) -> Reply {
    let Some(column) = resolve_column(message, df) else {
        return Reply::text("Please specify a valid column to sort by.");
    };

    let mut cells: Vec<&crate::dataset::Cell> = column.cells().iter().collect();
    // Missing markers sort last, numeric cells by value, text lexically
    cells.sort_by(|a, b| match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        _ => match (a, b) {
            (crate::dataset::Cell::Missing, crate::dataset::Cell::Missing) => {
                std::cmp::Ordering::Equal
            }
            (crate::dataset::Cell::Missing, _) => std::cmp::Ordering::Greater,
            (_, crate::dataset::Cell::Missing) => std::cmp::Ordering::Less,
            _ => a.to_display_string().cmp(&b.to_display_string()),
        },
    });

    let shown: Vec<String> = cells
        .iter()
        .take(PREVIEW_ROWS)
        .map(|c| c.to_display_string())
        .collect();
    Reply::text(format!(
        "Sorted data (top 10 by '{}'):\n{}",
        column.name(),
        shown.join("\n")
    ))
}

/// Rows where the resolved numeric column satisfies the threshold comparison.
pub(crate) fn filter(message: &str, df: &Dataset) -> Reply {
    let numeric_column = resolve_column(message, df).filter(|c| c.is_numeric());
    let Some(column) = numeric_column else {
        return Reply::text("Please specify a valid numeric column to filter.");
    };

    let comparison = if message.contains("greater than") {
        Comparison::GreaterThan
    } else if message.contains("less than") {
        Comparison::LessThan
    } else {
        return Reply::text("Please use 'greater than' or 'less than' with a numeric value.");
    };

    let Ok(threshold) = resolve_threshold(message, comparison) else {
        return Reply::text("Couldn't parse the numeric value for filtering. Please try again.");
    };

    let shown: Vec<String> = column
        .cells()
        .iter()
        .filter_map(|c| c.as_f64().filter(|v| comparison.holds(*v, threshold)))
        .take(PREVIEW_ROWS)
        .map(fmt_float)
        .collect();

    Reply::text(format!(
        "Filtered rows where '{}' meets condition:\n{}",
        column.name(),
        shown.join("\n")
    ))
}

/// Top 10 most frequent values of the resolved column.
pub(crate) fn value_counts(message: &str, df: &Dataset) -> Reply {
    let Some(column) = resolve_column(message, df) else {
        return Reply::text("Please specify a valid column to show value counts.");
    };
    let counts = stats::value_counts(column);
    let pairs = counts
        .iter()
        .take(PREVIEW_ROWS)
        .map(|(value, n)| (value.as_str(), n.to_string()));
    Reply::text(format!(
        "Top value counts in '{}':\n{}",
        column.name(),
        format_pairs(pairs)
    ))
}

/// First N rows; N is the first standalone integer token, default 5.
pub(crate) fn top_n(message: &str, df: &Dataset) -> Reply {
    let n = message
        .split_whitespace()
        .find_map(|token| token.parse::<usize>().ok())
        .unwrap_or(5);

    let headers: Vec<String> = df.column_names().iter().map(|s| s.to_string()).collect();
    let rows: Vec<Vec<String>> = (0..df.n_rows().min(n))
        .map(|row| {
            df.columns()
                .iter()
                .map(|c| c.cells()[row].to_display_string())
                .collect()
        })
        .collect();

    Reply::text(format!(
        "Top {n} rows:\n{}",
        format_table(&headers, &rows)
    ))
}

/// Renders the annotated correlation heatmap artifact.
pub(crate) fn correlation_heatmap(df: &Dataset, artifacts: &ArtifactStore) -> Result<Reply> {
    if df.numeric_columns().is_empty() {
        return Ok(Reply::text(
            "The dataset has no numeric columns to correlate.",
        ));
    }
    let artifact = artifacts.fresh("heatmap");
    chart::render_heatmap(df, &artifact.path)?;
    info!(path = %artifact.path.display(), "heatmap artifact written");
    Ok(Reply::with_artifact(
        "Here is the correlation heatmap.",
        artifact.url,
    ))
}

/// Renders the pairwise grid artifact over the first 5 numeric columns.
pub(crate) fn pairplot(df: &Dataset, artifacts: &ArtifactStore) -> Result<Reply> {
    if df.numeric_columns().is_empty() {
        return Ok(Reply::text(
            "The dataset has no numeric columns to correlate.",
        ));
    }
    let artifact = artifacts.fresh("pairplot");
    chart::render_pairplot(df, &artifact.path)?;
    info!(path = %artifact.path.display(), "pairplot artifact written");
    Ok(Reply::with_artifact(
        "Here is the pairplot of the first few numeric columns.",
        artifact.url,
    ))
}

/// Renders the 2×2 composite chart artifact for the resolved column.
pub(crate) fn visualize(
    message: &str,
    df: &Dataset,
    artifacts: &ArtifactStore,
) -> Result<Reply> {
    let Some(column) = resolve_column(message, df) else {
        return Ok(Reply::text("Please specify a valid column name to visualize."));
    };
    if !column.is_numeric() {
        return Ok(Reply::text("Please specify a numeric column to visualize."));
    }
    if column.numeric_values().is_empty() {
        return Ok(Reply::text(format!(
            "Column '{}' has no data to visualize.",
            column.name()
        )));
    }

    let artifact = artifacts.fresh("");
    chart::render_composite(column, &artifact.path)?;
    info!(path = %artifact.path.display(), column = column.name(), "composite artifact written");
    Ok(Reply::with_artifact(
        format!("Here is the visualization of column '{}'.", column.name()),
        artifact.url,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Column;
    use pretty_assertions::assert_eq;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Column::from_ints("id", vec![Some(1), Some(2), Some(3), Some(4)]),
            Column::from_floats("price", vec![Some(9.5), Some(20.0), None, Some(11.0)]),
            Column::from_texts("city", vec![Some("Oslo"), Some("Lima"), Some("Oslo"), None]),
        ])
        .unwrap()
    }

    #[test]
    fn test_null_report() {
        let reply = null_report(&sample());
        assert_eq!(
            reply.message,
            "Null values per column:\nid     0\nprice  1\ncity   1"
        );
    }

    #[test]
    fn test_column_list() {
        let reply = column_list(&sample());
        assert_eq!(reply.message, "Columns in dataset: id, price, city");
    }

    #[test]
    fn test_shape() {
        let reply = shape(&sample());
        assert_eq!(reply.message, "The dataset has 4 rows and 3 columns.");
    }

    #[test]
    fn test_describe_covers_numeric_columns_only() {
        let reply = describe(&sample());
        assert!(reply.message.starts_with("Description:\n"));
        assert!(reply.message.contains("id"));
        assert!(reply.message.contains("price"));
        assert!(!reply.message.contains("city"));
        assert!(reply.message.contains("count"));
        assert!(reply.message.contains("50%"));
    }

    #[test]
    fn test_describe_without_numeric_columns() {
        let df = Dataset::new(vec![Column::from_texts("tag", vec![Some("x")])]).unwrap();
        let reply = describe(&df);
        assert_eq!(
            reply.message,
            "The dataset has no numeric columns to describe."
        );
    }

    #[test]
    fn test_dtypes() {
        let reply = dtypes(&sample());
        assert_eq!(
            reply.message,
            "Data types:\nid     integer\nprice  float\ncity   text"
        );
    }

    #[test]
    fn test_unique_counts() {
        let reply = unique_counts(&sample());
        assert_eq!(
            reply.message,
            "Unique values:\nid     4\nprice  3\ncity   2"
        );
    }

    #[test]
    fn test_correlation_matrix_diagonal_is_one() {
        let reply = correlation_matrix(&sample());
        assert!(reply.message.starts_with("Correlation matrix:\n"));
        // The id/id entry is exactly 1
        assert!(reply.message.contains('1'));
    }

    #[test]
    fn test_extract_skips_missing_and_caps_at_ten() {
        let df = Dataset::new(vec![Column::from_ints(
            "n",
            (0..15).map(|i| if i == 2 { None } else { Some(i) }).collect(),
        )])
        .unwrap();
        let reply = extract_values("sample n", &df);
        let lines: Vec<&str> = reply.message.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "0");
        assert!(!reply.message.contains("NULL"));
    }

    #[test]
    fn test_extract_unresolved_column() {
        let reply = extract_values("extract xyzzy", &sample());
        assert_eq!(
            reply.message,
            "Please specify a valid column to extract data from."
        );
    }

    #[test]
    fn test_sort_by_ascending_missing_last() {
        let reply = sort_by("sort by price", &sample());
        assert_eq!(
            reply.message,
            "Sorted data (top 10 by 'price'):\n9.5\n11\n20\nNULL"
        );
    }

    #[test]
    fn test_sort_by_unresolved_column() {
        let reply = sort_by("sort by nothing here", &sample());
        assert_eq!(reply.message, "Please specify a valid column to sort by.");
    }

    #[test]
    fn test_filter_greater_than() {
        let reply = filter("filter price greater than 10", &sample());
        assert_eq!(
            reply.message,
            "Filtered rows where 'price' meets condition:\n20\n11"
        );
    }

    #[test]
    fn test_filter_less_than() {
        let reply = filter("filter price less than 10", &sample());
        assert_eq!(
            reply.message,
            "Filtered rows where 'price' meets condition:\n9.5"
        );
    }

    #[test]
    fn test_filter_non_numeric_column() {
        let reply = filter("filter city greater than 3", &sample());
        assert_eq!(
            reply.message,
            "Please specify a valid numeric column to filter."
        );
    }

    #[test]
    fn test_filter_unparseable_threshold() {
        let reply = filter("filter price greater than abc", &sample());
        assert_eq!(
            reply.message,
            "Couldn't parse the numeric value for filtering. Please try again."
        );
    }

    #[test]
    fn test_filter_without_comparison_phrase() {
        let reply = filter("filter price somehow", &sample());
        assert_eq!(
            reply.message,
            "Please use 'greater than' or 'less than' with a numeric value."
        );
    }

    #[test]
    fn test_value_counts() {
        let reply = value_counts("value counts of city", &sample());
        assert_eq!(
            reply.message,
            "Top value counts in 'city':\nOslo  2\nLima  1"
        );
    }

    #[test]
    fn test_top_n_default_five() {
        let df = Dataset::new(vec![Column::from_ints(
            "n",
            (0..8).map(Some).collect(),
        )])
        .unwrap();
        let reply = top_n("top rows", &df);
        assert!(reply.message.starts_with("Top 5 rows:\n"));
        // header + 5 data rows
        assert_eq!(reply.message.lines().count(), 7);
    }

    #[test]
    fn test_top_n_explicit() {
        let df = Dataset::new(vec![Column::from_ints(
            "n",
            (0..8).map(Some).collect(),
        )])
        .unwrap();
        let reply = top_n("top 3 rows", &df);
        assert!(reply.message.starts_with("Top 3 rows:\n"));
        assert_eq!(reply.message.lines().count(), 5);
    }

    #[test]
    fn test_top_n_clamped_to_row_count() {
        let reply = top_n("top 100 rows", &sample());
        // header + 4 data rows
        assert_eq!(reply.message.lines().count(), 6);
    }
}
