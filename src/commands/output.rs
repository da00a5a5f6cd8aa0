//! Transport-agnostic reply type and text formatting helpers.
//!
//! A [`Reply`] is what the interpreter hands back to whatever front end sits
//! above it (REPL, HTTP layer, tests): a message, and optionally a reference
//! to a chart artifact. The formatting helpers keep the tabular text output
//! consistent across handlers.

use serde::Serialize;

/// Output of one interpreted command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// User-facing message text.
    pub message: String,

    /// Reference URL of a rendered chart, when the command produced one.
    pub artifact: Option<String>,
}

impl Reply {
    /// Creates a text-only reply.
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            artifact: None,
        }
    }

    /// Creates a reply carrying a chart artifact reference.
    pub fn with_artifact(message: impl Into<String>, artifact: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            artifact: Some(artifact.into()),
        }
    }
}

/// Formats a float for text output: `NaN` stays literal, integral values
/// drop the fraction, everything else keeps up to six decimals with
/// trailing zeros trimmed.
pub fn fmt_float(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return v.to_string();
    }
    if v == v.trunc() && v.abs() < 1e15 {
        return format!("{}", v as i64);
    }
    let s = format!("{v:.6}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Formats name/value pairs as two aligned columns.
pub fn format_pairs<I, S>(pairs: I) -> String
where
    I: IntoIterator<Item = (S, String)>,
    S: AsRef<str>,
{
    let rows: Vec<(String, String)> = pairs
        .into_iter()
        .map(|(name, value)| (name.as_ref().to_string(), value))
        .collect();
    let width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(name, value)| format!("{name:<width$}  {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Formats a header row plus data rows as aligned columns.
pub fn format_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let n_cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(n_cols) {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let format_row = |cells: &[String]| {
        cells
            .iter()
            .enumerate()
            .take(n_cols)
            .map(|(i, cell)| format!("{cell:<width$}", width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(headers)];
    lines.extend(rows.iter().map(|row| format_row(row)));
    lines.join("\n")
}
