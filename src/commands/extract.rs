//! Column and numeric-threshold extraction from free text.
//!
//! Column resolution is a two-pass substring match that deliberately favors
//! recall over precision: a pluralized or partial column reference still
//! resolves, at the cost of false positives when column names overlap or are
//! very short. That trade-off is intentional and pinned by tests; do not
//! tighten it to whole-word matching.

use crate::dataset::{Column, Dataset};
use regex::Regex;
use thiserror::Error;

/// Comparison keyword recognized by the filter command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    GreaterThan,
    LessThan,
}

impl Comparison {
    /// The phrase this comparison matches in an utterance.
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::GreaterThan => "greater than",
            Self::LessThan => "less than",
        }
    }

    /// Applies the comparison.
    pub fn holds(&self, value: f64, threshold: f64) -> bool {
        match self {
            Self::GreaterThan => value > threshold,
            Self::LessThan => value < threshold,
        }
    }
}

/// Failure to find a numeric threshold after a comparison phrase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no numeric value found after '{phrase}'")]
pub struct ParseError {
    phrase: &'static str,
}

/// Resolves which column an utterance refers to.
///
/// Pass 1 scans columns in declaration order and returns the first whose
/// full name (case-insensitive) appears as a substring of the utterance.
/// Pass 2 runs only when pass 1 finds nothing: the utterance is split into
/// word tokens, and the first column containing any token as a substring
/// wins (columns outer, tokens inner, both in order).
pub fn resolve_column<'a>(utterance: &str, dataset: &'a Dataset) -> Option<&'a Column> {
    let message = utterance.to_lowercase();

    for column in dataset.columns() {
        if message.contains(&column.name().to_lowercase()) {
            return Some(column);
        }
    }

    let Ok(word) = Regex::new(r"\w+") else {
        return None;
    };
    let tokens: Vec<&str> = word.find_iter(&message).map(|m| m.as_str()).collect();
    for column in dataset.columns() {
        let name = column.name().to_lowercase();
        for token in &tokens {
            if name.contains(token) {
                return Some(column);
            }
        }
    }

    None
}

/// Parses the decimal numeral immediately following a comparison phrase.
///
/// Accepts integers and simple fractions ("12", "12.5", ".5"). Callers are
/// expected to catch the error and reply with a user-facing message rather
/// than propagate it.
pub fn resolve_threshold(utterance: &str, comparison: Comparison) -> Result<f64, ParseError> {
    let phrase = comparison.phrase();
    let err = ParseError { phrase };

    let pattern = format!(r"{phrase} (\d*\.?\d+)");
    let re = Regex::new(&pattern).map_err(|_| err.clone())?;
    let lowered = utterance.to_lowercase();
    let capture = re
        .captures(&lowered)
        .and_then(|c| c.get(1))
        .ok_or_else(|| err.clone())?;
    capture.as_str().parse::<f64>().map_err(|_| err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Column, Dataset};

    fn dataset(names: &[&str]) -> Dataset {
        let columns = names
            .iter()
            .map(|name| Column::from_ints(*name, vec![Some(1)]))
            .collect();
        Dataset::new(columns).unwrap()
    }

    #[test]
    fn test_exact_pass_matches_full_name() {
        let df = dataset(&["id", "price"]);
        let col = resolve_column("show me the price column", &df).unwrap();
        assert_eq!(col.name(), "price");
    }

    #[test]
    fn test_exact_pass_is_case_insensitive() {
        let df = dataset(&["Price"]);
        let col = resolve_column("sort by PRICE", &df).unwrap();
        assert_eq!(col.name(), "Price");
    }

    #[test]
    fn test_exact_pass_first_declared_wins_on_substring() {
        // "age" is a substring of "show ages", so the earlier column wins
        // even though "ages" matches exactly.
        let df = dataset(&["age", "ages"]);
        let col = resolve_column("show ages", &df).unwrap();
        assert_eq!(col.name(), "age");
    }

    #[test]
    fn test_fallback_pass_matches_token_inside_column_name() {
        let df = dataset(&["unit_price"]);
        let col = resolve_column("sort by price", &df).unwrap();
        assert_eq!(col.name(), "unit_price");
    }

    #[test]
    fn test_fallback_prefers_earlier_column_over_earlier_token() {
        // Tokens "beta" then "alpha"; columns "alpha" then "beta".
        // Columns are the outer loop, so "alpha" wins.
        let df = dataset(&["alphabet", "betamax"]);
        let col = resolve_column("beta alpha", &df).unwrap();
        assert_eq!(col.name(), "alphabet");
    }

    #[test]
    fn test_no_match_returns_none() {
        let df = dataset(&["price", "amount"]);
        assert!(resolve_column("describe xyz", &df).is_none());
    }

    #[test]
    fn test_threshold_parses_integer_and_fraction() {
        assert_eq!(
            resolve_threshold("filter price greater than 12", Comparison::GreaterThan),
            Ok(12.0)
        );
        assert_eq!(
            resolve_threshold("filter price greater than 12.5", Comparison::GreaterThan),
            Ok(12.5)
        );
        assert_eq!(
            resolve_threshold("rows less than .5 please", Comparison::LessThan),
            Ok(0.5)
        );
    }

    #[test]
    fn test_threshold_missing_numeral_is_parse_error() {
        let result = resolve_threshold("filter price greater than abc", Comparison::GreaterThan);
        assert!(result.is_err());

        let result = resolve_threshold("filter price greater than", Comparison::GreaterThan);
        assert!(result.is_err());
    }

    #[test]
    fn test_threshold_requires_matching_phrase() {
        let result = resolve_threshold("filter price above 12", Comparison::GreaterThan);
        assert!(result.is_err());
    }

    #[test]
    fn test_comparison_holds() {
        assert!(Comparison::GreaterThan.holds(13.0, 12.5));
        assert!(!Comparison::GreaterThan.holds(12.5, 12.5));
        assert!(Comparison::LessThan.holds(12.0, 12.5));
    }
}
