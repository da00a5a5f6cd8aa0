//! Help text constants for Databot commands.

/// Fallback help text returned when no command category matches.
pub const HELP_TEXT: &str = "I can help with data analysis and visualization. Try asking about:\n\
- 'null values', 'describe', 'shape', 'data types'\n\
- 'visualize <column>', 'correlation heatmap', 'pairplot'\n\
- 'sort by <column>', 'filter <column> greater than <value>'\n\
- 'value counts of <column>', 'top 5 rows'\n";

/// Fixed message returned when no dataset has been loaded yet.
pub const NO_DATASET: &str = "Please upload a CSV file first.";
