//! Command-line argument parsing for Databot.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// A chat-driven data analysis and visualization engine for tabular data.
#[derive(Parser, Debug)]
#[command(name = "databot")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// CSV file to load at startup
    #[arg(value_name = "CSV_FILE")]
    pub data: Option<PathBuf>,

    /// Directory chart artifacts are written into (overrides config)
    #[arg(short = 'a', long, value_name = "DIR")]
    pub artifacts_dir: Option<PathBuf>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run a single command and exit instead of starting the REPL
    #[arg(short = 'c', long, value_name = "COMMAND")]
    pub command: Option<String>,

    /// Print the one-shot reply as JSON (requires --command)
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_path)
    }

    /// Returns true if one-shot mode is requested.
    pub fn is_one_shot(&self) -> bool {
        self.command.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Cli {
        Cli::parse_from(args)
    }

    #[test]
    fn test_parse_data_file() {
        let cli = parse_args(&["databot", "sales.csv"]);
        assert_eq!(cli.data, Some(PathBuf::from("sales.csv")));
    }

    #[test]
    fn test_parse_no_args() {
        let cli = parse_args(&["databot"]);
        assert_eq!(cli.data, None);
        assert_eq!(cli.artifacts_dir, None);
        assert!(!cli.is_one_shot());
        assert!(!cli.json);
    }

    #[test]
    fn test_parse_artifacts_dir() {
        let cli = parse_args(&["databot", "--artifacts-dir", "/tmp/charts"]);
        assert_eq!(cli.artifacts_dir, Some(PathBuf::from("/tmp/charts")));

        let cli = parse_args(&["databot", "-a", "out"]);
        assert_eq!(cli.artifacts_dir, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_parse_config_path() {
        let cli = parse_args(&["databot", "--config", "/path/to/config.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.toml")));
        assert_eq!(cli.config_path(), PathBuf::from("/path/to/config.toml"));
    }

    #[test]
    fn test_parse_one_shot_command() {
        let cli = parse_args(&["databot", "data.csv", "--command", "describe"]);
        assert!(cli.is_one_shot());
        assert_eq!(cli.command.as_deref(), Some("describe"));

        let cli = parse_args(&["databot", "data.csv", "-c", "top 3 rows"]);
        assert_eq!(cli.command.as_deref(), Some("top 3 rows"));
    }

    #[test]
    fn test_parse_json_flag() {
        let cli = parse_args(&["databot", "data.csv", "-c", "shape", "--json"]);
        assert!(cli.json);
    }
}
