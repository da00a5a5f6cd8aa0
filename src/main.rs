//! Databot - a chat-driven data analysis and visualization engine.

use databot::chart::ArtifactStore;
use databot::cli::Cli;
use databot::commands::{process, Reply};
use databot::config::Config;
use databot::dataset::{load_csv, Dataset};
use databot::error::{DatabotError, Result};
use databot::logging;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::Path;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse_args();

    // One-shot mode logs to stderr; the REPL logs to a file to keep the
    // prompt clean.
    if cli.is_one_shot() {
        logging::init_stderr_logging();
    } else {
        logging::init_file_logging();
    }

    if let Err(e) = run(cli) {
        error!("{}: {}", e.category(), e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let artifacts_dir = cli
        .artifacts_dir
        .clone()
        .unwrap_or_else(|| config.artifacts.dir.clone());
    let artifacts = ArtifactStore::new(artifacts_dir, config.artifacts.url_prefix.clone());
    artifacts.ensure_dir()?;

    let mut dataset: Option<Dataset> = None;
    if let Some(path) = &cli.data {
        let df = load_csv(path)?;
        println!(
            "Loaded {} rows and {} columns from {}.",
            df.n_rows(),
            df.n_cols(),
            path.display()
        );
        dataset = Some(df);
    }

    if let Some(command) = &cli.command {
        let reply = process(command, dataset.as_ref(), &artifacts)?;
        if cli.json {
            let json = serde_json::to_string(&reply)
                .map_err(|e| DatabotError::internal(e.to_string()))?;
            println!("{json}");
        } else {
            print_reply(&reply);
        }
        return Ok(());
    }

    repl(dataset, &artifacts)
}

/// Interactive loop: each line is an utterance, `:load` replaces the
/// dataset wholesale, `:quit` exits.
fn repl(mut dataset: Option<Dataset>, artifacts: &ArtifactStore) -> Result<()> {
    println!("databot - type a command, ':load <file.csv>' to load data, ':quit' to exit.");
    let mut editor =
        DefaultEditor::new().map_err(|e| DatabotError::internal(e.to_string()))?;

    loop {
        match editor.readline("databot> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line);

                if line == ":quit" || line == ":exit" {
                    break;
                }
                if let Some(path) = line.strip_prefix(":load ") {
                    match load_csv(Path::new(path.trim())) {
                        Ok(df) => {
                            println!("Loaded {} rows and {} columns.", df.n_rows(), df.n_cols());
                            dataset = Some(df);
                        }
                        Err(e) => println!("Error: {e}"),
                    }
                    continue;
                }

                match process(line, dataset.as_ref(), artifacts) {
                    Ok(reply) => print_reply(&reply),
                    Err(e) => {
                        // Unexpected internal failure: degrade to a generic
                        // response, details go to the log.
                        error!("{}: {}", e.category(), e);
                        println!("Something went wrong generating that result. Please try again.");
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(DatabotError::internal(e.to_string())),
        }
    }
    Ok(())
}

fn print_reply(reply: &Reply) {
    println!("{}", reply.message);
    if let Some(url) = &reply.artifact {
        println!("[chart: {url}]");
    }
}
