use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use timemap_drift::collection::directory::DirectoryCollection;
use timemap_drift::config::Config;
use timemap_drift::measures::measure::Measure;
use timemap_drift::output::terminal;
use timemap_drift::pipeline::drivers::{self, Overrides};
use timemap_drift::pipeline::sheet::ScoreSheet;
use timemap_drift::text::prepare::{ContentPreparer, PrepareOptions};
use timemap_drift::text::stopwords::StopwordFilter;

/// timemap-drift: measure how archived web pages drift over time.
///
/// Compares every memento in each TimeMap of a collection against the
/// TimeMap's first memento, using one or more similarity measures.
#[derive(Parser)]
#[command(name = "timemap-drift", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every memento against the first memento of its TimeMap
    Score {
        /// Collection directory (overrides TIMEMAP_DRIFT_COLLECTION_DIR)
        #[arg(long)]
        collection: Option<PathBuf>,

        /// Measure to compute, or "all" for every implemented measure
        #[arg(long, default_value = "all")]
        measure: String,

        /// Override tokenization for measures that allow it (true/false)
        #[arg(long)]
        tokenize: Option<bool>,

        /// Override stemming for measures that allow it (true/false)
        #[arg(long)]
        stemming: Option<bool>,

        /// Existing JSON results to add the new scores to
        #[arg(long)]
        merge: Option<PathBuf>,

        /// Write JSON results to this file (overrides TIMEMAP_DRIFT_OUTPUT)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print JSON instead of the score table
        #[arg(long)]
        json: bool,
    },

    /// List the available measures and their default preparation
    Measures,

    /// Show the prepared content of a single memento
    Prepare {
        /// URI of the memento
        uri: String,

        /// Collection directory (overrides TIMEMAP_DRIFT_COLLECTION_DIR)
        #[arg(long)]
        collection: Option<PathBuf>,

        /// Use this measure's default preparation
        #[arg(long, default_value = "wordcount")]
        measure: String,

        #[arg(long)]
        tokenize: Option<bool>,

        #[arg(long)]
        stemming: Option<bool>,

        #[arg(long)]
        remove_boilerplate: Option<bool>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("timemap_drift=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            collection,
            measure,
            tokenize,
            stemming,
            merge,
            output,
            json,
        } => {
            let mut config = Config::load()?;
            if let Some(dir) = collection {
                config.collection_dir = dir;
            }
            if output.is_some() {
                config.output_path = output;
            }
            config.require_collection()?;

            let measures = parse_measures(&measure)?;
            let collection = DirectoryCollection::open(&config.collection_dir)?;
            let preparer = ContentPreparer::with_stopwords(StopwordFilter::new(config.stopword_list));
            let overrides = Overrides { tokenize, stemming };

            let mut sheet = match merge {
                Some(path) => Some(load_sheet(&path)?),
                None => None,
            };

            let pb = ProgressBar::new(measures.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("  Measures [{bar:30}] {pos}/{len} {msg}")
                    .unwrap(),
            );

            for measure in &measures {
                pb.set_message(measure.name());
                sheet = Some(drivers::run_measure(
                    &collection,
                    &preparer,
                    *measure,
                    overrides,
                    sheet,
                )?);
                pb.inc(1);
            }
            pb.finish_and_clear();

            let sheet = sheet.unwrap_or_default();

            if json {
                println!("{}", serde_json::to_string_pretty(&sheet)?);
            } else {
                terminal::display_score_sheet(&sheet);
            }

            if let Some(path) = &config.output_path {
                let body = serde_json::to_string_pretty(&sheet)?;
                fs::write(path, body)
                    .with_context(|| format!("Failed to write results to {}", path.display()))?;
                info!(path = %path.display(), "Wrote results");
                if !json {
                    println!("{}", format!("Results written to {}", path.display()).dimmed());
                }
            }
        }

        Commands::Measures => {
            terminal::display_measures();
        }

        Commands::Prepare {
            uri,
            collection,
            measure,
            tokenize,
            stemming,
            remove_boilerplate,
        } => {
            let mut config = Config::load()?;
            if let Some(dir) = collection {
                config.collection_dir = dir;
            }
            config.require_collection()?;

            let defaults: PrepareOptions = measure.parse::<Measure>()?.default_options();
            let options = PrepareOptions {
                tokenize: tokenize.unwrap_or(defaults.tokenize),
                stemming: stemming.unwrap_or(defaults.stemming),
                remove_boilerplate: remove_boilerplate.unwrap_or(defaults.remove_boilerplate),
            };

            let collection = DirectoryCollection::open(&config.collection_dir)?;
            let preparer = ContentPreparer::with_stopwords(StopwordFilter::new(config.stopword_list));
            let content = preparer
                .prepare(&uri, &collection, options)
                .with_context(|| format!("Failed to prepare {uri}"))?;
            terminal::display_prepared(&uri, &content);
        }
    }

    Ok(())
}

/// Parse a measure name, or "all" for every implemented measure.
fn parse_measures(name: &str) -> Result<Vec<Measure>> {
    if name.eq_ignore_ascii_case("all") {
        return Ok(Measure::ALL
            .into_iter()
            .filter(|m| m.is_implemented())
            .collect());
    }
    Ok(vec![name.parse()?])
}

fn load_sheet(path: &Path) -> Result<ScoreSheet> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read results {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Malformed results {}", path.display()))
}
