// Command line front end
pub mod display;
pub mod session;

pub use display::render_results;
pub use session::{resolve_engine, Session};

use clap::Parser;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::Settings;
use crate::core::SearchEngine;
use crate::services::{load_dataset, DatasetError};

/// Errors that end the program
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Fuzzy search over the local restaurant catalog
#[derive(Debug, Parser)]
#[command(name = "restaurant-search", version, about)]
pub struct Cli {
    /// Configuration file (defaults to config/default.toml + config/local.toml)
    #[arg(short, long, env = "RSEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Search metric: L for Levenshtein, J for Jaro-Winkler
    #[arg(short, long)]
    pub engine: Option<String>,

    /// Restaurants CSV (name,customer_rating,distance,price,cuisine_id)
    #[arg(long)]
    pub restaurants: Option<PathBuf>,

    /// Cuisines CSV (id,name)
    #[arg(long)]
    pub cuisines: Option<PathBuf>,

    /// Answer a single `query,distance,rating,price,cuisine` and exit
    #[arg(short, long)]
    pub query: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn load_settings(&self) -> Result<Settings, AppError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from(path)?,
            None => Settings::load()?,
        };

        if let Some(path) = &self.restaurants {
            settings.data.restaurants_path = path.clone();
        }
        if let Some(path) = &self.cuisines {
            settings.data.cuisines_path = path.clone();
        }

        Ok(settings)
    }
}

/// Load the catalog and serve queries from stdin, or the one-shot `--query`
pub fn run(cli: Cli, settings: Settings) -> Result<(), AppError> {
    let dataset = load_dataset(&settings.data)?;
    let engine = SearchEngine::new(dataset, settings.search.clone());

    let preset = cli.engine.or(settings.search.default_engine);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&engine, stdin.lock(), stdout.lock()).json(cli.json);

    match cli.query {
        Some(query) => {
            let (kind, fell_back) = resolve_engine(preset.as_deref());
            if fell_back {
                tracing::warn!("Unknown engine {:?}, defaulting to {}", preset, kind);
            }
            session.run_query(&query, kind)?;
        }
        None => {
            let answered = session.run(preset.as_deref())?;
            tracing::info!("Session finished after {} queries", answered);
        }
    }

    Ok(())
}
