use clap::Parser;
use restaurant_search::cli::{self, Cli};
use restaurant_search::config::LoggingSettings;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let args = Cli::parse();

    let settings = match args.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging);
    info!("Configuration loaded successfully");

    match cli::run(args, settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
