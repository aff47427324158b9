use std::path::PathBuf;

use clap::{Parser, Subcommand};

use trivia_ingest::config::Config;
use trivia_ingest::{fetch, importer, logging};

#[derive(Parser)]
#[command(name = "trivia_ingest")]
#[command(about = "CSV import and API fetch tooling for quiz question data")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import questions from a CSV file into the quiz database
    Import {
        /// Path to the CSV file to import
        csv_path: PathBuf,
    },
    /// Fetch questions from the trivia API and write them to a CSV file
    Fetch,
}

#[tokio::main]
async fn main() {
    logging::init_logging();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            println!("❌ Error loading config.toml: {e}");
            return;
        }
    };

    match cli.command {
        Commands::Import { csv_path } => importer::run_import(&csv_path),
        Commands::Fetch => fetch::run_fetch(&config.fetch).await,
    }
}
