// ABOUTME: CLI entry point for mysql-dump-extractor
// ABOUTME: Parses commands and routes to appropriate handlers

use clap::{Parser, Subcommand};
use mysql_dump_extractor::{commands, config, interactive};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mysql-dump-extractor")]
#[command(about = "Reconstruct table rows from MySQL dump files without a database server", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract row data for the configured tables from a dump file
    Extract {
        /// Path to the SQL dump file
        #[arg(long)]
        file: PathBuf,
        /// Tables to extract (comma-separated; defaults to the configured set)
        #[arg(long, value_delimiter = ',')]
        tables: Option<Vec<String>>,
        /// Path to extractor-config.toml naming tables and output
        #[arg(long = "config")]
        config_path: Option<PathBuf>,
        /// Write the extracted rows to this JSON file
        #[arg(long)]
        output: Option<PathBuf>,
        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
        /// Disable interactive mode (extract all requested tables)
        #[arg(long)]
        no_interactive: bool,
    },
    /// Show the column list and row count for a single table
    Inspect {
        /// Path to the SQL dump file
        #[arg(long)]
        file: PathBuf,
        /// Table to inspect
        #[arg(long)]
        table: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging - default to INFO level if RUST_LOG not set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            file,
            tables,
            config_path,
            output,
            pretty,
            no_interactive,
        } => {
            let file_config = match &config_path {
                Some(path) => config::load_config(path)?,
                None => config::ExtractorConfig::default(),
            };

            // CLI flags win over the config file, which wins over defaults
            let candidates = tables.unwrap_or_else(|| {
                if file_config.tables.is_empty() {
                    config::default_tables()
                } else {
                    file_config.tables.clone()
                }
            });

            let selected = if !no_interactive {
                // Interactive mode (default) - prompt user to pick tables
                interactive::select_tables(&candidates)?
            } else {
                candidates
            };

            let output = output.or(file_config.output);
            commands::extract(&file, selected, output.as_deref(), pretty).await
        }
        Commands::Inspect { file, table } => commands::inspect(&file, &table).await,
    }
}
