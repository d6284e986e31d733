//! Command-line interface for event-stresser
//!
//! # Usage Examples
//!
//! ## Generate events
//! ```bash
//! # 1000 events with the default shape (10 fields, values 16..25 chars) to stdout
//! event-stresser generate
//!
//! # 1M events from 8 workers into a file
//! event-stresser generate --count 1000000 --workers 8 -o events.jsonl
//!
//! # Pipe into a transport
//! event-stresser generate --num-fields 3 --min-field-len 8 --max-field-len 12 | nc localhost 5170
//! ```
//!
//! ## Freeze a schema
//! ```bash
//! event-stresser schema --num-fields 5 --seed 42 -o profile.yaml
//! event-stresser generate --profile profile.yaml --count 500
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=event_stresser=info` to see run summaries.

use clap::{Parser, Subcommand};
use event_populate_jsonl::JSONLPopulateArgs;
use event_stresser::loadtest::{run_generate, run_schema, SchemaArgs};

#[derive(Parser)]
#[command(name = "event-stresser")]
#[command(about = "Generate synthetic JSON events for load testing ingestion pipelines")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate events as JSON Lines
    Generate {
        #[command(flatten)]
        args: JSONLPopulateArgs,
    },

    /// Print a profile with freshly generated field names pinned
    Schema {
        #[command(flatten)]
        args: SchemaArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for events
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => run_generate(args).await?,
        Commands::Schema { args } => run_schema(args)?,
    }

    Ok(())
}
