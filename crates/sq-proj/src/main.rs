use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd_count;
mod cmd_schemas;

#[derive(Parser)]
#[command(name = "sq-proj", about = "Inspect continuous-query compiler output")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the number of high-level operator nodes in the query tree
    Count {
        /// Compiler output directory (contains qtree.xml)
        dir: PathBuf,
    },

    /// Print the published query schemas as JSON
    Schemas {
        /// Compiler output directory (contains qtree.xml and output_spec.cfg)
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Count { dir } => cmd_count::run(dir)?,
        Commands::Schemas { dir } => cmd_schemas::run(dir)?,
    }

    Ok(())
}
