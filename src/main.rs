use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pubmed_papers::{PubMedClient, filter_papers, save_to_csv};
use tracing_subscriber::EnvFilter;

/// Result cap for the ESearch request
const RESULT_LIMIT: usize = 10;

#[derive(Parser)]
#[command(
    name = "pubmed-papers",
    about = "Fetch research papers from PubMed with pharma/biotech-affiliated authors"
)]
struct Cli {
    /// Search query for the PubMed API
    #[arg(value_name = "QUERY")]
    query: String,

    /// Enable debug output (request URLs and raw responses)
    #[arg(short, long)]
    debug: bool,

    /// Output CSV file
    #[arg(short, long, default_value = "papers.csv")]
    file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let client = PubMedClient::new();

    let articles = client.search_and_fetch(&cli.query, RESULT_LIMIT).await?;
    let papers = filter_papers(articles);

    if papers.is_empty() {
        println!("No relevant papers found.");
        return Ok(());
    }

    let count = save_to_csv(&papers, &cli.file)?;
    println!("Saved {} papers to {}", count, cli.file.display());

    Ok(())
}
