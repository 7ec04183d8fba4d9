use clap::{Parser, Subcommand};
use itunes_search::{
    ResultsLoader,
    clients::{ITunesClient, errors::Result},
    config::ConfigBuilder,
};
use log::info;

#[derive(Parser)]
#[command(name = "itunes-search")]
#[command(version, about = "Fetch iTunes search results and print them", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one search and print `trackId`, `trackName` and `collectionName` per line
    Fetch {
        /// Search term, defaults to the built-in query
        #[arg(long)]
        term: Option<String>,
        /// Media entity filter
        #[arg(long)]
        entity: Option<String>,
        /// Search endpoint
        #[arg(long)]
        base_url: Option<String>,
        /// Request timeout; no timeout when omitted
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Fetch {
            term,
            entity,
            base_url,
            timeout_secs,
        } => {
            let config = ConfigBuilder::new()
                .term(term)
                .entity(entity)
                .base_url(base_url)
                .timeout_secs(timeout_secs)
                .build()?;
            fetch(config.itunes).await?;
        }
    }
    Ok(())
}

async fn fetch(client: ITunesClient) -> Result<()> {
    info!("Fetching search results ...");
    let loader = ResultsLoader::new(client);
    let count = loader.load().await?;
    for result in loader.results().iter() {
        println!(
            "{}\t{}\t{}",
            result.track_id, result.track_name, result.collection_name
        );
    }
    info!("Fetched {count} results");
    Ok(())
}
