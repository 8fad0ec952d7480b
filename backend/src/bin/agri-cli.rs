//! Command-line client for the Crop Advisor
//!
//! Resolves a region, fetches its weather and prints ranked crops with
//! advice. Uses the same configuration as the server.

use anyhow::Result;
use clap::Parser;
use crop_advisor::{output::format_report, Config, RecommendationService};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "agri-cli")]
#[command(author, version, about = "Recommend crops for a region from live weather and soil data")]
struct Cli {
    /// Region to look up, e.g. "Pune" or "Nairobi, Kenya"
    region: String,

    /// Show only the N most suitable crops
    #[arg(short, long, value_name = "N")]
    top: Option<usize>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();
    let config = Config::load()?;
    let service = RecommendationService::from_config(&config)?;

    let report = service.recommend(&cli.region, cli.top).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", format_report(&report));
    }

    Ok(())
}
