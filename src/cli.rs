use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "dragnet", version, about = "Google SERP link harvester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scrape Google result links for a single query
    Search(SearchArgs),
    /// Harvest Wikipedia references for a directory of media outlets
    Harvest(HarvestArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search query to scrape
    pub query: String,

    /// Number of result pages to scrape
    #[arg(short, long, default_value_t = 1)]
    pub pages: u32,

    /// Seconds to sleep between page requests
    #[arg(short, long, default_value_t = 2)]
    pub sleep: u64,

    /// Output file path
    #[arg(short, long, default_value = "scraped_data/links.json.gz")]
    pub output: PathBuf,

    /// Restrict results to one site, e.g. example.com
    #[arg(long)]
    pub site: Option<String>,

    /// Start date for the result window (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub start_date: String,

    /// End date for the result window (YYYY-MM-DD)
    #[arg(long, default_value = "")]
    pub end_date: String,
}

#[derive(Debug, Args)]
pub struct HarvestArgs {
    /// Media directory document: region -> category -> outlets
    #[arg(long, default_value = "news.json")]
    pub directory: PathBuf,

    /// First year of the harvest window
    #[arg(long, default_value_t = 2022)]
    pub start_year: i32,

    /// Last year of the harvest window (inclusive)
    #[arg(long, default_value_t = 2023)]
    pub end_year: i32,

    /// Root directory for per-category output trees
    #[arg(long, default_value = ".")]
    pub output_root: PathBuf,

    /// Number of result pages to scrape per outlet
    #[arg(short, long, default_value_t = 1)]
    pub pages: u32,

    /// Seconds to sleep between page requests
    #[arg(short, long, default_value_t = 2)]
    pub sleep: u64,
}
