use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "crop-advisor",
    version,
    about = "Crop recommendations from a weather forecast and soil type"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank crops for a forecast file and soil type
    Recommend(RecommendCommand),
    /// List the crop catalog
    Catalog(CatalogCommand),
    /// List the supported soil types
    Soils(SoilsCommand),
}

#[derive(Args)]
pub struct RecommendCommand {
    /// JSON forecast: an array of daily records or an object with a `forecast` array
    pub forecast: PathBuf,
    /// Soil type: clay, loamy, sandy or silty
    #[arg(short, long)]
    pub soil: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Number of matches to show (1-6)
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=6))]
    pub top: Option<u8>,
    /// TOML catalog replacing the built-in crops
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Args)]
pub struct CatalogCommand {
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct SoilsCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
