use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "foodprint",
    about = "Foodprint — carbon footprints for food products",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the Foodprint HTTP server
    Serve(ServeArgs),
    /// Compute a product footprint offline from JSON files
    Compute(ComputeArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind, e.g. 0.0.0.0:3000
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    /// Path to a TOML config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Load the dev fixture data into the store on startup
    #[arg(long)]
    pub seed: bool,
}

#[derive(Args)]
pub struct ComputeArgs {
    /// JSON file with the emission factor table (array of factors)
    #[arg(long)]
    pub factors: PathBuf,

    /// JSON file with the product: {"name", "ingredients": [...]}
    pub product: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
