//! CLI argument definitions using clap
//!
//! One invocation = one search: the five criteria flags are all
//! optional, and an omitted flag imposes no constraint.

use clap::Parser;
use std::path::PathBuf;

/// platefind - A strict, deterministic restaurant search
#[derive(Parser, Debug)]
#[command(name = "platefind")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the restaurant data CSV
    #[arg(short = 'f', long, default_value = "csv/restaurants.csv")]
    pub restaurant_file: PathBuf,

    /// Path to the cuisine lookup CSV
    #[arg(long, default_value = "csv/cuisines.csv")]
    pub cuisine_file: PathBuf,

    /// Prefix of one of the words in the restaurant name, ignores case
    #[arg(short, long)]
    pub name: Option<String>,

    /// Max distance in miles to the restaurant
    #[arg(short, long)]
    pub distance: Option<f64>,

    /// Min customer rating out of 5 stars
    #[arg(short, long, value_name = "1-5")]
    pub rating: Option<u8>,

    /// Max price in US dollars for the average price
    #[arg(short, long)]
    pub price: Option<f64>,

    /// Prefix of one of the words in a cuisine name, ignores case
    #[arg(short, long)]
    pub cuisine: Option<String>,

    /// Maximum number of results to display
    #[arg(long, default_value_t = 5)]
    pub limit: usize,

    /// Emit a JSON envelope instead of a table
    #[arg(long)]
    pub json: bool,

    /// Emit structured log events to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
