use crate::algo::sorting::Algorithm;
use crate::app::error::{Result, VisualizerError};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "sortviz",
    version,
    about = "Count and compare the steps bubble, merge and quick sort take"
)]
pub struct Cli {
    /// Path to a sortviz.toml (default: ./sortviz.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the random arrays
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print a random array
    Generate {
        /// Array length (default: array_size from the config)
        #[arg(short, long)]
        size: Option<usize>,
    },
    /// Sort an array with one algorithm and report the steps taken
    Sort {
        /// bubble, merge or quick
        algorithm: Algorithm,

        /// Length of the random array to sort
        #[arg(short, long, conflicts_with = "values")]
        size: Option<usize>,

        /// Comma separated values to sort instead of a random array
        #[arg(long, allow_hyphen_values = true)]
        values: Option<String>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Run every algorithm over a range of array sizes and chart the steps
    Compare {
        /// Comma separated array sizes (default: sizes from the config)
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<usize>>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Width of the longest bar
        #[arg(long, default_value_t = 40)]
        width: u16,

        /// Disable ANSI colors in the chart
        #[arg(long)]
        no_color: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

// note: blank entries are skipped, so "" is the empty array.
pub fn parse_values(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>().map_err(|source| VisualizerError::InvalidValue {
                value: s.to_string(),
                source,
            })
        })
        .collect()
}
