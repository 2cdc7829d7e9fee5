use clap::{Parser, Subcommand};

/// CLI arguments for areadb-cli
#[derive(Debug, Parser)]
#[command(
    name = "areadb",
    version,
    about = "CLI for querying and inspecting the service-area directory"
)]
pub struct CliArgs {
    /// Path to a directory JSON file (default: the embedded directory)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the directory contents
    Stats,

    /// List all postal-area groups
    Groups,

    /// List the areas filed under one group
    Areas {
        /// Postal-area prefix or group name (e.g. BA, "Dorset Borders")
        group: String,
    },

    /// Fuzzy search by town name or postcode fragment
    Search {
        /// Free-text query (case-insensitive)
        query: String,
    },

    /// Show the browse shortlist used for an empty search box
    Browse,

    /// Check whether a postcode is covered
    Coverage {
        /// Full or partial postcode (e.g. "BA5 1AA", "ta6")
        postcode: String,
    },

    /// Compile the directory to a binary cache file
    Compile {
        /// Output path (default: <input>.areas.bin next to the source)
        #[arg(short = 'o', long = "output")]
        output: Option<String>,
    },
}
