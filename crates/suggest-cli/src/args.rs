use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use suggest_core::WidgetKind;

/// CLI arguments for suggest-cli
#[derive(Debug, Parser)]
#[command(
    name = "suggest-cli",
    version,
    about = "Query the artist and location suggestion endpoints from a terminal"
)]
pub struct CliArgs {
    /// Origin serving /suggest, /suggestgeo and /geonames
    #[arg(
        short = 'b',
        long = "base-url",
        global = true,
        default_value = "http://localhost:8000"
    )]
    pub base_url: String,

    /// JSON file with widget overrides (endpoint paths, messages, ...)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG still applies.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Suggest artist and member names matching a query
    Names {
        /// Text as typed into the artist field
        query: String,
    },

    /// Suggest locations matching a query
    Places {
        /// Text as typed into the location field
        query: String,
    },

    /// Resolve a position to its nearest city and country
    Locate {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },

    /// Decode a saved suggestion body without contacting the server
    Parse {
        /// File holding the body, or `-` for stdin
        #[arg(default_value = "-")]
        input: String,

        /// Widget the body is rendered for (name or geo)
        #[arg(short = 'k', long = "kind", default_value = "name")]
        kind: WidgetKind,
    },
}
