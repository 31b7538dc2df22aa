//! suggest-cli — terminal probe for the suggestion endpoints
//!
//! Usage examples
//! --------------
//!
//! - Artist/member names matching "queen"
//!   $ suggest-cli names queen
//!
//! - Locations matching "los", against another server
//!   $ suggest-cli --base-url http://127.0.0.1:9000 places los
//!
//! - City and country near a position
//!   $ suggest-cli locate --lat 40.7128 --lng -74.0060
//!
//! - Decode a saved body as the geo widget would show it
//!   $ suggest-cli parse body.txt --kind geo
//!
//! Configuration
//! -------------
//!
//! `--config <file.json>` takes the same override keys the browser widgets
//! accept (`endpoint`, `reverse_geocode_endpoint`, `no_match_message`, ...).
mod args;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use suggest_cli::{SuggestClient, TerminalList};
use suggest_core::{Applied, ConfigOverrides, Coordinates, Widget, WidgetConfig, WidgetKind};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let overrides = load_overrides(args.config.as_deref())?;
    let widget = |kind| -> anyhow::Result<Widget> {
        let config = WidgetConfig::preset(kind).with_overrides(overrides.clone())?;
        Ok(Widget::new(config)?)
    };

    let stdout = io::stdout();
    let mut out = TerminalList::new(stdout.lock());

    match args.command {
        Commands::Names { query } => {
            let client = SuggestClient::new(&args.base_url)?;
            let mut w = widget(WidgetKind::Name)?;
            client.run_query(&mut w, &query);
            w.render_into(&mut out)?;
        }

        Commands::Places { query } => {
            let client = SuggestClient::new(&args.base_url)?;
            let mut w = widget(WidgetKind::Geo)?;
            client.run_query(&mut w, &query);
            w.render_into(&mut out)?;
        }

        Commands::Locate { lat, lng } => {
            let client = SuggestClient::new(&args.base_url)?;
            let mut w = widget(WidgetKind::Geo)?;
            let at = Coordinates::new(lat, lng);
            match client.run_locate(&mut w, at) {
                Applied::Rendered => w.render_into(&mut out)?,
                Applied::Unchanged => eprintln!(
                    "Nothing resolved near {at} via {} (run with -v for details)",
                    client.base_url()
                ),
                Applied::Stale => eprintln!("Lookup for {at} was superseded"),
            }
        }

        Commands::Parse { input, kind } => {
            let body = read_input(&input)?;
            let mut w = widget(kind)?;
            w.inject(&body);
            w.render_into(&mut out)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn load_overrides(path: Option<&Path>) -> anyhow::Result<ConfigOverrides> {
    let Some(path) = path else {
        return Ok(ConfigOverrides::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .context("reading body from stdin")?;
        Ok(body)
    } else {
        fs::read_to_string(input).with_context(|| format!("reading body from {input}"))
    }
}
