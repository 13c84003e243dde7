//! Output formatting for route and dataset reports.

use std::fmt::Write;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use skyroute_lib::{FlightNetwork, RouteRenderMode, RouteSummary};

use crate::terminal::ColorPalette;

/// Output style selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Column layout of code, leg cost, name and country.
    #[default]
    Text,
    /// Markdown list suitable for pasting into notes.
    Rich,
    /// Pretty-printed JSON.
    Json,
}

/// Render a route summary in the requested format.
pub fn render_route(summary: &RouteSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.render(RouteRenderMode::PlainText)),
        OutputFormat::Rich => Ok(summary.render(RouteRenderMode::RichText)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(summary).context("failed to serialize route summary")
        }
    }
}

/// Dataset statistics reported by the `info` command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NetworkInfo {
    pub airports_path: PathBuf,
    pub flights_path: PathBuf,
    pub airports: usize,
    pub connected_airports: usize,
    pub routes: usize,
    pub direct_flights: usize,
    pub skipped_flights: usize,
}

impl NetworkInfo {
    pub fn new(network: &FlightNetwork, airports_path: PathBuf, flights_path: PathBuf) -> Self {
        Self {
            airports_path,
            flights_path,
            airports: network.airports.len(),
            connected_airports: network.graph.node_count(),
            routes: network.graph.edge_count(),
            direct_flights: network.stats.connected,
            skipped_flights: network.stats.skipped,
        }
    }
}

/// Render dataset statistics in the requested format.
pub fn render_info(info: &NetworkInfo, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(info).context("failed to serialize dataset info")
        }
        OutputFormat::Text | OutputFormat::Rich => {
            let bullet = if format == OutputFormat::Rich { "* " } else { "" };
            let mut buffer = String::new();
            let _ = writeln!(buffer, "{bullet}Airports file: {}", info.airports_path.display());
            let _ = writeln!(buffer, "{bullet}Flights file: {}", info.flights_path.display());
            let _ = writeln!(buffer, "{bullet}Airports: {}", info.airports);
            let _ = writeln!(
                buffer,
                "{bullet}Airports with direct flights: {}",
                info.connected_airports
            );
            let _ = writeln!(buffer, "{bullet}Distinct routes: {}", info.routes);
            let _ = writeln!(buffer, "{bullet}Direct flights: {}", info.direct_flights);
            let _ = writeln!(
                buffer,
                "{bullet}Flights skipped (unknown airport): {}",
                info.skipped_flights
            );
            Ok(buffer)
        }
    }
}

/// Format the footer with elapsed time.
pub fn format_footer(elapsed: Duration, palette: &ColorPalette) -> String {
    let elapsed_ms = elapsed.as_millis();
    let time_str = if elapsed_ms < 1000 {
        format!("{}ms", elapsed_ms)
    } else {
        format!("{:.2}s", elapsed.as_secs_f64())
    };
    format!("{}Completed in {}{}", palette.gray, time_str, palette.reset)
}
