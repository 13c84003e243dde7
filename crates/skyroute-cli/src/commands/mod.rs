// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments and dispatches.

pub mod info;
pub mod route;

use anyhow::{Context, Result};

use skyroute_lib::{load_network, resolve_dataset, DatasetOptions, DatasetPaths, FlightNetwork};

/// Resolve the dataset files and load the flight network.
pub fn load_dataset(options: &DatasetOptions) -> Result<(DatasetPaths, FlightNetwork)> {
    let paths = resolve_dataset(options).context("failed to locate the flight dataset")?;
    let network = load_network(&paths).with_context(|| {
        format!(
            "failed to load dataset from {} and {}",
            paths.airports.display(),
            paths.flights.display()
        )
    })?;
    Ok((paths, network))
}
