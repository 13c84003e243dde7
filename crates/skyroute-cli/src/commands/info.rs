//! Info command handler reporting dataset statistics.

use anyhow::Result;

use skyroute_lib::DatasetOptions;

use crate::commands::load_dataset;
use skyroute_cli::output::{render_info, NetworkInfo, OutputFormat};

/// Handle the info subcommand and return the rendered output.
pub fn handle_info_command(options: &DatasetOptions, format: OutputFormat) -> Result<String> {
    let (paths, network) = load_dataset(options)?;
    let info = NetworkInfo::new(&network, paths.airports, paths.flights);
    render_info(&info, format)
}
