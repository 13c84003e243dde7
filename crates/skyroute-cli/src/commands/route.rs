//! Route command handler for computing the cheapest itinerary.

use anyhow::{Context, Result};

use skyroute_lib::{plan_route, CostCache, CostConfig, DatasetOptions, RouteRequest, RouteSummary};

use crate::commands::load_dataset;
use skyroute_cli::output::{render_route, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Origin airport code.
    pub from: String,
    /// Destination airport code.
    pub to: String,
    /// Price per kilometre flown.
    pub rate: f64,
}

impl RouteCommandArgs {
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from.clone(), self.to.clone())
    }
}

/// Handle the route subcommand and return the rendered output.
pub fn handle_route_command(
    options: &DatasetOptions,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<String> {
    let config = CostConfig::new(args.rate).context("invalid --rate")?;
    let (_, network) = load_dataset(options)?;

    let mut costs = CostCache::with_config(&network.airports, config);
    let plan = plan_route(&network, &mut costs, &args.to_request())?;
    let summary = RouteSummary::from_plan(&network.airports, &plan, &mut costs)?;

    render_route(&summary, format)
}
