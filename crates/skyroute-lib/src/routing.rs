//! Route planning entry point.
//!
//! This module provides:
//! - [`RouteRequest`] - airports as typed by the caller
//! - [`RoutePlan`] - planned itinerary with its total cost
//! - [`plan_route`] - resolves airport codes and runs the cheapest-path search
//!
//! # Example
//!
//! ```ignore
//! use skyroute_lib::{load_network, plan_route, resolve_dataset, CostCache, DatasetOptions, RouteRequest};
//!
//! let network = load_network(&resolve_dataset(&DatasetOptions::default())?)?;
//! let mut costs = CostCache::new(&network.airports);
//! let plan = plan_route(&network, &mut costs, &RouteRequest::new("VLC", "PDX"))?;
//! println!("{} hops for {:.2}", plan.hop_count(), plan.cost);
//! ```

use serde::Serialize;
use tracing::info;

use crate::airports::AirportCode;
use crate::cost::CostCache;
use crate::error::{Error, Result};
use crate::network::FlightNetwork;
use crate::path::find_cheapest_path;

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
}

impl RouteRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub origin: AirportCode,
    pub destination: AirportCode,
    pub cost: f64,
    pub steps: Vec<AirportCode>,
}

impl RoutePlan {
    /// Number of flights in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute the cheapest itinerary for `request`.
///
/// Unknown codes are reported with fuzzy suggestions; an unreachable
/// destination is reported as [`Error::RouteNotFound`].
pub fn plan_route(
    network: &FlightNetwork,
    costs: &mut CostCache<'_>,
    request: &RouteRequest,
) -> Result<RoutePlan> {
    let origin = network.airports.resolve(&request.origin)?.code.clone();
    let destination = network.airports.resolve(&request.destination)?.code.clone();

    let Some(route) = find_cheapest_path(&network.graph, costs, &origin, &destination)? else {
        return Err(Error::RouteNotFound {
            origin: origin.to_string(),
            destination: destination.to_string(),
        });
    };

    info!(
        origin = %origin,
        destination = %destination,
        cost = route.cost,
        hops = route.hop_count(),
        cached_pairs = costs.len(),
        cache_hits = costs.hits(),
        "planned route"
    );

    Ok(RoutePlan {
        origin,
        destination,
        cost: route.cost,
        steps: route.path,
    })
}
