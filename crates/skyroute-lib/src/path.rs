use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::airports::AirportCode;
use crate::cost::EdgeCost;
use crate::error::Result;
use crate::graph::Graph;
use crate::queue::RouteQueue;

/// Candidate or final itinerary with its accumulated cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub cost: f64,
    pub path: Vec<AirportCode>,
}

impl Route {
    /// Zero-hop route that starts and ends at `airport`.
    pub fn stay(airport: AirportCode) -> Self {
        Self {
            cost: 0.0,
            path: vec![airport],
        }
    }

    /// Airport the route currently ends at.
    pub fn last(&self) -> Option<&AirportCode> {
        self.path.last()
    }

    /// Extend the route by one flight costing `leg_cost`.
    fn extend(&self, next: &AirportCode, leg_cost: f64) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend(self.path.iter().cloned());
        path.push(next.clone());
        Self {
            cost: self.cost + leg_cost,
            path,
        }
    }

    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Run Dijkstra's algorithm to find the cheapest chain of direct flights from
/// `origin` to `destination`.
///
/// Returns `Ok(None)` when the destination cannot be reached, including when
/// either airport is absent from the graph. Errors only when the cost cache
/// has no coordinates for an airport the graph references.
pub fn find_cheapest_path<C>(
    graph: &Graph,
    costs: &mut C,
    origin: &AirportCode,
    destination: &AirportCode,
) -> Result<Option<Route>>
where
    C: EdgeCost + ?Sized,
{
    if origin == destination {
        return Ok(Some(Route::stay(origin.clone())));
    }

    let mut queue = RouteQueue::new();
    let mut visited: HashSet<AirportCode> = HashSet::new();

    let start = Route::stay(origin.clone());
    for neighbour in graph.neighbours(origin) {
        let leg = costs.get_cost(origin, neighbour)?;
        queue.push(start.extend(neighbour, leg));
    }
    visited.insert(origin.clone());

    while let Some(route) = queue.pop_min() {
        let Some(airport) = route.last().cloned() else {
            continue;
        };

        // Stale entry for an airport that was already settled more cheaply.
        if visited.contains(&airport) {
            continue;
        }

        if airport == *destination {
            debug!(
                origin = %origin,
                destination = %destination,
                cost = route.cost,
                hops = route.hop_count(),
                settled = visited.len(),
                "cheapest route found"
            );
            return Ok(Some(route));
        }

        for neighbour in graph.neighbours(&airport) {
            if visited.contains(neighbour) {
                continue;
            }
            let leg = costs.get_cost(&airport, neighbour)?;
            queue.push(route.extend(neighbour, leg));
        }
        visited.insert(airport);
    }

    debug!(
        origin = %origin,
        destination = %destination,
        settled = visited.len(),
        "destination unreachable"
    );
    Ok(None)
}
