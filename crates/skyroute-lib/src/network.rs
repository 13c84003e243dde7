use tracing::info;

use crate::airports::AirportCatalog;
use crate::dataset::DatasetPaths;
use crate::error::Result;
use crate::flights::{load_flights, Flight};
use crate::graph::{Graph, GraphBuildStats};

/// Airports plus the direct-flight graph built over them.
///
/// Constructed once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct FlightNetwork {
    pub airports: AirportCatalog,
    pub graph: Graph,
    pub stats: GraphBuildStats,
}

impl FlightNetwork {
    /// Assemble a network from an airport catalog and direct flights.
    pub fn from_parts(airports: AirportCatalog, flights: &[Flight]) -> Self {
        let (graph, stats) = Graph::load_from(flights, &airports);
        Self {
            airports,
            graph,
            stats,
        }
    }
}

/// Load both tables from disk and build the flight graph.
pub fn load_network(paths: &DatasetPaths) -> Result<FlightNetwork> {
    let airports = AirportCatalog::from_path(&paths.airports)?;
    let flights = load_flights(&paths.flights)?;
    let network = FlightNetwork::from_parts(airports, &flights);
    info!(
        airports = network.airports.len(),
        routes = network.graph.edge_count(),
        skipped_flights = network.stats.skipped,
        "flight network ready"
    );
    Ok(network)
}
