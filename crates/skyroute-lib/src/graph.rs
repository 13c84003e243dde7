use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use tracing::{debug, info};

use crate::airports::{AirportCatalog, AirportCode};
use crate::flights::Flight;

/// Counters describing how a graph was assembled from the flight table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphBuildStats {
    /// Flights whose endpoints were both known and became edges.
    pub connected: usize,
    /// Flights dropped because an endpoint is missing from the catalog.
    pub skipped: usize,
}

/// Undirected flight graph keyed by airport code.
///
/// Neighbour sets are kept sorted so enumeration order, and therefore search
/// results, are stable across runs.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<AirportCode, BTreeSet<AirportCode>>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undirected edge. Connecting the same pair twice is a no-op.
    pub fn connect(&mut self, node1: &AirportCode, node2: &AirportCode) {
        let adjacency = Arc::make_mut(&mut self.adjacency);
        adjacency
            .entry(node1.clone())
            .or_default()
            .insert(node2.clone());
        adjacency
            .entry(node2.clone())
            .or_default()
            .insert(node1.clone());
    }

    /// Return the neighbours for a given airport. Unknown airports have none.
    pub fn neighbours<'g>(&'g self, node: &AirportCode) -> impl Iterator<Item = &'g AirportCode> {
        self.adjacency.get(node).into_iter().flatten()
    }

    pub fn contains(&self, node: &AirportCode) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Number of airports with at least one edge.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected edges.
    ///
    /// A self-loop is stored once under its own airport, so it is counted
    /// apart from edges between two distinct airports.
    pub fn edge_count(&self) -> usize {
        let mut endpoints = 0;
        let mut self_loops = 0;
        for (node, neighbours) in self.adjacency.iter() {
            if neighbours.contains(node) {
                self_loops += 1;
                endpoints += neighbours.len() - 1;
            } else {
                endpoints += neighbours.len();
            }
        }
        endpoints / 2 + self_loops
    }

    /// Build a graph from direct flights, keeping only flights whose two
    /// endpoints exist in `known`.
    ///
    /// Flights touching an unknown airport are skipped rather than treated as
    /// errors; incomplete source tables are expected. The number of skipped
    /// flights is reported in the returned stats.
    pub fn load_from<'f, I>(flights: I, known: &AirportCatalog) -> (Self, GraphBuildStats)
    where
        I: IntoIterator<Item = &'f Flight>,
    {
        let mut graph = Self::new();
        let mut stats = GraphBuildStats::default();

        for flight in flights {
            if !known.contains(flight.origin.as_str()) || !known.contains(flight.destination.as_str())
            {
                debug!(
                    origin = %flight.origin,
                    destination = %flight.destination,
                    "skipping flight with unknown airport"
                );
                stats.skipped += 1;
                continue;
            }
            graph.connect(&flight.origin, &flight.destination);
            stats.connected += 1;
        }

        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            skipped = stats.skipped,
            "built flight graph"
        );
        (graph, stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airports::Airport;

    fn code(value: &str) -> AirportCode {
        AirportCode::new(value)
    }

    fn catalog(codes: &[&str]) -> AirportCatalog {
        codes
            .iter()
            .map(|value| Airport {
                code: code(value),
                name: value.to_string(),
                country: "Test".to_string(),
                latitude: 0.0,
                longitude: 0.0,
            })
            .collect()
    }

    #[test]
    fn connect_is_symmetric_and_idempotent() {
        let mut graph = Graph::new();
        graph.connect(&code("VLC"), &code("PDX"));
        graph.connect(&code("PDX"), &code("VLC"));
        graph.connect(&code("VLC"), &code("PDX"));

        let from_vlc: Vec<_> = graph.neighbours(&code("VLC")).cloned().collect();
        let from_pdx: Vec<_> = graph.neighbours(&code("PDX")).cloned().collect();
        assert_eq!(from_vlc, vec![code("PDX")]);
        assert_eq!(from_pdx, vec![code("VLC")]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.node_count(), 2);
    }

    #[test]
    fn unknown_node_has_no_neighbours() {
        let graph = Graph::new();
        assert_eq!(graph.neighbours(&code("XXX")).count(), 0);
        assert!(!graph.contains(&code("XXX")));
    }

    #[test]
    fn neighbours_are_sorted() {
        let mut graph = Graph::new();
        for other in ["MAD", "BCN", "LHR"] {
            graph.connect(&code("VLC"), &code(other));
        }
        let order: Vec<&str> = graph
            .neighbours(&code("VLC"))
            .map(AirportCode::as_str)
            .collect();
        assert_eq!(order, vec!["BCN", "LHR", "MAD"]);
    }

    #[test]
    fn load_skips_flights_with_unknown_endpoints() {
        let known = catalog(&["VLC", "PDX", "MAD"]);
        let flights = vec![
            Flight::new("VLC", "PDX"),
            Flight::new("VLC", "XXX"),
            Flight::new("YYY", "MAD"),
            Flight::new("MAD", "VLC"),
            Flight::new("PDX", "VLC"),
        ];

        let (graph, stats) = Graph::load_from(&flights, &known);

        assert_eq!(stats, GraphBuildStats { connected: 3, skipped: 2 });
        assert_eq!(graph.edge_count(), 2);
        assert!(!graph.contains(&code("XXX")));
        assert!(!graph.contains(&code("YYY")));
    }

    #[test]
    fn self_loops_count_as_one_edge() {
        let known = catalog(&["VLC", "PDX"]);
        let flights = vec![Flight::new("VLC", "VLC"), Flight::new("VLC", "PDX")];

        let (graph, stats) = Graph::load_from(&flights, &known);

        assert_eq!(stats.connected, 2);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn clones_share_adjacency_until_mutated() {
        let mut graph = Graph::new();
        graph.connect(&code("VLC"), &code("PDX"));
        let snapshot = graph.clone();
        graph.connect(&code("VLC"), &code("MAD"));

        assert_eq!(snapshot.edge_count(), 1);
        assert_eq!(graph.edge_count(), 2);
    }
}
