//! SkyRoute library entry points.
//!
//! This crate loads airport and flight tables, builds the undirected
//! direct-flight graph, and finds the cheapest itinerary between two airports
//! with Dijkstra's algorithm over a distance-based cost. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod airports;
pub mod cost;
pub mod dataset;
pub mod error;
pub mod flights;
pub mod geo;
pub mod graph;
pub mod network;
pub mod output;
pub mod path;
pub mod queue;
pub mod routing;

pub use airports::{Airport, AirportCatalog, AirportCode};
pub use cost::{CostCache, EdgeCost};
pub use dataset::{default_data_dir, resolve_dataset, DatasetOptions, DatasetPaths};
pub use error::{Error, Result};
pub use flights::{flights_from_reader, load_flights, Flight};
pub use geo::{flight_cost, haversine_km, CostConfig, GeoPoint, DEFAULT_RATE_PER_KM};
pub use graph::{Graph, GraphBuildStats};
pub use network::{load_network, FlightNetwork};
pub use output::{RouteRenderMode, RouteStep, RouteSummary};
pub use path::{find_cheapest_path, Route};
pub use queue::RouteQueue;
pub use routing::{plan_route, RoutePlan, RouteRequest};
