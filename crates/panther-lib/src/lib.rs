//! Panther Cloud Air network library.
//!
//! This crate holds the airport catalog, the great-circle distance
//! calculator, the hub-and-spoke network generator, the route planner, and
//! the network auditor. Higher-level consumers (the CLI, an API layer)
//! should depend on the functions exported here instead of reimplementing
//! behaviour.
//!
//! ```
//! use panther_lib::{find_route_options, generate_default_network, AirportCatalog, HubSet};
//!
//! let catalog = AirportCatalog::builtin();
//! let edges = generate_default_network(&catalog);
//! let options = find_route_options("LAX", "JFK", &edges, &HubSet::major());
//! assert!(!options.is_empty());
//! ```

#![deny(warnings)]

pub mod airport;
pub mod audit;
pub mod config;
pub mod constants;
pub mod distance;
pub mod error;
pub mod hubs;
pub mod network;
pub mod planner;
pub mod snapshot;

pub use airport::{AirportCatalog, AirportInfo, AirportRecord, MAJOR_HUBS, US_AIRPORTS};
pub use audit::{
    compute_statistics, verify_constraints, verify_constraints_with, ConstraintReport,
    NetworkStatistics, Violation,
};
pub use config::NetworkConfig;
pub use distance::{
    distance_between, distance_between_codes, distance_in, great_circle_distance, route_info,
    DistanceSource, DistanceUnit, RouteEndpoint, RouteInfo,
};
pub use error::{Error, Result};
pub use hubs::{FixedHubs, HubSelector, HubSet};
pub use network::{
    generate_default_network, generate_network, CodePair, FlightEdge, FlightNetwork,
    GenerationReport, HubPath, NetworkGenerator,
};
pub use planner::{find_route_options, FlightIndex, RouteOption, RouteType};
pub use snapshot::{FlightRecord, NetworkSnapshot};
