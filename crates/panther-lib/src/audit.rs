//! Post-generation invariant checks and network statistics.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::MIN_FLIGHT_DISTANCE_MILES;
use crate::hubs::HubSet;
use crate::network::{CodePair, FlightEdge};

/// Edge that breaks the minimum-distance invariant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Position of the edge in the audited sequence.
    pub index: usize,
    pub origin: String,
    pub destination: String,
    pub distance_miles: f64,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}: {:.2} miles",
            self.origin, self.destination, self.distance_miles
        )
    }
}

/// Outcome of [`verify_constraints`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintReport {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

impl ConstraintReport {
    /// Human-readable violation descriptions in sequence order.
    pub fn descriptions(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

/// Check every edge against the default 150-mile minimum.
pub fn verify_constraints(edges: &[FlightEdge]) -> ConstraintReport {
    verify_constraints_with(edges, MIN_FLIGHT_DISTANCE_MILES)
}

/// Check every edge against a custom minimum distance.
pub fn verify_constraints_with(edges: &[FlightEdge], min_distance_miles: f64) -> ConstraintReport {
    let violations: Vec<Violation> = edges
        .iter()
        .enumerate()
        .filter(|(_, edge)| edge.distance_miles < min_distance_miles)
        .map(|(index, edge)| Violation {
            index,
            origin: edge.origin.clone(),
            destination: edge.destination.clone(),
            distance_miles: edge.distance_miles,
        })
        .collect();

    for violation in &violations {
        warn!(%violation, "flight below minimum distance");
    }

    ConstraintReport {
        valid: violations.is_empty(),
        violations,
    }
}

/// Aggregate figures over a flight network.
///
/// Field names are shared with persisted snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkStatistics {
    pub total_flights: usize,
    pub unique_routes: usize,
    pub direct_flights: usize,
    pub hub_connections: usize,
    pub total_network_distance: f64,
    pub average_flight_distance: f64,
    pub hubs: Vec<String>,
    pub airports_served: usize,
}

impl NetworkStatistics {
    /// Copy with distance figures rounded to two decimal places.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            total_network_distance: round2(self.total_network_distance),
            average_flight_distance: round2(self.average_flight_distance),
            ..self.clone()
        }
    }
}

/// Summarise a network. The mean distance is zero for an empty edge list.
pub fn compute_statistics<S: AsRef<str>>(
    edges: &[FlightEdge],
    hubs: &HubSet,
    airports: &[S],
) -> NetworkStatistics {
    let unique_routes: HashSet<CodePair> = edges.iter().map(FlightEdge::pair).collect();
    let direct_flights = edges.iter().filter(|edge| edge.is_direct).count();
    let hub_connections = edges
        .iter()
        .filter(|edge| hubs.contains(&edge.origin) || hubs.contains(&edge.destination))
        .count();

    let total_network_distance = edges
        .iter()
        .fold(0.0, |total, edge| total + edge.distance_miles);
    let average_flight_distance = if edges.is_empty() {
        0.0
    } else {
        total_network_distance / edges.len() as f64
    };

    NetworkStatistics {
        total_flights: edges.len(),
        unique_routes: unique_routes.len(),
        direct_flights,
        hub_connections,
        total_network_distance,
        average_flight_distance,
        hubs: hubs.codes().to_vec(),
        airports_served: airports.len(),
    }
}

/// Round half away from zero to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
