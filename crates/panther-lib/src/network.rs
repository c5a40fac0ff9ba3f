//! Hub-and-spoke flight network generation.
//!
//! Generation runs three passes over the airport list, in order:
//!
//! 1. hub-to-hub: every pair of distinct hubs,
//! 2. spoke-to-hub: every non-hub airport against every hub,
//! 3. spoke-to-spoke: every remaining pair of non-hub airports, subject to the
//!    direct-flight efficiency rule.
//!
//! Every emitted pair produces two directed edges and respects the minimum
//! distance. Each unordered pair is considered at most once. Output order is
//! the order of generation, so identical inputs always produce identical
//! edge sequences.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::airport::catalog::normalize_code;
use crate::airport::{AirportCatalog, US_AIRPORTS};
use crate::config::NetworkConfig;
use crate::constants::NO_HUB_PATH_RATIO;
use crate::distance::DistanceSource;
use crate::hubs::HubSet;

/// Directed, schedulable single-leg flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightEdge {
    pub origin: String,
    pub destination: String,
    pub distance_miles: f64,
    pub is_direct: bool,
    pub via_hub: Option<String>,
}

impl FlightEdge {
    /// Direct flight between two airports.
    pub fn direct(
        origin: impl Into<String>,
        destination: impl Into<String>,
        distance_miles: f64,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            distance_miles,
            is_direct: true,
            via_hub: None,
        }
    }

    /// Unordered pair of the edge's endpoints.
    pub fn pair(&self) -> CodePair {
        CodePair::new(&self.origin, &self.destination)
    }

    /// Whether either endpoint is `code`.
    pub fn touches(&self, code: &str) -> bool {
        self.origin == code || self.destination == code
    }
}

impl fmt::Display for FlightEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.is_direct, self.via_hub.as_deref()) {
            (false, Some(hub)) => write!(
                f,
                "{} -> {} via {} ({:.2} miles)",
                self.origin, self.destination, hub, self.distance_miles
            ),
            _ => write!(
                f,
                "{} -> {} ({:.2} miles)",
                self.origin, self.destination, self.distance_miles
            ),
        }
    }
}

/// Unordered airport pair stored in canonical (lexicographic) order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodePair {
    low: String,
    high: String,
}

impl CodePair {
    pub fn new(a: &str, b: &str) -> Self {
        if a <= b {
            Self {
                low: a.to_string(),
                high: b.to_string(),
            }
        } else {
            Self {
                low: b.to_string(),
                high: a.to_string(),
            }
        }
    }

    pub fn codes(&self) -> (&str, &str) {
        (&self.low, &self.high)
    }
}

/// Best connection through a single hub.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HubPath {
    pub hub: String,
    pub distance_miles: f64,
}

/// Counts of pair decisions taken during generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Hub pairs connected in the hub-to-hub pass.
    pub hub_pairs: usize,
    /// Spoke/hub pairs connected in the spoke-to-hub pass.
    pub spoke_hub_pairs: usize,
    /// Spoke pairs that received a direct flight.
    pub direct_pairs: usize,
    /// Spoke pairs at or above the minimum that failed the efficiency rule.
    pub rejected_direct_pairs: usize,
    /// Pairs skipped for being shorter than the minimum distance.
    pub below_minimum_pairs: usize,
    /// Pairs skipped because a code could not be resolved.
    pub unresolved_pairs: usize,
}

/// Edge sequence plus the decisions that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightNetwork {
    pub edges: Vec<FlightEdge>,
    pub report: GenerationReport,
}

/// Builds flight networks from a distance source, a hub set, and thresholds.
///
/// The generator holds no mutable state; [`NetworkGenerator::generate`]
/// returns a fresh, independently owned edge sequence on every call.
#[derive(Debug, Clone)]
pub struct NetworkGenerator<D> {
    distances: D,
    hubs: HubSet,
    config: NetworkConfig,
}

impl<D: DistanceSource> NetworkGenerator<D> {
    /// Create a generator with the default thresholds.
    pub fn new(distances: D, hubs: HubSet) -> Self {
        Self {
            distances,
            hubs,
            config: NetworkConfig::default(),
        }
    }

    /// Replace the generation thresholds.
    #[must_use]
    pub fn with_config(mut self, config: NetworkConfig) -> Self {
        self.config = config;
        self
    }

    pub fn hubs(&self) -> &HubSet {
        &self.hubs
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Generate the network for the given airport codes.
    pub fn generate<S: AsRef<str>>(&self, airports: &[S]) -> FlightNetwork {
        let airports: Vec<String> = airports
            .iter()
            .map(|code| normalize_code(code.as_ref()))
            .collect();

        let mut builder = PassState::default();
        self.connect_hubs(&mut builder);
        debug!(
            pairs = builder.report.hub_pairs,
            edges = builder.edges.len(),
            "hub-to-hub pass complete"
        );

        let before = builder.edges.len();
        self.connect_spokes_to_hubs(&airports, &mut builder);
        debug!(
            pairs = builder.report.spoke_hub_pairs,
            edges = builder.edges.len() - before,
            "spoke-to-hub pass complete"
        );

        let before = builder.edges.len();
        self.connect_spoke_pairs(&airports, &mut builder);
        debug!(
            pairs = builder.report.direct_pairs,
            rejected = builder.report.rejected_direct_pairs,
            edges = builder.edges.len() - before,
            "direct spoke pass complete"
        );

        info!(
            airports = airports.len(),
            hubs = self.hubs.len(),
            flights = builder.edges.len(),
            direct_pairs = builder.report.direct_pairs,
            "generated flight network"
        );

        FlightNetwork {
            edges: builder.edges,
            report: builder.report,
        }
    }

    /// Shortest origin -> hub -> destination distance over hubs other than
    /// the endpoints themselves.
    ///
    /// Ties keep the earliest hub in hub order. Returns `None` when no hub
    /// can be resolved for both legs.
    pub fn min_distance_through_hubs(&self, origin: &str, destination: &str) -> Option<HubPath> {
        let mut best: Option<HubPath> = None;
        for hub in self.hubs.iter() {
            if hub == origin || hub == destination {
                continue;
            }
            let (Some(first), Some(second)) = (
                self.distances.miles(origin, hub),
                self.distances.miles(hub, destination),
            ) else {
                continue;
            };
            let total = first + second;
            if best
                .as_ref()
                .map_or(true, |current| total < current.distance_miles)
            {
                best = Some(HubPath {
                    hub: hub.to_string(),
                    distance_miles: total,
                });
            }
        }
        best
    }

    /// Decide whether two spokes `direct_distance` miles apart get a direct
    /// flight.
    ///
    /// Pairs under the minimum never do; pairs under the direct ceiling
    /// always do. Longer pairs need `direct / best_hub <= efficiency_ratio`.
    /// Without any usable hub path the ratio is taken as 1.0, which rejects
    /// the direct flight under the default threshold.
    pub fn should_create_direct(
        &self,
        origin: &str,
        destination: &str,
        direct_distance: f64,
    ) -> bool {
        if !self.config.meets_minimum(direct_distance) {
            return false;
        }
        if direct_distance < self.config.direct_ceiling_miles {
            return true;
        }

        let ratio = match self.min_distance_through_hubs(origin, destination) {
            Some(path) if path.distance_miles > 0.0 => direct_distance / path.distance_miles,
            _ => NO_HUB_PATH_RATIO,
        };
        ratio <= self.config.efficiency_ratio
    }

    fn connect_hubs(&self, state: &mut PassState) {
        let hubs = self.hubs.codes();
        for (i, first) in hubs.iter().enumerate() {
            for second in &hubs[i + 1..] {
                let Some(distance) = self.resolve(first, second, state) else {
                    continue;
                };
                if self.config.meets_minimum(distance) {
                    state.push_pair(first, second, distance);
                    state.report.hub_pairs += 1;
                } else {
                    state.report.below_minimum_pairs += 1;
                }
                state.mark(first, second);
            }
        }
    }

    fn connect_spokes_to_hubs(&self, airports: &[String], state: &mut PassState) {
        for airport in airports {
            if self.hubs.contains(airport) {
                continue;
            }
            for hub in self.hubs.iter() {
                if state.is_processed(airport, hub) {
                    continue;
                }
                let Some(distance) = self.resolve(airport, hub, state) else {
                    continue;
                };
                if self.config.meets_minimum(distance) {
                    state.push_pair(airport, hub, distance);
                    state.report.spoke_hub_pairs += 1;
                } else {
                    state.report.below_minimum_pairs += 1;
                }
                state.mark(airport, hub);
            }
        }
    }

    fn connect_spoke_pairs(&self, airports: &[String], state: &mut PassState) {
        for (i, origin) in airports.iter().enumerate() {
            if self.hubs.contains(origin) {
                continue;
            }
            for destination in &airports[i + 1..] {
                if origin == destination
                    || self.hubs.contains(destination)
                    || state.is_processed(origin, destination)
                {
                    continue;
                }
                let Some(distance) = self.resolve(origin, destination, state) else {
                    continue;
                };

                if !self.config.meets_minimum(distance) {
                    state.report.below_minimum_pairs += 1;
                } else if self.should_create_direct(origin, destination, distance) {
                    debug!(%origin, %destination, distance, "direct flight created");
                    state.push_pair(origin, destination, distance);
                    state.report.direct_pairs += 1;
                } else {
                    debug!(%origin, %destination, distance, "direct flight rejected");
                    state.report.rejected_direct_pairs += 1;
                }
                state.mark(origin, destination);
            }
        }
    }

    /// Distance for a pair, recording and marking unresolved pairs so they
    /// are not retried.
    fn resolve(&self, a: &str, b: &str, state: &mut PassState) -> Option<f64> {
        let distance = self.distances.miles(a, b);
        if distance.is_none() {
            warn!(origin = a, destination = b, "skipping pair with unknown airport code");
            state.report.unresolved_pairs += 1;
            state.mark(a, b);
        }
        distance
    }
}

#[derive(Debug, Default)]
struct PassState {
    edges: Vec<FlightEdge>,
    processed: HashSet<CodePair>,
    report: GenerationReport,
}

impl PassState {
    fn push_pair(&mut self, a: &str, b: &str, distance: f64) {
        self.edges.push(FlightEdge::direct(a, b, distance));
        self.edges.push(FlightEdge::direct(b, a, distance));
    }

    fn mark(&mut self, a: &str, b: &str) {
        self.processed.insert(CodePair::new(a, b));
    }

    fn is_processed(&self, a: &str, b: &str) -> bool {
        self.processed.contains(&CodePair::new(a, b))
    }
}

/// Generate a network and return only its edges.
pub fn generate_network<S: AsRef<str>>(
    catalog: &AirportCatalog,
    airports: &[S],
    hubs: &HubSet,
    config: &NetworkConfig,
) -> Vec<FlightEdge> {
    NetworkGenerator::new(catalog, hubs.clone())
        .with_config(*config)
        .generate(airports)
        .edges
}

/// Generate the production network: the thirty domestic airports, the four
/// major hubs, and default thresholds.
pub fn generate_default_network(catalog: &AirportCatalog) -> Vec<FlightEdge> {
    generate_network(
        catalog,
        &US_AIRPORTS,
        &HubSet::major(),
        &NetworkConfig::default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_pair_is_order_independent() {
        assert_eq!(CodePair::new("JFK", "ATL"), CodePair::new("ATL", "JFK"));
        assert_eq!(CodePair::new("JFK", "ATL").codes(), ("ATL", "JFK"));
    }

    #[test]
    fn flight_display_includes_hub_only_for_connections() {
        let direct = FlightEdge::direct("ATL", "JFK", 760.123);
        assert_eq!(direct.to_string(), "ATL -> JFK (760.12 miles)");

        let connection = FlightEdge {
            is_direct: false,
            via_hub: Some("ORD".to_string()),
            ..FlightEdge::direct("LAX", "JFK", 2500.0)
        };
        assert_eq!(connection.to_string(), "LAX -> JFK via ORD (2500.00 miles)");
    }

    #[test]
    fn nearest_hub_wins_for_hub_path() {
        let catalog = AirportCatalog::builtin();
        let generator = NetworkGenerator::new(&catalog, HubSet::major());
        let path = generator
            .min_distance_through_hubs("BOS", "SEA")
            .expect("hub path exists");
        assert_eq!(path.hub, "ORD");
    }

    #[test]
    fn endpoints_are_excluded_from_hub_search() {
        let catalog = AirportCatalog::builtin();
        let hubs = HubSet::from_codes(["ATL"]).expect("valid hubs");
        let generator = NetworkGenerator::new(&catalog, hubs);
        assert!(generator.min_distance_through_hubs("ATL", "LAX").is_none());
    }
}
