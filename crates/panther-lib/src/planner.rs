//! Route options between two airports over a generated network.
//!
//! Hub connections are computed on demand from two independent legs; they
//! are never stored as edges.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::airport::catalog::normalize_code;
use crate::hubs::HubSet;
use crate::network::FlightEdge;

/// Kind of itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    Direct,
    HubConnection,
}

impl fmt::Display for RouteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteType::Direct => "direct",
            RouteType::HubConnection => "hub_connection",
        };
        f.write_str(value)
    }
}

/// One way of travelling from an origin to a destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteOption {
    pub route_type: RouteType,
    pub path: Vec<String>,
    pub total_distance_miles: f64,
    pub stop_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hub_used: Option<String>,
}

impl RouteOption {
    fn direct(origin: &str, destination: &str, distance: f64) -> Self {
        Self {
            route_type: RouteType::Direct,
            path: vec![origin.to_string(), destination.to_string()],
            total_distance_miles: distance,
            stop_count: 0,
            hub_used: None,
        }
    }

    fn via_hub(origin: &str, hub: &str, destination: &str, distance: f64) -> Self {
        Self {
            route_type: RouteType::HubConnection,
            path: vec![
                origin.to_string(),
                hub.to_string(),
                destination.to_string(),
            ],
            total_distance_miles: distance,
            stop_count: 1,
            hub_used: Some(hub.to_string()),
        }
    }

    /// Path rendered as `A -> B -> C`.
    pub fn path_label(&self) -> String {
        self.path.join(" -> ")
    }
}

/// Lookup table from `(origin, destination)` to the first matching edge in
/// sequence order, so indexed answers match a front-to-back scan.
#[derive(Debug, Clone, Default)]
pub struct FlightIndex<'a> {
    legs: HashMap<(&'a str, &'a str), &'a FlightEdge>,
    direct: HashMap<(&'a str, &'a str), &'a FlightEdge>,
}

impl<'a> FlightIndex<'a> {
    pub fn new(edges: &'a [FlightEdge]) -> Self {
        let mut legs = HashMap::with_capacity(edges.len());
        let mut direct = HashMap::with_capacity(edges.len());
        for edge in edges {
            let key = (edge.origin.as_str(), edge.destination.as_str());
            legs.entry(key).or_insert(edge);
            if edge.is_direct {
                direct.entry(key).or_insert(edge);
            }
        }
        Self { legs, direct }
    }

    /// First edge from `origin` to `destination`, if any.
    pub fn leg(&self, origin: &str, destination: &str) -> Option<&'a FlightEdge> {
        self.legs.get(&(origin, destination)).copied()
    }

    /// First direct edge from `origin` to `destination`, if any.
    pub fn direct_leg(&self, origin: &str, destination: &str) -> Option<&'a FlightEdge> {
        self.direct.get(&(origin, destination)).copied()
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Route options between two codes, shortest first.
    pub fn route_options(
        &self,
        origin: &str,
        destination: &str,
        hubs: &HubSet,
    ) -> Vec<RouteOption> {
        let origin = normalize_code(origin);
        let destination = normalize_code(destination);
        let mut options = Vec::new();

        if let Some(edge) = self.direct_leg(&origin, &destination) {
            options.push(RouteOption::direct(
                &origin,
                &destination,
                edge.distance_miles,
            ));
        }

        for hub in hubs.iter() {
            if hub == origin || hub == destination {
                continue;
            }
            if let (Some(first), Some(second)) =
                (self.leg(&origin, hub), self.leg(hub, &destination))
            {
                options.push(RouteOption::via_hub(
                    &origin,
                    hub,
                    &destination,
                    first.distance_miles + second.distance_miles,
                ));
            }
        }

        // stable: ties keep direct first, then hub order
        options.sort_by(|a, b| compare_distance(a.total_distance_miles, b.total_distance_miles));
        options
    }
}

/// Route options from `origin` to `destination` over `edges`, shortest first.
///
/// Returns an empty list when nothing connects the two airports, including
/// when either code is unknown.
pub fn find_route_options(
    origin: &str,
    destination: &str,
    edges: &[FlightEdge],
    hubs: &HubSet,
) -> Vec<RouteOption> {
    FlightIndex::new(edges).route_options(origin, destination, hubs)
}

fn compare_distance(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Greater)
}
