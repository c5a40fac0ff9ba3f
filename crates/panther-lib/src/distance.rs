//! Great-circle distance between coordinates and between catalog airports.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::airport::{AirportCatalog, AirportRecord};
use crate::constants::{EARTH_RADIUS_MILES, KM_PER_MILE};
use crate::error::{Error, Result};

/// Unit of a reported distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    #[default]
    Miles,
    Kilometers,
}

impl DistanceUnit {
    /// Lenient selector: "kilometers" or "km" (any case) select kilometres,
    /// every other string means miles.
    pub fn from_selector(selector: &str) -> Self {
        let lowered = selector.trim().to_ascii_lowercase();
        if lowered == "kilometers" || lowered == "km" {
            DistanceUnit::Kilometers
        } else {
            DistanceUnit::Miles
        }
    }

    /// Convert a distance in miles into this unit.
    pub fn convert_miles(self, miles: f64) -> f64 {
        match self {
            DistanceUnit::Miles => miles,
            DistanceUnit::Kilometers => miles * KM_PER_MILE,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            DistanceUnit::Miles => "miles",
            DistanceUnit::Kilometers => "kilometers",
        };
        f.write_str(value)
    }
}

impl FromStr for DistanceUnit {
    type Err = Error;

    /// Strict parsing used for user input; unrecognised units are an error.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "miles" | "mile" | "mi" => Ok(DistanceUnit::Miles),
            "kilometers" | "kilometres" | "km" => Ok(DistanceUnit::Kilometers),
            _ => Err(Error::UnsupportedUnit {
                unit: s.to_string(),
            }),
        }
    }
}

/// Haversine great-circle distance in miles between two points given in
/// degrees.
///
/// The intermediate term is clamped to `[0, 1]` so floating-point overshoot
/// near antipodal points cannot push `sqrt`/`asin` out of their domain.
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (d_lon / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_MILES * c
}

/// Distance in miles between two airport records.
pub fn distance_between(a: &AirportRecord, b: &AirportRecord) -> f64 {
    great_circle_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Distance between two airport codes in the requested unit.
///
/// `unit` uses the lenient selector: "kilometers"/"km" select kilometres,
/// anything else miles. Returns `None` if either code is unknown.
pub fn distance_between_codes(
    catalog: &AirportCatalog,
    code1: &str,
    code2: &str,
    unit: &str,
) -> Option<f64> {
    distance_in(catalog, code1, code2, DistanceUnit::from_selector(unit))
}

/// Typed variant of [`distance_between_codes`].
pub fn distance_in(
    catalog: &AirportCatalog,
    code1: &str,
    code2: &str,
    unit: DistanceUnit,
) -> Option<f64> {
    let a = catalog.lookup(code1)?;
    let b = catalog.lookup(code2)?;
    Some(unit.convert_miles(distance_between(a, b)))
}

/// Source of pairwise distances in miles used by the network generator and
/// route helpers.
///
/// The catalog is the production implementation; tests substitute fixed
/// tables to probe threshold boundaries exactly.
pub trait DistanceSource {
    /// Distance in miles between two codes, or `None` if either is unknown.
    fn miles(&self, from: &str, to: &str) -> Option<f64>;
}

impl DistanceSource for AirportCatalog {
    fn miles(&self, from: &str, to: &str) -> Option<f64> {
        distance_in(self, from, to, DistanceUnit::Miles)
    }
}

impl<T: DistanceSource + ?Sized> DistanceSource for &T {
    fn miles(&self, from: &str, to: &str) -> Option<f64> {
        (**self).miles(from, to)
    }
}

/// Summary of one endpoint in a [`RouteInfo`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEndpoint {
    pub iata: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub coordinates: (f64, f64),
}

impl From<&AirportRecord> for RouteEndpoint {
    fn from(record: &AirportRecord) -> Self {
        Self {
            iata: record.code.clone(),
            name: record.name.clone(),
            city: record.city.clone(),
            state: record.region.clone().unwrap_or_default(),
            coordinates: record.coordinates(),
        }
    }
}

/// Airport details and distance for an origin/destination pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteInfo {
    pub origin: RouteEndpoint,
    pub destination: RouteEndpoint,
    pub distance_miles: f64,
    pub distance_kilometers: f64,
}

/// Describe the route between two codes, or `None` if either is unknown.
pub fn route_info(catalog: &AirportCatalog, origin: &str, destination: &str) -> Option<RouteInfo> {
    let a = catalog.lookup(origin)?;
    let b = catalog.lookup(destination)?;
    let miles = distance_between(a, b);
    Some(RouteInfo {
        origin: RouteEndpoint::from(a),
        destination: RouteEndpoint::from(b),
        distance_miles: miles,
        distance_kilometers: DistanceUnit::Kilometers.convert_miles(miles),
    })
}
