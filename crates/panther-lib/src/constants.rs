//! Named constants shared by the distance calculator and network generator.

/// Mean Earth radius in statute miles used by the haversine formula.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Kilometres per statute mile.
pub const KM_PER_MILE: f64 = 1.60934;

/// Shortest route the airline will fly. Inclusive: a pair exactly at this
/// distance receives flights.
pub const MIN_FLIGHT_DISTANCE_MILES: f64 = 150.0;

/// Direct flights shorter than this are always created between spokes.
pub const DIRECT_PREFERENCE_CEILING_MILES: f64 = 1000.0;

/// Longer direct flights must be at most this fraction of the best hub
/// routing to be worth adding.
pub const EFFICIENCY_RATIO_THRESHOLD: f64 = 0.85;

/// Ratio assumed when no hub can route a pair. Fails the efficiency check.
pub const NO_HUB_PATH_RATIO: f64 = 1.0;
