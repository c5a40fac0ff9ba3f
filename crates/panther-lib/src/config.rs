//! Thresholds controlling network generation.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DIRECT_PREFERENCE_CEILING_MILES, EFFICIENCY_RATIO_THRESHOLD, MIN_FLIGHT_DISTANCE_MILES,
};

/// Generation thresholds. Defaults match the production network; tests
/// override individual values to probe boundary behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Inclusive lower bound on any flight's distance.
    pub min_distance_miles: f64,
    /// Spoke pairs shorter than this always get a direct flight.
    pub direct_ceiling_miles: f64,
    /// Maximum direct/hub distance ratio for long direct flights.
    pub efficiency_ratio: f64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            min_distance_miles: MIN_FLIGHT_DISTANCE_MILES,
            direct_ceiling_miles: DIRECT_PREFERENCE_CEILING_MILES,
            efficiency_ratio: EFFICIENCY_RATIO_THRESHOLD,
        }
    }
}

impl NetworkConfig {
    #[must_use]
    pub fn with_min_distance(mut self, miles: f64) -> Self {
        self.min_distance_miles = miles;
        self
    }

    #[must_use]
    pub fn with_direct_ceiling(mut self, miles: f64) -> Self {
        self.direct_ceiling_miles = miles;
        self
    }

    #[must_use]
    pub fn with_efficiency_ratio(mut self, ratio: f64) -> Self {
        self.efficiency_ratio = ratio;
        self
    }

    /// Whether a distance satisfies the minimum-distance rule.
    pub fn meets_minimum(&self, miles: f64) -> bool {
        miles >= self.min_distance_miles
    }
}
