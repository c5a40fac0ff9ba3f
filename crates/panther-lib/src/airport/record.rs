//! Airport record type and validation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::data::AirportDefinition;

/// Immutable airport entry keyed by its three-letter code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportRecord {
    pub code: String,
    pub name: String,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metro_area: Option<String>,
}

impl AirportRecord {
    /// Latitude/longitude pair in degrees.
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Validate the record's code and coordinate ranges.
    pub fn validate(&self) -> Result<()> {
        if self.code.len() != 3 || !self.code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(Error::InvalidAirport {
                code: self.code.clone(),
                message: "code must be three uppercase ASCII letters".to_string(),
            });
        }
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::InvalidAirport {
                code: self.code.clone(),
                message: format!("latitude {} outside [-90, 90]", self.latitude),
            });
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::InvalidAirport {
                code: self.code.clone(),
                message: format!("longitude {} outside [-180, 180]", self.longitude),
            });
        }
        Ok(())
    }

    /// Display label used in listings, e.g. `Atlanta, GA`.
    pub fn location_label(&self) -> String {
        match self.region.as_deref() {
            Some(region) => format!("{}, {}", self.city, region),
            None => self.city.clone(),
        }
    }
}

impl From<&AirportDefinition> for AirportRecord {
    fn from(def: &AirportDefinition) -> Self {
        Self {
            code: def.code.to_string(),
            name: def.name.to_string(),
            city: def.city.to_string(),
            region: non_empty(def.region),
            latitude: def.latitude,
            longitude: def.longitude,
            metro_area: non_empty(def.metro_area),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Flattened airport description exposed to API consumers.
///
/// Field names follow the established `iata`/`state` vocabulary of the
/// airport info endpoint rather than the record's own field names.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirportInfo {
    pub iata: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub metro_area: String,
    pub latitude: f64,
    pub longitude: f64,
    pub coordinates: (f64, f64),
}

impl From<&AirportRecord> for AirportInfo {
    fn from(record: &AirportRecord) -> Self {
        Self {
            iata: record.code.clone(),
            name: record.name.clone(),
            city: record.city.clone(),
            state: record.region.clone().unwrap_or_default(),
            metro_area: record.metro_area.clone().unwrap_or_default(),
            latitude: record.latitude,
            longitude: record.longitude,
            coordinates: record.coordinates(),
        }
    }
}
