//! Persisted network snapshots.
//!
//! A snapshot is a JSON document with `hubs`, `airports`, `flights`, and
//! `statistics`. Flight distances and statistic distances are rounded to two
//! decimal places. The field names are shared with snapshots produced by
//! other tooling and must not change.

use std::fs;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::audit::{compute_statistics, round2, NetworkStatistics};
use crate::error::{Error, Result};
use crate::hubs::HubSet;
use crate::network::FlightEdge;

/// Serialised form of a [`FlightEdge`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub origin: String,
    pub destination: String,
    pub distance_miles: f64,
    pub is_direct: bool,
    pub via_hub: Option<String>,
}

impl From<&FlightEdge> for FlightRecord {
    fn from(edge: &FlightEdge) -> Self {
        Self {
            origin: edge.origin.clone(),
            destination: edge.destination.clone(),
            distance_miles: round2(edge.distance_miles),
            is_direct: edge.is_direct,
            via_hub: edge.via_hub.clone(),
        }
    }
}

impl From<&FlightRecord> for FlightEdge {
    fn from(record: &FlightRecord) -> Self {
        Self {
            origin: record.origin.clone(),
            destination: record.destination.clone(),
            distance_miles: record.distance_miles,
            is_direct: record.is_direct,
            via_hub: record.via_hub.clone(),
        }
    }
}

/// Complete persisted network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub hubs: Vec<String>,
    pub airports: Vec<String>,
    pub flights: Vec<FlightRecord>,
    pub statistics: NetworkStatistics,
}

impl NetworkSnapshot {
    /// Capture a generated network together with its statistics.
    pub fn new<S: AsRef<str>>(edges: &[FlightEdge], hubs: &HubSet, airports: &[S]) -> Self {
        Self {
            hubs: hubs.codes().to_vec(),
            airports: airports.iter().map(|a| a.as_ref().to_string()).collect(),
            flights: edges.iter().map(FlightRecord::from).collect(),
            statistics: compute_statistics(edges, hubs, airports).rounded(),
        }
    }

    /// Edges as stored in the snapshot (distances already rounded).
    pub fn edges(&self) -> Vec<FlightEdge> {
        self.flights.iter().map(FlightEdge::from).collect()
    }

    /// Rebuild the hub set recorded in the snapshot.
    pub fn hub_set(&self) -> Result<HubSet> {
        HubSet::from_codes(&self.hubs)
    }

    /// Write pretty-printed JSON.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Write the snapshot to `path`, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = fs::File::create(path).map_err(|source| Error::Snapshot {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush()?;
        debug!(path = %path.display(), flights = self.flights.len(), "saved network snapshot");
        Ok(())
    }

    /// Read a snapshot from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let file = fs::File::open(path).map_err(|source| Error::Snapshot {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_reader(BufReader::new(file))?;
        debug!(path = %path.display(), flights = snapshot.flights.len(), "loaded network snapshot");
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flight_records_use_contract_field_names() {
        let edge = FlightEdge::direct("ATL", "JFK", 760.456);
        let value = serde_json::to_value(FlightRecord::from(&edge)).unwrap();
        assert_eq!(value["origin"], "ATL");
        assert_eq!(value["destination"], "JFK");
        assert_eq!(value["distance_miles"], 760.46);
        assert_eq!(value["is_direct"], true);
        assert!(value["via_hub"].is_null());
    }

    #[test]
    fn snapshot_of_empty_network_has_zero_average() {
        let hubs = HubSet::from_codes(["HUB"]).unwrap();
        let snapshot = NetworkSnapshot::new(&[], &hubs, &["HUB", "AAA"]);
        assert_eq!(snapshot.statistics.total_flights, 0);
        assert_eq!(snapshot.statistics.average_flight_distance, 0.0);
        assert_eq!(snapshot.statistics.airports_served, 2);
    }
}
