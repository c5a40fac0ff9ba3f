// Shared helpers for `panther-lib` integration tests.
#![allow(dead_code)]

use std::collections::HashMap;

use panther_lib::{
    generate_default_network, AirportCatalog, CodePair, DistanceSource, FlightEdge,
};

/// Network generated from the built-in catalog with production settings.
pub fn default_network() -> (AirportCatalog, Vec<FlightEdge>) {
    let catalog = AirportCatalog::builtin();
    let edges = generate_default_network(&catalog);
    (catalog, edges)
}

/// Symmetric distance table for probing generator thresholds exactly.
#[derive(Debug, Default)]
pub struct FixedDistances {
    table: HashMap<CodePair, f64>,
}

impl FixedDistances {
    pub fn new(entries: &[(&str, &str, f64)]) -> Self {
        let table = entries
            .iter()
            .map(|(a, b, miles)| (CodePair::new(a, b), *miles))
            .collect();
        Self { table }
    }
}

impl DistanceSource for FixedDistances {
    fn miles(&self, from: &str, to: &str) -> Option<f64> {
        if from == to {
            return Some(0.0);
        }
        self.table.get(&CodePair::new(from, to)).copied()
    }
}
