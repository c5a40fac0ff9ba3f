//! Airport catalog: record types, built-in data, and lookup.
//!
//! - [`record`] - [`AirportRecord`] and the flattened [`AirportInfo`] view
//! - [`catalog`] - [`AirportCatalog`] construction and case-insensitive lookup
//! - [`data`] - built-in airport definitions, domestic list, and default hubs

pub mod catalog;
pub mod data;
pub mod record;

pub use catalog::AirportCatalog;
pub use data::{AirportDefinition, AIRPORT_DEFINITIONS, MAJOR_HUBS, US_AIRPORTS};
pub use record::{AirportInfo, AirportRecord};
