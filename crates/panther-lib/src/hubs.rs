//! Hub sets and hub selection policies.
//!
//! A [`HubSet`] is an ordered list of distinct airport codes. Order matters:
//! route options that tie on distance are reported in hub order.

use std::collections::HashSet;

use serde::Serialize;

use crate::airport::catalog::normalize_code;
use crate::airport::{AirportCatalog, MAJOR_HUBS};
use crate::error::{Error, Result};

/// Ordered set of hub airport codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HubSet {
    codes: Vec<String>,
}

impl HubSet {
    /// Build a hub set whose codes must all exist in `catalog`.
    pub fn new<I, S>(catalog: &AirportCatalog, codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let hubs = Self::from_codes(codes)?;
        if let Some(unknown) = hubs.codes.iter().find(|code| !catalog.contains(code)) {
            return Err(Error::UnknownHub {
                code: unknown.clone(),
            });
        }
        Ok(hubs)
    }

    /// Build a hub set without consulting a catalog. Codes are normalised and
    /// must be distinct.
    pub fn from_codes<I, S>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for code in codes {
            let code = normalize_code(code.as_ref());
            if !seen.insert(code.clone()) {
                return Err(Error::DuplicateHub { code });
            }
            ordered.push(code);
        }
        Ok(Self { codes: ordered })
    }

    /// The default four-hub network: ATL, DFW, DEN, ORD.
    pub fn major() -> Self {
        Self {
            codes: MAJOR_HUBS.iter().map(|code| code.to_string()).collect(),
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|hub| hub == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.codes.iter().map(String::as_str)
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl Default for HubSet {
    fn default() -> Self {
        Self::major()
    }
}

/// Policy that designates hubs for a generation run.
pub trait HubSelector {
    /// Choose hubs for the given airport list.
    fn select(&self, catalog: &AirportCatalog, airports: &[String]) -> Result<HubSet>;
}

/// Selector that always returns a fixed, pre-chosen list of hubs.
#[derive(Debug, Clone)]
pub struct FixedHubs {
    codes: Vec<String>,
}

impl FixedHubs {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for FixedHubs {
    fn default() -> Self {
        Self::new(MAJOR_HUBS)
    }
}

impl HubSelector for FixedHubs {
    fn select(&self, catalog: &AirportCatalog, _airports: &[String]) -> Result<HubSet> {
        HubSet::new(catalog, &self.codes)
    }
}
