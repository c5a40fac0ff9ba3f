//! Airport catalog construction and lookup.
//!
//! The catalog is an immutable value built once, either from the built-in
//! definitions or from a CSV file, and then shared by reference. Lookups are
//! case-insensitive and report unknown codes as `None`.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::{Error, Result};

use super::data::AIRPORT_DEFINITIONS;
use super::record::{AirportInfo, AirportRecord};

/// Read-only registry of airports keyed by code.
#[derive(Debug, Clone, Default)]
pub struct AirportCatalog {
    airports: HashMap<String, AirportRecord>,
    order: Vec<String>,
    source: Option<PathBuf>,
}

impl AirportCatalog {
    /// Build the catalog from the built-in airport definitions.
    pub fn builtin() -> Self {
        let mut airports = HashMap::with_capacity(AIRPORT_DEFINITIONS.len());
        let mut order = Vec::with_capacity(AIRPORT_DEFINITIONS.len());
        for definition in AIRPORT_DEFINITIONS {
            let record = AirportRecord::from(definition);
            order.push(record.code.clone());
            airports.insert(record.code.clone(), record);
        }
        Self {
            airports,
            order,
            source: None,
        }
    }

    /// Build a catalog from arbitrary records, validating each one.
    ///
    /// Codes are normalised to uppercase before validation. Duplicate codes
    /// are rejected.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = AirportRecord>,
    {
        let mut airports = HashMap::new();
        let mut order = Vec::new();
        for mut record in records {
            record.code = normalize_code(&record.code);
            record.validate()?;
            if airports.contains_key(&record.code) {
                return Err(Error::DuplicateAirport { code: record.code });
            }
            order.push(record.code.clone());
            airports.insert(record.code.clone(), record);
        }
        Ok(Self {
            airports,
            order,
            source: None,
        })
    }

    /// Load a catalog from a CSV file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        debug!(
            path = %path.display(),
            airports = catalog.len(),
            "loaded airport catalog"
        );
        Ok(catalog)
    }

    /// Load a catalog from CSV data.
    ///
    /// Header names are matched loosely (`iata` for `code`, `state` for
    /// `region`, `lat`/`lon` for coordinates and so on). `code`, `name`,
    /// `city`, `latitude` and `longitude` are required.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::AirportDataValidation {
                message: format!("failed to read airport CSV headers: {err}"),
            })?
            .clone();

        let normalize = |s: &str| {
            s.trim()
                .to_ascii_lowercase()
                .chars()
                .map(|c| if c.is_whitespace() || c == '-' { '_' } else { c })
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
        };
        let normalized_headers: Vec<String> = headers.iter().map(&normalize).collect();

        let synonyms: &[(&str, &[&str])] = &[
            ("code", &["code", "iata", "iata_code", "airport_code"]),
            ("name", &["name", "airport_name", "airport"]),
            ("city", &["city"]),
            ("region", &["region", "state", "province"]),
            ("latitude", &["latitude", "lat"]),
            ("longitude", &["longitude", "lon", "lng", "long"]),
            ("metro_area", &["metro_area", "metro", "metroarea"]),
        ];

        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for (canon, alts) in synonyms {
            'outer: for alt in *alts {
                let alt_n = normalize(alt);
                for (i, h) in normalized_headers.iter().enumerate() {
                    if h == &alt_n {
                        index_map.insert(*canon, i);
                        break 'outer;
                    }
                }
            }
        }

        let missing: Vec<&str> = ["code", "name", "city", "latitude", "longitude"]
            .into_iter()
            .filter(|c| !index_map.contains_key(c))
            .collect();
        if !missing.is_empty() {
            return Err(Error::AirportDataValidation {
                message: format!(
                    "airport CSV missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut records = Vec::new();
        for (offset, result) in csv_reader.records().enumerate() {
            // header occupies line 1
            let row = offset + 2;
            let record = result.map_err(|e| Error::AirportDataValidation {
                message: e.to_string(),
            })?;

            let get = |field: &str| -> Option<String> {
                index_map
                    .get(field)
                    .and_then(|&i| record.get(i))
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
            };
            let coordinate = |field: &str, code: &str| -> Result<f64> {
                get(field)
                    .ok_or_else(|| Error::AirportDataValidation {
                        message: format!("missing {field} for airport '{code}' at row {row}"),
                    })?
                    .parse::<f64>()
                    .map_err(|e| Error::AirportDataValidation {
                        message: format!("invalid {field} for airport '{code}' at row {row}: {e}"),
                    })
            };

            let code = get("code").ok_or_else(|| Error::AirportDataValidation {
                message: format!("missing code at row {row}"),
            })?;
            let latitude = coordinate("latitude", &code)?;
            let longitude = coordinate("longitude", &code)?;

            records.push(AirportRecord {
                name: get("name").unwrap_or_default(),
                city: get("city").unwrap_or_default(),
                region: get("region"),
                latitude,
                longitude,
                metro_area: get("metro_area"),
                code,
            });
        }

        Self::from_records(records)
    }

    /// Look up an airport by code (case-insensitive).
    pub fn lookup(&self, code: &str) -> Option<&AirportRecord> {
        self.airports.get(&normalize_code(code))
    }

    /// Whether the catalog knows the given code.
    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_some()
    }

    /// Look up an airport, producing a diagnostic error with suggestions when
    /// the code is unknown.
    pub fn resolve(&self, code: &str) -> Result<&AirportRecord> {
        self.lookup(code).ok_or_else(|| Error::UnknownAirport {
            code: normalize_code(code),
            suggestions: self.fuzzy_matches(code, 3),
        })
    }

    /// Latitude/longitude for a code.
    pub fn coordinates(&self, code: &str) -> Option<(f64, f64)> {
        self.lookup(code).map(AirportRecord::coordinates)
    }

    /// Flattened info record for a code.
    pub fn info(&self, code: &str) -> Option<AirportInfo> {
        self.lookup(code).map(AirportInfo::from)
    }

    /// Snapshot of every record in definition order.
    ///
    /// The returned vector is an independent copy.
    pub fn list_all(&self) -> Vec<AirportRecord> {
        self.records().cloned().collect()
    }

    /// Iterate records in definition order without cloning.
    pub fn records(&self) -> impl Iterator<Item = &AirportRecord> + '_ {
        self.order.iter().filter_map(|code| self.airports.get(code))
    }

    /// Codes in definition order.
    pub fn codes(&self) -> Vec<String> {
        self.order.clone()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Codes within one edit of `code`, capped at `limit`.
    ///
    /// Only the closest tier is returned: an exact match, then swapped
    /// adjacent letters, then any other single edit. Ties sort by code.
    pub fn fuzzy_matches(&self, code: &str, limit: usize) -> Vec<String> {
        let needle = normalize_code(code);
        let mut scored: Vec<(u8, &String)> = self
            .order
            .iter()
            .filter_map(|candidate| {
                let edits = strsim::damerau_levenshtein(&needle, candidate);
                let tier = match edits {
                    0 => 0,
                    // a swap costs two plain edits but one Damerau edit
                    1 if strsim::levenshtein(&needle, candidate) > 1 => 1,
                    1 => 2,
                    _ => return None,
                };
                Some((tier, candidate))
            })
            .collect();
        scored.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then_with(|| a.1.as_str().cmp(b.1.as_str()))
        });

        let best = scored.first().map(|(tier, _)| *tier);
        scored
            .into_iter()
            .take_while(|(tier, _)| Some(*tier) == best)
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }
}

/// Normalise a code for lookup: trimmed and uppercased.
pub(crate) fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}
