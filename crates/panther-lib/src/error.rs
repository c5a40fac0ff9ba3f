use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Panther network library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The core lookups (catalog, distance, route planning) report missing data
/// through `Option`; this type is reserved for construction-time validation
/// and for callers that want a diagnostic message instead of a bare `None`.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an airport code could not be found in the catalog.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when a hub set references a code that is not in the catalog.
    #[error("hub {code} is not present in the airport catalog")]
    UnknownHub { code: String },

    /// Raised when the same hub appears more than once in a hub set.
    #[error("hub {code} listed more than once")]
    DuplicateHub { code: String },

    /// Raised when two catalog entries share the same code.
    #[error("duplicate airport code encountered: {code}")]
    DuplicateAirport { code: String },

    /// Raised when an airport record fails validation.
    #[error("invalid airport {code}: {message}")]
    InvalidAirport { code: String, message: String },

    /// Raised when a CSV airport catalog is malformed.
    #[error("invalid airport data: {message}")]
    AirportDataValidation { message: String },

    /// Raised when a distance unit string is not recognised by strict parsing.
    #[error("unsupported distance unit: {unit}; expected miles, kilometers, or km")]
    UnsupportedUnit { unit: String },

    /// Raised when a snapshot file could not be read or written.
    #[error("failed to access snapshot at {path}: {source}")]
    Snapshot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON (de)serialisation errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
