use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the SkyRoute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Dataset file could not be located at the resolved path.
    #[error("dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the dataset")]
    ProjectDirsUnavailable,

    /// Raised when a row in one of the source tables cannot be interpreted.
    #[error("invalid {table} record at line {line}: {reason}")]
    InvalidRecord {
        table: &'static str,
        line: u64,
        reason: String,
    },

    /// Raised when an airport code could not be found in the catalog.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when no chain of direct flights connects two airports.
    #[error("no route found between {origin} and {destination}")]
    RouteNotFound { origin: String, destination: String },

    /// Raised when a computed route plan lacks any airports.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when the configured cost rate cannot produce non-negative costs.
    #[error("invalid cost rate {rate}; expected a finite, non-negative value")]
    InvalidRate { rate: f64 },

    /// Wrapper for CSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
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
