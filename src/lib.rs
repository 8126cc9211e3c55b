//! Facet-Scout: a Shodan facet search client
//!
//! This crate issues a faceted search query against the Shodan web interface,
//! classifies the HTML response into a fixed set of outcome categories, and on
//! success extracts the ordered list of facet values from the result markup.

pub mod classify;
pub mod config;
pub mod extract;
pub mod facets;
pub mod fetch;
pub mod query;
pub mod search;

use thiserror::Error;

/// Main error type for Facet-Scout operations
///
/// Every failure the pipeline can produce is a distinct variant so callers can
/// render each kind differently. Nothing is collapsed into a generic error and
/// nothing is retried internally.
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Client(reqwest::Error),

    #[error("Request failed at the transport level: {source}")]
    Transport { source: reqwest::Error },

    #[error("Request blocked by Cloudflare")]
    Blocked,

    #[error("HTTP error {0}")]
    Http(u16),

    #[error("Failed to parse response HTML")]
    MalformedDocument,

    #[error("Shodan notice: {0}")]
    Notice(String),

    #[error("Shodan error: {0}")]
    Service(String),

    #[error("Search request timed out on the server")]
    Timeout,

    #[error("Wildcard searches are not supported")]
    Wildcard,

    #[error("No results found")]
    NoResults,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Facet-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use classify::{classify, ClassificationOutcome};
pub use config::SearchConfig;
pub use search::SearchClient;
