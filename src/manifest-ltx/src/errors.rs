//! Error types for sitemap ingestion and llms.txt manifest handling.

use thiserror::Error;

/// Main error type for every manifest operation.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller supplied malformed arguments (empty title, item without a URL, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation needs state that has not been loaded yet.
    #[error("Missing data: {0}")]
    Data(String),

    /// Sitemap text yielded no usable entries.
    #[error("Sitemap parsing failed: {0}")]
    Parse(String),

    /// Manifest text violates the llms.txt dialect beyond what correction can heal.
    #[error("Invalid llms.txt structure: {0}")]
    Structure(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A fetcher other than the HTTP client could not deliver the location.
    #[error("Fetch failed for {location}: {message}")]
    Transport { location: String, message: String },

    /// Both the given scheme and its http/https counterpart failed.
    #[error("Failed to fetch {location} over both HTTP and HTTPS: {first}; {second}")]
    SchemeFallback {
        location: String,
        first: String,
        second: String,
    },

    /// Local read or write failed.
    #[error("I/O error on {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    /// Parsed manifest could not be written as JSON.
    #[error("JSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(location: &str, source: std::io::Error) -> Self {
        Error::Io {
            location: location.to_string(),
            source,
        }
    }
}

/// Type alias for Result with the crate's Error
pub type Result<T> = std::result::Result<T, Error>;
