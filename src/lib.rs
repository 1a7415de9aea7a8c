//! Linktrack: a single-page hyperlink discoverer
//!
//! This crate fetches an HTML document over HTTP(S) and extracts the raw
//! `<a ...>...</a>` markup it references, and separately loads a flat-file
//! catalog of named pages to be tracked. It performs no DOM construction,
//! no recursive crawling and no URL normalization; anchors are opaque
//! substrings and pages are fetched one at a time, synchronously.

pub mod catalog;
pub mod config;
pub mod fetcher;
pub mod scanner;

use thiserror::Error;

/// Main error type for linktrack operations
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
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

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
}

/// Fetch-path errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Malformed URL {url}: {source}")]
    MalformedUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),
}

/// Result type alias for linktrack operations
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use catalog::{load_pages, try_load_pages, Catalog, PageRecord};
pub use config::Config;
pub use fetcher::{build_http_client, fetch_links, refresh_links, try_fetch_links};
pub use scanner::{find_anchors, scan_links, AnchorLines};
