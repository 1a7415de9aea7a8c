//! Configuration module
//!
//! Handles loading and validating the optional TOML configuration:
//! - Fetcher identity and timeouts
//! - Default catalog location for the CLI
//!
//! Every field has a default, so the library is fully usable without a
//! configuration file.

mod parser;
mod types;

pub use parser::load_config;
pub use types::{CatalogConfig, Config, FetcherConfig};
