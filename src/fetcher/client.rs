//! HTTP client construction

use crate::config::FetcherConfig;
use reqwest::blocking::Client;
use std::time::Duration;

/// Builds a blocking HTTP client from the fetcher configuration
///
/// The client carries the configured user agent and request/connect
/// timeouts. Redirects follow reqwest's default policy and both plain HTTP
/// and HTTPS targets are accepted, since catalog URLs may use either scheme.
///
/// # Errors
///
/// Returns the underlying `reqwest::Error` when the TLS backend cannot be
/// initialized.
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client_with_defaults() {
        let config = FetcherConfig::default();
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_build_http_client_with_custom_timeouts() {
        let config = FetcherConfig {
            user_agent: "linktrack-test/1.0".to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
        };
        assert!(build_http_client(&config).is_ok());
    }
}
