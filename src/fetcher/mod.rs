//! Content fetching module
//!
//! This module drives the fetch/scan pipeline for a single page:
//! - Building the blocking HTTP client
//! - Resolving the response charset from the `Content-Type` header
//! - Decoding the body and scanning it for anchor markup
//!
//! Every call blocks until it completes or fails; there is no internal
//! concurrency. Callers embedding this in an event loop must dispatch to a
//! worker thread themselves.

mod charset;
mod client;

pub use charset::{charset_from_content_type, decode_body};
pub use client::build_http_client;

use crate::catalog::PageRecord;
use crate::config::FetcherConfig;
use crate::scanner::scan_links;
use crate::FetchError;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use url::Url;

/// Fetches a page and extracts its anchor markup
///
/// The URL is parsed up front so an unparseable input fails before any
/// connection attempt. The response body is read in full, decoded with the
/// charset resolved from the `Content-Type` header (platform default when
/// undetermined), and scanned line by line; the connection is dropped before
/// this function returns, on every path.
///
/// # Errors
///
/// * [`FetchError::MalformedUrl`] - the input is not a parseable URL
/// * [`FetchError::Http`] - connection, status, timeout or read failure
pub fn try_fetch_links(client: &Client, url_text: &str) -> Result<Vec<String>, FetchError> {
    let url = Url::parse(url_text).map_err(|source| FetchError::MalformedUrl {
        url: url_text.to_string(),
        source,
    })?;

    let wrap = |source: reqwest::Error| FetchError::Http {
        url: url_text.to_string(),
        source,
    };

    let response = client.get(url).send().map_err(wrap)?;
    let response = response.error_for_status().map_err(wrap)?;

    let charset = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(charset_from_content_type);

    let bytes = response.bytes().map_err(wrap)?;
    let body = decode_body(&bytes, charset.as_deref());

    Ok(scan_links(body.lines()))
}

/// Fetches a page's anchors, degrading every failure to an empty list
///
/// Compatibility view of [`try_fetch_links`] using a one-shot client built
/// from the default fetcher configuration. Malformed URLs, unreachable
/// hosts, HTTP errors and read failures all yield `vec![]` with a warning
/// log; no error reaches the caller.
pub fn fetch_links(url_text: &str) -> Vec<String> {
    let client = match build_http_client(&FetcherConfig::default()) {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("Failed to build HTTP client: {}", e);
            return Vec::new();
        }
    };

    match try_fetch_links(&client, url_text) {
        Ok(links) => links,
        Err(e) => {
            tracing::warn!("Fetch failed, returning no links: {}", e);
            Vec::new()
        }
    }
}

/// Fetches a record's URL and replaces its link list wholesale
///
/// Returns the number of anchors discovered. The record is left untouched
/// when the fetch fails.
pub fn refresh_links(record: &mut PageRecord, client: &Client) -> Result<usize, FetchError> {
    let links = try_fetch_links(client, &record.url)?;
    let count = links.len();
    record.set_links(links);
    Ok(count)
}
