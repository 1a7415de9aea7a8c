//! Catalog file loading
//!
//! A catalog is a plain text file with one `name;url` entry per line. Lines
//! are split on the first `;` only, so names cannot contain the separator.
//! Lines without a separator, and lines whose URL half does not look like an
//! absolute HTTP(S) URL, are skipped rather than failing the load.

use crate::catalog::PageRecord;
use crate::CatalogError;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

/// Accepts `http(s)://`, a dotted host of letters/digits/`.`/`-` with a
/// top-level label of at least two letters, then any suffix
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(http|https)://[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}.*$")
        .expect("URL pattern is a valid regex")
});

/// Result of loading a catalog file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Accepted records, in file order, each with an empty link list
    pub pages: Vec<PageRecord>,

    /// Number of lines dropped by the separator or URL checks
    pub skipped: usize,
}

/// Loads the catalog at `path`, reporting skipped lines
///
/// Lines are streamed one at a time; the file handle is released when the
/// load returns, on success or failure. A line is accepted when, after
/// trimming, it contains a `;` and the part after the first `;` (trimmed
/// again) matches [`URL_PATTERN`]; everything else is counted in
/// [`Catalog::skipped`] and logged at debug level.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] when the file cannot be opened or a read
/// fails partway through.
pub fn try_load_pages(path: &Path) -> Result<Catalog, CatalogError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut pages = Vec::new();
    let mut skipped = 0;

    for line in reader.lines() {
        let line = line?;
        match parse_line(&line) {
            Some(record) => pages.push(record),
            None => {
                // Blank lines carry no entry and are not worth counting.
                if !line.trim().is_empty() {
                    tracing::debug!("Skipping malformed catalog line: {}", line.trim());
                    skipped += 1;
                }
            }
        }
    }

    Ok(Catalog { pages, skipped })
}

/// Loads the catalog at `path`, degrading every failure to an empty list
///
/// Compatibility view of [`try_load_pages`]: an unreadable or missing file
/// yields `vec![]` with a warning log instead of an error. Loading the same
/// unmodified file twice yields equal results.
pub fn load_pages(path: &Path) -> Vec<PageRecord> {
    match try_load_pages(path) {
        Ok(catalog) => {
            if catalog.skipped > 0 {
                tracing::debug!(
                    "Catalog {} had {} malformed line(s)",
                    path.display(),
                    catalog.skipped
                );
            }
            catalog.pages
        }
        Err(e) => {
            tracing::warn!("Failed to load catalog {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Parses one physical line into a record, or rejects it
fn parse_line(line: &str) -> Option<PageRecord> {
    let line = line.trim();
    if !line.contains(';') {
        return None;
    }

    let (name, url) = line.split_once(';')?;
    let url = url.trim();
    if !URL_PATTERN.is_match(url) {
        return None;
    }

    Some(PageRecord::new(name.trim(), url))
}
