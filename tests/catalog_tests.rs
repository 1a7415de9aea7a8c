//! Integration tests for catalog loading
//!
//! These tests exercise the public catalog API against real files written
//! with tempfile, including the permissive compatibility wrapper and the
//! diagnostic-carrying fallible variant.

use linktrack::{load_pages, try_load_pages, CatalogError};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_valid_lines_become_records_with_empty_links() {
    let file = write_catalog("Name ; http://example.com/x\n");
    let pages = load_pages(file.path());

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].name, "Name");
    assert_eq!(pages[0].url, "http://example.com/x");
    assert!(pages[0].links.is_empty());
}

#[test]
fn test_invalid_lines_are_excluded() {
    let file = write_catalog(
        "Rust;https://www.rust-lang.org\n\
         NoSemicolon\n\
         Name;ftp://x.com\n\
         Docs;http://docs.example.com\n",
    );
    let pages = load_pages(file.path());

    // Result length equals the count of valid lines.
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].name, "Rust");
    assert_eq!(pages[1].name, "Docs");
}

#[test]
fn test_skipped_count_matches_rejected_lines() {
    let file = write_catalog(
        "Rust;https://www.rust-lang.org\n\
         NoSemicolon\n\
         Name;ftp://x.com\n",
    );
    let catalog = try_load_pages(file.path()).unwrap();

    assert_eq!(catalog.pages.len(), 1);
    assert_eq!(catalog.skipped, 2);
}

#[test]
fn test_file_order_is_preserved() {
    let file = write_catalog(
        "B;http://b.example.com\n\
         A;http://a.example.com\n\
         C;http://c.example.com\n",
    );
    let pages = load_pages(file.path());
    let names: Vec<_> = pages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["B", "A", "C"]);
}

#[test]
fn test_missing_file_degrades_to_empty() {
    assert!(load_pages(Path::new("/nonexistent/catalog.txt")).is_empty());
}

#[test]
fn test_missing_file_is_inspectable_error() {
    let result = try_load_pages(Path::new("/nonexistent/catalog.txt"));
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn test_load_is_idempotent_on_unmodified_file() {
    let file = write_catalog(
        "Rust;https://www.rust-lang.org\n\
         garbage line\n",
    );
    assert_eq!(load_pages(file.path()), load_pages(file.path()));
}
