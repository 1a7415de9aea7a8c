//! Page catalog module
//!
//! This module covers the flat-file catalog of tracked pages:
//! - The [`PageRecord`] entity (name, URL, discovered links)
//! - Loading and validating `name;url` catalog lines

mod loader;
mod record;

pub use loader::{load_pages, try_load_pages, Catalog};
pub use record::PageRecord;
