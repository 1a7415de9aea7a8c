use serde::{Deserialize, Serialize};

/// One tracked web page: a display name, its URL, and the anchor markup
/// discovered on it
///
/// `links` holds raw `<a ...>...</a>` substrings in discovery order. It is
/// present from construction (empty until a scan runs) and is replaced
/// wholesale by each scan, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Display label; free-form, not required to be unique
    pub name: String,

    /// Absolute HTTP(S) URL of the page
    pub url: String,

    /// Anchor markup discovered on the page, in discovery order
    pub links: Vec<String>,
}

impl PageRecord {
    /// Creates a record with no discovered links yet
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            links: Vec::new(),
        }
    }

    /// Replaces the discovered-link list as a unit
    pub fn set_links(&mut self, links: Vec<String>) {
        self.links = links;
    }
}
