//! Anchor-tag stream scanner
//!
//! This module turns a line source into a sequence of raw anchor substrings.
//! Anchors are treated as opaque markup: everything from an opening `<a`
//! through the matching `</a>`, inclusive, is captured verbatim with no
//! attribute or nesting interpretation. The scan is strictly line-local, so
//! an anchor whose closing tag sits on a later physical line is never
//! recovered.

/// Opening token that starts an anchor match
const OPEN_TOKEN: &str = "<a";

/// Closing token that ends an anchor match
const CLOSE_TOKEN: &str = "</a>";

/// Extracts every complete anchor from a single physical line
///
/// Scans left to right. Each match starts at the next `<a` occurrence and
/// ends at the first `</a>` after it; the captured substring includes both
/// tokens. Scanning resumes after the closing token. An opening token with
/// no closing token later in the line aborts the scan of this line; anchors
/// already captured are kept.
///
/// # Example
///
/// ```
/// use linktrack::scanner::find_anchors;
///
/// let anchors = find_anchors("<a href='1'>A</a>mid<a href='2'>B</a>");
/// assert_eq!(anchors, vec!["<a href='1'>A</a>", "<a href='2'>B</a>"]);
/// ```
pub fn find_anchors(line: &str) -> Vec<String> {
    let mut anchors = Vec::new();
    let mut search_from = 0;

    while let Some(rel_open) = line[search_from..].find(OPEN_TOKEN) {
        let open = search_from + rel_open;
        let after_open = open + OPEN_TOKEN.len();

        match line[after_open..].find(CLOSE_TOKEN) {
            Some(rel_close) => {
                let close_end = after_open + rel_close + CLOSE_TOKEN.len();
                anchors.push(line[open..close_end].to_string());
                search_from = close_end;
            }
            // Unterminated anchor: drop it and stop scanning this line.
            None => break,
        }
    }

    anchors
}

/// Iterator adapter yielding the anchors of each anchor-bearing line
///
/// Wraps any line source and skips lines that contain no complete anchor.
/// Each item is the non-empty, left-to-right batch of anchors found on one
/// physical line. The sequence is finite and ends with the underlying
/// source; it cannot be restarted.
pub struct AnchorLines<I> {
    lines: I,
}

impl<I> AnchorLines<I> {
    /// Wraps a line source in the anchor-extraction stage
    pub fn new(lines: I) -> Self {
        Self { lines }
    }
}

impl<I, S> Iterator for AnchorLines<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        for line in self.lines.by_ref() {
            let anchors = find_anchors(line.as_ref());
            if !anchors.is_empty() {
                return Some(anchors);
            }
        }
        None
    }
}

/// Drains a line source and flattens all anchors in discovery order
///
/// This is the aggregate operation behind [`crate::fetcher::try_fetch_links`]:
/// line order first, then left-to-right order within a line.
pub fn scan_links<I, S>(lines: I) -> Vec<String>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    AnchorLines::new(lines).flatten().collect()
}
