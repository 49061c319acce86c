//! Splits a flat journal export into `(date, body)` pairs.
//!
//! An export looks like this, with a literal tab on either side of `Date:`:
//!
//! ```text
//! 	Date:	5 March 2021 at 10:30
//! # Title
//! Body…
//!
//! 	Date:	6 March 2021
//! # Another title
//! ```
use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};
use std::iter::{FusedIterator, Peekable};

/// One entry as written in the export, before any date parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// The date line without the marker, e.g. `5 March 2021 at 10:30`. Trimmed.
    pub date_text: &'a str,
    /// Everything up to the next marker or the end of the export. Trimmed.
    pub body: &'a str,
}

fn marker() -> &'static Regex {
    static MARKER: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\tDate:\t([^\r\n]+)\r?(?:\n|\z)").expect("valid marker pattern")
    });
    &MARKER
}

/// Single-pass iterator over the entries of an export, in file order.
pub struct Entries<'a> {
    text: &'a str,
    markers: Peekable<CaptureMatches<'static, 'a>>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = RawEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.markers.next()?;
        let line = caps.get(0)?;
        let date_text = caps.get(1).map_or("", |m| m.as_str()).trim();

        // The body runs until the next marker starts.
        let body_end = self
            .markers
            .peek()
            .and_then(|next| next.get(0))
            .map_or(self.text.len(), |m| m.start());
        let body = self.text[line.end()..body_end].trim();

        Some(RawEntry { date_text, body })
    }
}

impl FusedIterator for Entries<'_> {}

/// Returns an iterator over every entry in `text`.
///
/// Text before the first marker is not part of any entry and is skipped; see [`preamble`].
///
/// # Examples
///
/// ```
/// # use daybook_core::extract::extract_entries;
/// let export = "\tDate:\t5 March 2021\n# My Day\nHello world";
/// let entries: Vec<_> = extract_entries(export).collect();
///
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].date_text, "5 March 2021");
/// assert_eq!(entries[0].body, "# My Day\nHello world");
/// ```
pub fn extract_entries(text: &str) -> Entries<'_> {
    Entries {
        text,
        markers: marker().captures_iter(text).peekable(),
    }
}

/// Returns the trimmed text in front of the first marker, if there is any.
pub fn preamble(text: &str) -> Option<&str> {
    let end = marker().find(text).map_or(text.len(), |m| m.start());
    let lead = text[..end].trim();
    (!lead.is_empty()).then_some(lead)
}
