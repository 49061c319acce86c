//! Pure Markdown rendering helpers.
//!
//! Entry page:
//!   ---
//!   title: "5. My Day"
//!   date: 2021-03-05
//!   weight: 210305
//!   ---
//!
//!   # My Day
//!
//!   5 March 2021
//!
//!   Body…
//!
//! Month index:
//!   ---
//!   title: "March 2021"
//!   bookCollapseSection: true
//!   weight: 2103
//!   ---
//!
//!   {{< relref "20210305.md" >}}

use crate::dates::{EntryDate, MonthFolder};

/// Returns the text of the first line starting with `#`, trimmed, or `fallback`.
///
/// Lines whose remainder is blank are skipped. Headings are matched anywhere in the body,
/// not only on its first line.
pub fn extract_title(body: &str, fallback: &str) -> String {
    body.lines()
        .filter_map(|line| line.strip_prefix('#'))
        .map(str::trim)
        .find(|title| !title.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

/// Puts the display date below the first line of `body`, separated by blank lines.
/// A single-line body is returned as is.
pub fn inject_display_date(body: &str, display_date: &str) -> String {
    match body.split_once('\n') {
        Some((first, rest)) => format!("{first}\n\n{display_date}\n\n{rest}"),
        None => body.to_string(),
    }
}

/// `He said "hi"` → `He said \"hi\"`
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', "\\\"")
}

/// Front matter of an entry page, ending with the blank line that separates it from the body.
pub fn format_front_matter(date: EntryDate, title: &str) -> String {
    format!(
        "---\ntitle: \"{}. {}\"\ndate: {}\nweight: {}\n---\n\n",
        date.day_of_month(),
        escape_quotes(title),
        date.iso_date(),
        date.sort_weight()
    )
}

/// The full content of an entry page.
pub fn format_entry_document(date: EntryDate, body: &str, title_fallback: &str) -> String {
    let title = extract_title(body, title_fallback);
    let body = inject_display_date(body, &date.display_date());
    format!("{}{body}", format_front_matter(date, &title))
}

/// The `_index.md` content of a month folder. `files` are listed in the given order.
pub fn format_month_index<S: AsRef<str>>(month: &MonthFolder, files: &[S]) -> String {
    let mut content = format!(
        "---\ntitle: \"{}\"\nbookCollapseSection: true\nweight: {}\n---\n\n",
        month.month_title(),
        month.month_weight()
    );
    for file in files {
        content.push_str(&format!("{{{{< relref \"{}\" >}}}}\n", file.as_ref()));
    }
    content
}
