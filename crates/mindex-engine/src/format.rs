use crate::models::Entry;

/// Renders sorted entries into the index body consumed by the document
/// template: one `\item` directive per entry, concatenated with no separator.
///
/// Term and page text pass through verbatim; escaping TeX specials is the
/// mindex file author's concern. Zero entries yield the empty string.
pub fn format_index(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|entry| format!("\\item ~{}, {}", entry.display_term(), entry.page_ref()))
        .collect()
}
