use crate::models::Entry;

/// Sorts entries into final emission order.
///
/// The comparison key is the effective sort text, lowercased; the sort is
/// stable, so entries whose keys compare equal keep their input order. No
/// field is mutated.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by_key(|entry| entry.sort_text().to_lowercase());
}
