use mindex_engine::{
    DocumentParams, Entry, format_index, parse_entries, render_document, sort_entries,
};
use pretty_assertions::assert_eq;

/// A small but realistic mindex file: comments, blanks, a keyed entry, same
/// term in two cases, and one malformed line.
const SAMPLE: &str = "\
# People mentioned in volume 3
Smith, John\t12, 45
apple\t1
Dr. Smith\t3\tSmith

Apple\t2
A\tB\tC\tD
Zywicki, Ann\t80
";

#[test]
fn parse_sort_format_pipeline() {
    let mut outcome = parse_entries(SAMPLE);

    // One malformed line, everything else recovered
    assert_eq!(outcome.entries.len(), 5);
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].line_number, 7);

    sort_entries(&mut outcome.entries);

    let terms: Vec<&str> = outcome
        .entries
        .iter()
        .map(|e| e.display_term())
        .collect();
    // "apple" and "Apple" share a key, so they keep input order; the keyed
    // entry lands under S while displaying its human term.
    assert_eq!(
        terms,
        vec!["apple", "Apple", "Dr. Smith", "Smith, John", "Zywicki, Ann"]
    );

    let fragment = format_index(&outcome.entries);
    assert_eq!(
        fragment,
        "\\item ~apple, 1\\item ~Apple, 2\\item ~Dr. Smith, 3\
         \\item ~Smith, John, 12, 45\\item ~Zywicki, Ann, 80"
    );
}

#[test]
fn keyed_entry_never_leaks_its_key_into_the_document() {
    let mut outcome = parse_entries("Dr. Smith\t3\tAardvark\nZebra\t9\n");
    sort_entries(&mut outcome.entries);

    // Key "Aardvark" pulls the entry to the front
    assert_eq!(outcome.entries[0].display_term(), "Dr. Smith");

    let doc = render_document(&DocumentParams {
        title: "Index".to_string(),
        content: format_index(&outcome.entries),
        closing: "footer".to_string(),
        margin_x: 1.25,
        margin_y: 1.0,
        cols: 4,
        gutter: "0.75em".to_string(),
        indent: "0.75em".to_string(),
    });

    assert!(doc.contains("\\item ~Dr. Smith, 3\\item ~Zebra, 9"));
    assert!(!doc.contains("Aardvark"));
}

#[test]
fn rerunning_the_normalizer_changes_nothing() {
    let mut outcome = parse_entries(SAMPLE);
    sort_entries(&mut outcome.entries);
    let first_pass = outcome.entries.clone();

    sort_entries(&mut outcome.entries);

    assert_eq!(outcome.entries, first_pass);
    assert_eq!(format_index(&outcome.entries), format_index(&first_pass));
}

#[test]
fn rejected_lines_do_not_reach_the_formatter() {
    let outcome = parse_entries("one\ttoo\tmany\ttabs\there\n");

    assert!(outcome.entries.is_empty());
    assert_eq!(format_index(&outcome.entries), "");
    assert_eq!(outcome.rejected.len(), 1);
}

#[test]
fn empty_file_renders_an_empty_index_body() {
    let mut entries = parse_entries("# only a comment\n").entries;
    sort_entries(&mut entries);

    let doc = render_document(&DocumentParams {
        title: "Empty".to_string(),
        content: format_index(&entries),
        closing: "footer".to_string(),
        margin_x: 1.0,
        margin_y: 1.0,
        cols: 2,
        gutter: "0.75em".to_string(),
        indent: "0.75em".to_string(),
    });

    assert!(doc.contains("\\begin{theindex}\n\n\\end{theindex}"));
}

#[test]
fn sorting_preserves_every_parsed_entry() {
    let mut outcome = parse_entries(SAMPLE);
    let mut expected: Vec<Entry> = outcome.entries.clone();

    sort_entries(&mut outcome.entries);

    expected.sort_by_key(|e| e.sort_text().to_lowercase());
    assert_eq!(outcome.entries, expected);
}
