pub mod classify;

use crate::models::{Entry, RejectedLine};
use classify::{LineShape, classify_line};

/// Everything recovered from one pass over a mindex file: the validated
/// entries in input order, plus the lines that fit no entry shape.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    pub entries: Vec<Entry>,
    pub rejected: Vec<RejectedLine>,
}

/// Parses mindex text into entries and rejected lines.
///
/// Malformed content is data, not a fault: a line that fits no entry shape is
/// collected into `rejected` and parsing continues with the next line. Comment
/// and blank lines produce neither.
pub fn parse_entries(input: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (index, line) in input.lines().enumerate() {
        match classify_line(line) {
            LineShape::Blank | LineShape::Comment => {}
            LineShape::Plain { term, pages } => {
                outcome.entries.push(Entry::new(term, pages));
            }
            LineShape::Keyed { term, pages, key } => {
                outcome.entries.push(Entry::with_sort_key(term, pages, key));
            }
            LineShape::Malformed { fields } => {
                outcome.rejected.push(RejectedLine {
                    line_number: index + 1,
                    fields,
                });
            }
        }
    }

    outcome
}
