/// Shape of a single mindex line, judged from local facts only.
///
/// This is phase 1 of parsing: each line is classified independently,
/// without reference to surrounding lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineShape {
    /// Nothing but whitespace.
    Blank,
    /// First non-whitespace character is `#`.
    Comment,
    /// `term<TAB>pages`, or the same with a trailing empty sort-key field.
    Plain { term: String, pages: String },
    /// `term<TAB>pages<TAB>key` where the trimmed key is non-empty.
    Keyed {
        term: String,
        pages: String,
        key: String,
    },
    /// Any other field count; the raw split fields are retained.
    Malformed { fields: Vec<String> },
}

/// Classifies a line into a [`LineShape`].
///
/// Field contents are trimmed before they are consumed; the emptiness check
/// on a third field happens after trimming, so a whitespace-only sort key
/// counts as absent.
pub fn classify_line(line: &str) -> LineShape {
    if line.trim().is_empty() {
        return LineShape::Blank;
    }
    if line.trim_start().starts_with('#') {
        return LineShape::Comment;
    }

    let fields: Vec<&str> = line.split('\t').collect();
    match fields.as_slice() {
        [term, pages] => LineShape::Plain {
            term: term.trim().to_string(),
            pages: pages.trim().to_string(),
        },
        [term, pages, key] => {
            let key = key.trim();
            if key.is_empty() {
                LineShape::Plain {
                    term: term.trim().to_string(),
                    pages: pages.trim().to_string(),
                }
            } else {
                LineShape::Keyed {
                    term: term.trim().to_string(),
                    pages: pages.trim().to_string(),
                    key: key.to_string(),
                }
            }
        }
        _ => LineShape::Malformed {
            fields: fields.iter().map(|f| f.to_string()).collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn plain(term: &str, pages: &str) -> LineShape {
        LineShape::Plain {
            term: term.to_string(),
            pages: pages.to_string(),
        }
    }

    #[rstest]
    #[case::empty("", LineShape::Blank)]
    #[case::spaces_only("   ", LineShape::Blank)]
    #[case::tab_only("\t", LineShape::Blank)]
    #[case::comment("# a comment", LineShape::Comment)]
    #[case::indented_comment("   # still a comment", LineShape::Comment)]
    #[case::comment_with_tabs("# fake\tentry\there", LineShape::Comment)]
    fn test_skipped_shapes(#[case] line: &str, #[case] expected: LineShape) {
        assert_eq!(classify_line(line), expected);
    }

    #[test]
    fn test_two_fields_is_a_plain_entry() {
        assert_eq!(
            classify_line("Smith, John\t12, 45"),
            plain("Smith, John", "12, 45")
        );
    }

    #[test]
    fn test_fields_are_trimmed() {
        assert_eq!(classify_line("  apple \t 1, 2 "), plain("apple", "1, 2"));
    }

    #[test]
    fn test_empty_third_field_is_a_plain_entry() {
        assert_eq!(classify_line("apple\t1\t"), plain("apple", "1"));
    }

    #[test]
    fn test_whitespace_only_third_field_counts_as_absent() {
        assert_eq!(classify_line("apple\t1\t   "), plain("apple", "1"));
    }

    #[test]
    fn test_three_fields_with_key() {
        assert_eq!(
            classify_line("Dr. Smith\t3\tSmith"),
            LineShape::Keyed {
                term: "Dr. Smith".to_string(),
                pages: "3".to_string(),
                key: "Smith".to_string(),
            }
        );
    }

    #[rstest]
    #[case::one_field("no tabs here", 1)]
    #[case::four_fields("A\tB\tC\tD", 4)]
    #[case::five_fields("a\tb\tc\td\te", 5)]
    fn test_other_field_counts_are_malformed(#[case] line: &str, #[case] count: usize) {
        match classify_line(line) {
            LineShape::Malformed { fields } => assert_eq!(fields.len(), count),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_fields_are_kept_verbatim() {
        let shape = classify_line("A \tB\t C\tD");

        assert_eq!(
            shape,
            LineShape::Malformed {
                fields: vec![
                    "A ".to_string(),
                    "B".to_string(),
                    " C".to_string(),
                    "D".to_string()
                ],
            }
        );
    }
}
