/// One validated index record extracted from a mindex line.
///
/// An entry is alphabetized by its sort key when one was given, otherwise by
/// the display term itself; the reader always sees the display term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    display_term: String,
    page_ref: String,
    sort_key: Option<String>,
}

impl Entry {
    /// Create an entry alphabetized by its own display term
    pub fn new(display_term: impl Into<String>, page_ref: impl Into<String>) -> Self {
        Self {
            display_term: display_term.into(),
            page_ref: page_ref.into(),
            sort_key: None,
        }
    }

    /// Create an entry alphabetized by an explicit sort key
    pub fn with_sort_key(
        display_term: impl Into<String>,
        page_ref: impl Into<String>,
        sort_key: impl Into<String>,
    ) -> Self {
        Self {
            display_term: display_term.into(),
            page_ref: page_ref.into(),
            sort_key: Some(sort_key.into()),
        }
    }

    /// Get the text shown in the typeset index
    pub fn display_term(&self) -> &str {
        &self.display_term
    }

    /// Get the free-form page reference text
    pub fn page_ref(&self) -> &str {
        &self.page_ref
    }

    /// Get the explicit sort key, if one was given
    pub fn sort_key(&self) -> Option<&str> {
        self.sort_key.as_deref()
    }

    /// Text this entry is alphabetized by: the explicit sort key when present,
    /// otherwise the display term.
    pub fn sort_text(&self) -> &str {
        self.sort_key.as_deref().unwrap_or(&self.display_term)
    }
}

/// An input line that fits neither entry shape; the raw tab-split fields are
/// kept verbatim for the diagnostics report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based position of the line in the input file.
    pub line_number: usize,
    /// The fields exactly as split, untrimmed.
    pub fields: Vec<String>,
}
