//! Index type definitions.
//!
//! These types describe what the extraction stage produces and what the
//! serializers consume. Entries serialize with [`serde`] so alternative
//! output formats (JSON, YAML) share one record shape.

use serde::{Deserialize, Serialize};

/// Markup construct a candidate was extracted from.
///
/// # Examples
///
/// ```
/// use api_index_core::CandidateKind;
///
/// assert_eq!(CandidateKind::Hyperlink.label(), "hyperlink");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateKind {
    /// Anchor element with an `href`; the link text is the symbol.
    Hyperlink,
    /// Level-3 heading containing a named anchor.
    Heading,
    /// Entry of a constants table, pointing at the table's heading anchor.
    Constant,
}

impl CandidateKind {
    /// Stable lowercase label used in logs and reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hyperlink => "hyperlink",
            Self::Heading => "heading",
            Self::Constant => "constant",
        }
    }
}

impl std::fmt::Display for CandidateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A symbol/URL pair extracted from one help file, before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Raw symbol text as it appears in the markup.
    pub symbol: String,
    /// Root-relative URL, optionally with a `#fragment`.
    pub url: String,
    /// Where the candidate came from.
    pub kind: CandidateKind,
}

impl Candidate {
    /// Creates a candidate.
    pub fn new(symbol: impl Into<String>, url: impl Into<String>, kind: CandidateKind) -> Self {
        Self {
            symbol: symbol.into(),
            url: url.into(),
            kind,
        }
    }
}

/// One row of a serialized index: a symbol and its canonical URL.
///
/// # Examples
///
/// ```
/// use api_index_core::IndexEntry;
///
/// let entry = IndexEntry::new("simFoo", "foo.htm#simFoo");
/// assert_eq!(entry.symbol, "simFoo");
/// assert_eq!(entry.url, "foo.htm#simFoo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndexEntry {
    pub symbol: String,
    pub url: String,
}

impl IndexEntry {
    /// Creates an entry.
    pub fn new(symbol: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_kind_serde_snake_case() {
        let json = serde_json::to_string(&CandidateKind::Hyperlink).unwrap();
        assert_eq!(json, "\"hyperlink\"");
        let back: CandidateKind = serde_json::from_str("\"constant\"").unwrap();
        assert_eq!(back, CandidateKind::Constant);
    }

    #[test]
    fn test_candidate_kind_display_matches_label() {
        for kind in [
            CandidateKind::Hyperlink,
            CandidateKind::Heading,
            CandidateKind::Constant,
        ] {
            assert_eq!(kind.to_string(), kind.label());
        }
    }

    #[test]
    fn test_index_entry_serializes_as_record() {
        let entry = IndexEntry::new("simFoo", "a\\b.htm");
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"symbol":"simFoo","url":"a\\b.htm"}"#);
    }
}
