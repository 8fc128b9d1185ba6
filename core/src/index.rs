//! Symbol to candidate-URL aggregation.
//!
//! The same symbol is usually documented in several places: its own page, an
//! overview list, a cross-reference in another function's notes. [`ApiIndex`]
//! collects every accepted location across a run with set semantics, and
//! [`ApiIndex::select`] later reduces each set to one canonical URL.
//!
//! # Example
//!
//! ```
//! use api_index_core::*;
//!
//! let mut index = ApiIndex::new();
//! assert_eq!(index.insert("simFoo", "foo.htm#simFoo"), Ok(true));
//! assert_eq!(index.insert("simFoo", "foo.htm#simFoo"), Ok(false));
//! assert_eq!(index.insert("simxFoo", "foo.htm"), Err(SymbolError::ReservedPrefix));
//! assert_eq!(index.len(), 1);
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::{Candidate, CanonicalIndex, SymbolError, select_canonical_url, validate_symbol};

/// Accumulated mapping from valid symbols to their candidate URLs.
///
/// Every key satisfies [`validate_symbol`]; invalid symbols are refused at
/// insertion. Iteration is in ascending symbol order regardless of insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiIndex {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl ApiIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `url` as a location of `symbol`.
    ///
    /// Returns `Ok(true)` if the pair is new, `Ok(false)` if it was already
    /// present, and the validation error if the symbol is rejected.
    pub fn insert(
        &mut self,
        symbol: impl Into<String>,
        url: impl Into<String>,
    ) -> Result<bool, SymbolError> {
        let symbol = symbol.into();
        validate_symbol(&symbol)?;
        Ok(self.entries.entry(symbol).or_default().insert(url.into()))
    }

    /// Records an extracted candidate. See [`insert`](Self::insert).
    pub fn add_candidate(&mut self, candidate: &Candidate) -> Result<bool, SymbolError> {
        self.insert(candidate.symbol.as_str(), candidate.url.as_str())
    }

    /// Returns the candidate URLs recorded for `symbol`.
    pub fn urls(&self, symbol: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(symbol)
    }

    /// Returns `true` if `symbol` has at least one recorded URL.
    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Iterates `(symbol, candidate urls)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no symbol has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of distinct `(symbol, url)` pairs.
    pub fn url_count(&self) -> usize {
        self.entries.values().map(BTreeSet::len).sum()
    }

    /// Reduces every symbol to its canonical URL.
    ///
    /// See [`select_canonical_url`] for the ranking.
    pub fn select(&self) -> CanonicalIndex {
        self.iter()
            .filter_map(|(symbol, urls)| {
                select_canonical_url(urls.iter().map(String::as_str)).map(|url| (symbol, url))
            })
            .collect()
    }
}
