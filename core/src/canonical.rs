use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::IndexEntry;

/// Final symbol to URL table, one canonical URL per symbol.
///
/// This is what gets serialized, and what a consumer loads back to answer
/// "where is this symbol documented?".
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use api_index_core::*;
///
/// let index: CanonicalIndex = [("simFoo", "en/foo.htm#simFoo")].into_iter().collect();
/// assert_eq!(index.get("simFoo"), Some("en/foo.htm#simFoo"));
/// assert_eq!(
///     index.reference_path(Path::new("/opt/app/helpFiles"), "simFoo"),
///     Some(Path::new("/opt/app/helpFiles/en/foo.htm#simFoo").to_path_buf()),
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalIndex {
    entries: BTreeMap<String, String>,
}

impl CanonicalIndex {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the URL for `symbol`, returning the previous one.
    pub fn insert(&mut self, symbol: impl Into<String>, url: impl Into<String>) -> Option<String> {
        self.entries.insert(symbol.into(), url.into())
    }

    /// Returns the canonical URL of `symbol`.
    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.entries.get(symbol).map(String::as_str)
    }

    /// Resolves `symbol` to a location under the help directory.
    ///
    /// The fragment, if any, is kept in the returned path so it can be handed
    /// to a browser as-is.
    pub fn reference_path(&self, help_root: &Path, symbol: &str) -> Option<PathBuf> {
        self.get(symbol).map(|url| help_root.join(url))
    }

    /// Iterates `(symbol, url)` in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns owned entries in ascending symbol order.
    pub fn to_entries(&self) -> Vec<IndexEntry> {
        self.iter().map(|(s, u)| IndexEntry::new(s, u)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>, U: Into<String>> FromIterator<(S, U)> for CanonicalIndex {
    fn from_iter<T: IntoIterator<Item = (S, U)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(s, u)| (s.into(), u.into()))
                .collect(),
        }
    }
}

impl FromIterator<IndexEntry> for CanonicalIndex {
    fn from_iter<T: IntoIterator<Item = IndexEntry>>(iter: T) -> Self {
        iter.into_iter().map(|e| (e.symbol, e.url)).collect()
    }
}
