//! Structured reporting for index build runs.

use api_index_core::CandidateKind;
use serde::{Deserialize, Serialize};

/// A help file that could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    /// Root-relative path.
    pub path: String,
    /// Human-readable I/O error.
    pub error: String,
}

/// Candidates seen per markup construct, before filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateCounts {
    pub hyperlinks: usize,
    pub headings: usize,
    pub constants: usize,
}

impl CandidateCounts {
    /// Counts one candidate of `kind`.
    pub fn record(&mut self, kind: CandidateKind) {
        match kind {
            CandidateKind::Hyperlink => self.hyperlinks += 1,
            CandidateKind::Heading => self.headings += 1,
            CandidateKind::Constant => self.constants += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.hyperlinks + self.headings + self.constants
    }
}

/// Summary of one index build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Files read and parsed.
    pub files_parsed: usize,
    /// Files that could not be read.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<SkippedFile>,
    pub candidates: CandidateCounts,
    /// Candidates refused by the symbol filter.
    pub rejected: usize,
    /// Distinct accepted symbols.
    pub symbols: usize,
}

impl BuildReport {
    /// Candidates that passed the symbol filter, duplicates included.
    pub fn accepted(&self) -> usize {
        self.candidates.total().saturating_sub(self.rejected)
    }
}
