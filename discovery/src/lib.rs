//! Offline API index generation from HTML help files.
//!
//! This crate scans a directory tree of `.htm` help pages, extracts the API
//! symbols they document, and serializes a symbol to URL table for an
//! editor's autocomplete and context help.
//!
//! # Main entry points
//!
//! - [`discover::build_index`]: walk a help tree and aggregate every accepted
//!   symbol with all of its candidate URLs.
//! - [`generate_index`]: same, then reduce each symbol to its canonical URL.
//! - [`output::write_index`]: serialize a canonical index as a C array, JSON
//!   or YAML.
//! - [`output::parse_c_array`]: load a previously generated C array.
//!
//! # Example
//!
//! ```
//! use api_index_discovery::discover::DiscoverConfig;
//! use api_index_discovery::generate_index;
//! use api_index_discovery::output::render_c_array;
//!
//! let dir = tempfile::tempdir().unwrap();
//! std::fs::write(
//!     dir.path().join("w.htm"),
//!     r#"<h3><a name="simWidget"></a>simWidget</h3>"#,
//! )
//! .unwrap();
//!
//! let (index, report) = generate_index(&DiscoverConfig::new(dir.path()), |_| {}).unwrap();
//! assert_eq!(report.files_parsed, 1);
//! assert_eq!(index.get("simWidget"), Some("w.htm#simWidget"));
//! assert!(render_c_array(&index).contains("\"simWidget\", \"w.htm#simWidget\","));
//! ```

pub mod discover;
pub mod extractor;
pub mod output;
pub mod report;

use api_index_core::CanonicalIndex;
use discover::{DiscoverConfig, DiscoverError, HelpFile, build_index};
use report::BuildReport;

/// Builds the index for `config` and selects one canonical URL per symbol.
///
/// `on_file` is invoked for each help file before it is parsed, which is
/// where callers print progress.
pub fn generate_index<F>(
    config: &DiscoverConfig,
    on_file: F,
) -> Result<(CanonicalIndex, BuildReport), DiscoverError>
where
    F: FnMut(&HelpFile),
{
    let outcome = build_index(config, on_file)?;
    Ok((outcome.index.select(), outcome.report))
}
