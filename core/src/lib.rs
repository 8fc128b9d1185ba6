//! Core index types and shared primitives for documentation API indexes.
//!
//! This crate defines the data model used to map API symbol names to the
//! help pages that document them:
//!
//! - [`validate_symbol`] / [`is_valid_symbol`]: the symbol acceptance rules
//!   (a `sim` prefix, no `simx` prefix, no spaces).
//! - [`ApiIndex`]: symbol to candidate-URL sets, accumulated across a run.
//! - [`select_canonical_url`]: picks one URL per symbol (page URLs before
//!   fragment URLs, then lexicographic order).
//! - [`CanonicalIndex`]: the selected symbol to URL table, ready for
//!   serialization or reference lookup.
//!
//! # Example
//!
//! ```
//! use api_index_core::*;
//!
//! let mut index = ApiIndex::new();
//! index.insert("simGetObject", "objects.htm#simGetObject")?;
//! index.insert("simGetObject", "simGetObject.htm")?;
//! assert!(index.insert("simxStart", "remote.htm").is_err());
//!
//! let canonical = index.select();
//! assert_eq!(canonical.get("simGetObject"), Some("simGetObject.htm"));
//! assert_eq!(canonical.get("simxStart"), None);
//! # Ok::<(), SymbolError>(())
//! ```

mod canonical;
mod index;
mod types;
mod url;
mod validate;

pub use canonical::CanonicalIndex;
pub use index::ApiIndex;
pub use types::*;
pub use url::{escape_backslashes, score_url, select_canonical_url, unescape_backslashes};
pub use validate::{RESERVED_PREFIX, SYMBOL_PREFIX, SymbolError, is_valid_symbol, validate_symbol};
