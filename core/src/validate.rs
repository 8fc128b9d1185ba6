//! Symbol validation.
//!
//! The documented API exposes its public symbols under a shared `sim` prefix.
//! Names in the `simx` sub-namespace belong to a separate remote API and are
//! excluded, as is any text containing a space (prose, headings like
//! "sim Constants").
//!
//! # Examples
//!
//! ```
//! use api_index_core::*;
//!
//! assert!(validate_symbol("simGetObjectHandle").is_ok());
//! assert_eq!(validate_symbol("simxStart"), Err(SymbolError::ReservedPrefix));
//! assert_eq!(validate_symbol("sim Space"), Err(SymbolError::ContainsSpace));
//! assert_eq!(validate_symbol("getObject"), Err(SymbolError::MissingPrefix));
//! ```

use thiserror::Error;

/// Prefix shared by every indexed symbol.
pub const SYMBOL_PREFIX: &str = "sim";

/// Prefix of the excluded sub-namespace.
pub const RESERVED_PREFIX: &str = "simx";

/// Reasons a candidate symbol is rejected.
///
/// Rules are checked in declaration order; the first failing rule is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// Symbol text contains a space character.
    #[error("symbol contains a space")]
    ContainsSpace,
    /// Symbol starts with the reserved `simx` prefix.
    #[error("symbol uses the reserved 'simx' prefix")]
    ReservedPrefix,
    /// Symbol does not start with `sim`.
    #[error("symbol does not start with 'sim'")]
    MissingPrefix,
}

/// Validates a candidate symbol against the acceptance rules.
///
/// Only the space character is checked; tabs and newlines are not treated as
/// separators. Comparison is case-sensitive and runs on the raw text.
pub fn validate_symbol(symbol: &str) -> Result<(), SymbolError> {
    if symbol.contains(' ') {
        return Err(SymbolError::ContainsSpace);
    }
    if symbol.starts_with(RESERVED_PREFIX) {
        return Err(SymbolError::ReservedPrefix);
    }
    if !symbol.starts_with(SYMBOL_PREFIX) {
        return Err(SymbolError::MissingPrefix);
    }
    Ok(())
}

/// Returns `true` when [`validate_symbol`] accepts `symbol`.
pub fn is_valid_symbol(symbol: &str) -> bool {
    validate_symbol(symbol).is_ok()
}
