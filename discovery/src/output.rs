//! Output formatting for API indexes.
//!
//! The default format is a C array of string pairs terminated by a `0L`
//! sentinel, meant to be `#include`d by the editor plugin:
//!
//! ```text
//! const char *api_index[] = {
//!     "simFoo", "foo.htm#simFoo",
//!     0L
//! };
//! ```
//!
//! JSON and YAML render the same entries as `{symbol, url}` records.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use api_index_core::{CanonicalIndex, IndexEntry, escape_backslashes, unescape_backslashes};

use crate::discover::DiscoverError;

/// Opening line of the C array.
pub const C_ARRAY_DECLARATION: &str = "const char *api_index[] = {";

/// Terminating entry of the C array.
pub const C_ARRAY_SENTINEL: &str = "0L";

const C_ARRAY_INDENT: &str = "    ";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Null-terminated C string array.
    #[default]
    CArray,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Picks the format from an output path's extension.
    ///
    /// `.json` is JSON, `.yaml`/`.yml` is YAML (case-insensitive); anything
    /// else, including no extension, is the C array.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Self::Json,
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::CArray,
        }
    }
}

/// Formats an index in the requested output format.
pub fn format_index(index: &CanonicalIndex, format: OutputFormat) -> Result<String, DiscoverError> {
    match format {
        OutputFormat::CArray => Ok(render_c_array(index)),
        OutputFormat::Json => {
            let mut raw = serde_json::to_string_pretty(&index.to_entries())?;
            raw.push('\n');
            Ok(raw)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&index.to_entries())?),
    }
}

/// Renders the C array. URLs have backslashes doubled; symbols are written
/// verbatim, so a symbol holding a line break or `"` does not produce a
/// well-formed string literal.
pub fn render_c_array(index: &CanonicalIndex) -> String {
    let mut out = String::new();
    out.push_str(C_ARRAY_DECLARATION);
    out.push('\n');
    for (symbol, url) in index.iter() {
        out.push_str(&format!(
            "{C_ARRAY_INDENT}\"{symbol}\", \"{}\",\n",
            escape_backslashes(url)
        ));
    }
    out.push_str(&format!("{C_ARRAY_INDENT}{C_ARRAY_SENTINEL}\n"));
    out.push_str("};\n");
    out
}

/// Reads a C array produced by [`render_c_array`] back into an index.
///
/// Lines other than entries (declaration, braces, blank lines) are ignored.
/// Reading stops at the `0L` sentinel; a missing sentinel is an error, as is
/// any entry line that is not `"<symbol>", "<url>",`.
///
/// Round-trips [`render_c_array`] output for symbols without `\n`, `\r` or
/// `"`. An entry split by a line break inside its symbol is reported as an
/// unterminated string literal on the line where it starts.
///
/// # Examples
///
/// ```
/// use api_index_discovery::output::parse_c_array;
///
/// let text = "const char *api_index[] = {\n    \"simFoo\", \"a\\\\b.htm\",\n    0L\n};\n";
/// let index = parse_c_array(text).unwrap();
/// assert_eq!(index.get("simFoo"), Some(r"a\b.htm"));
/// ```
pub fn parse_c_array(text: &str) -> Result<CanonicalIndex, DiscoverError> {
    let mut entries = Vec::new();

    for (offset, line) in text.lines().enumerate() {
        let line_no = offset + 1;
        let trimmed = line.trim();

        if trimmed.trim_end_matches(',') == C_ARRAY_SENTINEL {
            return Ok(entries.into_iter().collect());
        }
        if trimmed.is_empty() || trimmed.ends_with('{') || trimmed.starts_with('}') {
            continue;
        }
        entries.push(parse_entry_line(trimmed, line_no)?);
    }

    Err(DiscoverError::MalformedIndex {
        line: text.lines().count() + 1,
        detail: format!("missing '{C_ARRAY_SENTINEL}' sentinel"),
    })
}

fn parse_entry_line(line: &str, line_no: usize) -> Result<IndexEntry, DiscoverError> {
    let malformed = |detail: &str| DiscoverError::MalformedIndex {
        line: line_no,
        detail: detail.to_string(),
    };

    if line.starts_with('"') && line.matches('"').count() % 2 == 1 {
        return Err(malformed("unterminated string literal"));
    }
    let body = line
        .strip_suffix(',')
        .ok_or_else(|| malformed("entry must end with ','"))?;
    let inner = body
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| malformed("entry must be two quoted strings"))?;
    let (symbol, url) = inner
        .split_once("\", \"")
        .ok_or_else(|| malformed("expected '\"<symbol>\", \"<url>\"'"))?;

    Ok(IndexEntry::new(symbol, unescape_backslashes(url)))
}

/// Formats `index` and writes it to `path`, replacing any existing file.
///
/// The whole output is rendered before the file is opened, so a formatting
/// failure leaves the destination untouched.
pub fn write_index(
    path: &Path,
    index: &CanonicalIndex,
    format: OutputFormat,
) -> Result<(), DiscoverError> {
    let raw = format_index(index, format)?;
    fs::write(path, raw).map_err(|source| DiscoverError::Write {
        path: path.to_path_buf(),
        source,
    })
}
