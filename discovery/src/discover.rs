//! Help file discovery and the index build workflow.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use api_index_core::ApiIndex;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use crate::extractor::HelpExtractor;
use crate::report::{BuildReport, SkippedFile};

/// Typed error for help file discovery and index output.
#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Input root is missing or not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A configured selector (e.g. the constants table class) is invalid.
    #[error("invalid selector {0}")]
    InvalidSelector(String),

    /// Output file could not be written.
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An index file could not be read back.
    #[error("malformed index at line {line}: {detail}")]
    MalformedIndex { line: usize, detail: String },
}

/// Extension of help pages in the documentation tree.
pub const DEFAULT_EXTENSION: &str = "htm";

/// Class attribute value marking a table of named constants.
pub const DEFAULT_CONSTANTS_TABLE_CLASS: &str = "apiConstantsTable";

/// Help file discovery and extraction configuration.
#[derive(Debug, Clone)]
pub struct DiscoverConfig {
    /// Root of the help file tree; all URLs are relative to it.
    pub root: PathBuf,
    /// File extension to collect, without the dot. Matched case-sensitively.
    pub extension: String,
    /// Class that marks constants tables.
    pub constants_table_class: String,
}

impl DiscoverConfig {
    /// Creates a config for `root` with the default extension and class.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            constants_table_class: DEFAULT_CONSTANTS_TABLE_CLASS.to_string(),
        }
    }
}

/// One discovered help page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpFile {
    /// Path on disk.
    pub path: PathBuf,
    /// Path relative to the root, `/`-separated. Base of fragment URLs.
    pub rel_file: String,
    /// Containing directory relative to the root, `/`-separated; `.` for the
    /// root itself. Base of relative hyperlinks.
    pub rel_dir: String,
}

impl HelpFile {
    /// Derives the root-relative names of `path`.
    ///
    /// Returns `None` when `path` is not under `root`.
    pub fn new(root: &Path, path: &Path) -> Option<Self> {
        let relative = path.strip_prefix(root).ok()?;
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let (file_name, dirs) = parts.split_last()?;
        let rel_dir = if dirs.is_empty() {
            ".".to_string()
        } else {
            dirs.join("/")
        };
        let rel_file = if dirs.is_empty() {
            file_name.clone()
        } else {
            format!("{rel_dir}/{file_name}")
        };

        Some(Self {
            path: path.to_path_buf(),
            rel_file,
            rel_dir,
        })
    }

    /// Resolves a link target found in this page to a root-relative URL.
    ///
    /// `#frag` becomes `<rel_file>#frag`; anything else is joined onto
    /// [`rel_dir`](Self::rel_dir) and normalized with [`normalize_path`].
    /// Empty targets resolve to nothing.
    pub fn resolve_href(&self, href: &str) -> Option<String> {
        if href.is_empty() {
            return None;
        }
        if href.starts_with('#') {
            return Some(format!("{}{href}", self.rel_file));
        }
        if href.starts_with('/') {
            return Some(normalize_path(href));
        }
        Some(normalize_path(&format!("{}/{href}", self.rel_dir)))
    }

    /// URL of a named anchor in this page.
    pub fn anchor_url(&self, name: &str) -> String {
        format!("{}#{name}", self.rel_file)
    }
}

/// Lexically normalizes a `/`-separated path.
///
/// Collapses empty and `.` segments, resolves `..` against the preceding
/// segment, keeps leading `..` that climb out of a relative path, and returns
/// `.` for an empty result. No filesystem access.
pub fn normalize_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if parts.last().is_some_and(|last| *last != "..") {
                    parts.pop();
                } else if !rooted {
                    parts.push("..");
                }
            }
            other => parts.push(other),
        }
    }

    let joined = parts.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Collects help files under the configured root, in file-name order.
///
/// Fails with [`DiscoverError::NotADirectory`] before touching anything else
/// when the root is missing or is a file. Unreadable directory entries are
/// logged and skipped.
pub fn collect_help_files(config: &DiscoverConfig) -> Result<Vec<HelpFile>, DiscoverError> {
    if !config.root.is_dir() {
        return Err(DiscoverError::NotADirectory(config.root.clone()));
    }

    let extension = OsStr::new(&config.extension);
    let mut files = Vec::new();

    for entry in WalkDir::new(&config.root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(error = %err, "Skipping unreadable directory entry");
                continue;
            }
        };
        if !entry.file_type().is_file() || entry.path().extension() != Some(extension) {
            continue;
        }
        if let Some(file) = HelpFile::new(&config.root, entry.path()) {
            files.push(file);
        }
    }

    debug!(root = %config.root.display(), count = files.len(), "Collected help files");
    Ok(files)
}

/// Index plus bookkeeping from one build run.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// Aggregated symbol to candidate-URL index.
    pub index: ApiIndex,
    /// Counts and skipped files.
    pub report: BuildReport,
}

/// Discovers help files and aggregates their symbols into an [`ApiIndex`].
///
/// `on_file` is called once per file, before it is read. A file that cannot
/// be read is recorded in [`BuildReport::skipped`] and the run continues;
/// malformed markup is parsed best-effort and never fails the run.
pub fn build_index<F>(config: &DiscoverConfig, mut on_file: F) -> Result<BuildOutcome, DiscoverError>
where
    F: FnMut(&HelpFile),
{
    let files = collect_help_files(config)?;
    let extractor = HelpExtractor::new(&config.constants_table_class)?;

    let mut index = ApiIndex::new();
    let mut report = BuildReport::default();

    for file in &files {
        on_file(file);

        let raw = match fs::read(&file.path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(file = %file.rel_file, error = %err, "Skipping unreadable help file");
                report.skipped.push(SkippedFile {
                    path: file.rel_file.clone(),
                    error: err.to_string(),
                });
                continue;
            }
        };
        let html = String::from_utf8_lossy(&raw);

        for candidate in extractor.extract(&html, file) {
            report.candidates.record(candidate.kind);
            if let Err(reason) = index.add_candidate(&candidate) {
                trace!(
                    file = %file.rel_file,
                    symbol = %candidate.symbol,
                    kind = %candidate.kind,
                    %reason,
                    "Rejected candidate"
                );
                report.rejected += 1;
            }
        }
        report.files_parsed += 1;
    }

    report.symbols = index.len();
    debug!(
        files = report.files_parsed,
        skipped = report.skipped.len(),
        symbols = report.symbols,
        urls = index.url_count(),
        "Built API index"
    );

    Ok(BuildOutcome { index, report })
}
