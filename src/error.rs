use std::path::PathBuf;
use thiserror::Error;

/// Fatal, run-aborting failures.
///
/// Per-entry conditions (malformed filenames, missing or exhausted
/// candidates) are not errors; they are counted and reported by the
/// matching pipeline while the run continues.
#[derive(Debug, Error)]
pub enum MatchupError {
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to scan image directory {dir}: {source}")]
    Scan { dir: PathBuf, source: walkdir::Error },

    #[error("catalog error: {0}")]
    Catalog(#[from] rusqlite::Error),

    /// A write failed partway through. Rows updated before this point stay
    /// committed; the id identifies where to resume.
    #[error("failed to persist image path for label {id}: {source}")]
    Persist { id: i64, source: rusqlite::Error },
}
