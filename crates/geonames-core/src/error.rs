// crates/geonames-core/src/error.rs
use crate::source::DatasetKind;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a run.
///
/// None of these are retried or downgraded: the first error ends the run,
/// and whatever was written before it stays on disk.
#[derive(Debug, Error)]
pub enum GeoNamesError {
    /// The source URL could not be retrieved (transport failure or non-success status).
    #[error("Failed to download {url}. Reason: \"{reason}\".")]
    Retrieval { url: String, reason: String },

    /// The payload was flagged as ZIP but is not a readable archive, or holds no entries.
    #[error("Invalid archive: {0}")]
    Archive(String),

    #[error("Invalid UTF-8 in {kind} data: {source}")]
    Decoding {
        kind: DatasetKind,
        #[source]
        source: std::str::Utf8Error,
    },

    /// A record is too short or carries a field that does not parse.
    ///
    /// `line` is the 1-based line number in the source text.
    #[error("Malformed {kind} record on line {line}: {reason}")]
    MalformedRecord {
        kind: DatasetKind,
        line: usize,
        reason: String,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeoNamesError>;
