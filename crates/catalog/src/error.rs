//! Error types for the catalog crate.

use thiserror::Error;

/// Errors raised while loading or querying the precomputed artifacts.
///
/// Load-time variants are fatal: the caller must abort startup rather than
/// run against a partially-loaded catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Artifact file could not be read
    #[error("Failed to read artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Artifact file exists but is not valid JSON of the expected shape
    #[error("Malformed artifact {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Similarity matrix row count disagrees with the movie list
    #[error("Similarity matrix has {rows} rows but the catalog has {movies} movies")]
    DimensionMismatch { movies: usize, rows: usize },

    /// A similarity row is not fully populated
    #[error("Similarity row {row} has {found} entries, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Exact title lookup found nothing
    #[error("Title not found in catalog: {0}")]
    TitleNotFound(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
