//! # Catalog Crate
//!
//! Immutable, read-only views over the precomputed recommendation artifacts.
//!
//! ## Main Components
//!
//! - **types**: `MovieRecord` and the title-keyed `CatalogIndex`
//! - **similarity**: the validated square `SimilarityMatrix`
//! - **loader**: parallel artifact loading with fail-fast validation
//! - **error**: `CatalogError`
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Artifacts;
//! use std::path::Path;
//!
//! let artifacts = Artifacts::load(Path::new("artifacts"))?;
//! let record = artifacts.catalog.lookup_by_title("Inception")?;
//! let scores = artifacts.similarity.scores_for(record.ordinal_id);
//! ```
//!
//! Both structures are read-only after load and safe to share behind `Arc`
//! across any number of concurrent requests.

// Public modules
pub mod error;
pub mod loader;
pub mod similarity;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use loader::Artifacts;
pub use similarity::SimilarityMatrix;
pub use types::{CatalogIndex, CatalogRow, MovieRecord, OrdinalId, TmdbId};
