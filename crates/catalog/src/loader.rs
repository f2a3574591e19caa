//! Loading the precomputed artifacts from disk.
//!
//! Two files are expected in the artifact directory:
//! - `movies.json`: ordered array of `{ "title": ..., "tmdb_id": ... }` rows
//! - `similarity.json`: square matrix of similarity scores, row order
//!   consistent with `movies.json`
//!
//! Any inconsistency between the two is fatal at load time.

use crate::error::{CatalogError, Result};
use crate::similarity::SimilarityMatrix;
use crate::types::{CatalogIndex, CatalogRow};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

/// The loaded, validated pair of precomputed artifacts.
#[derive(Debug)]
pub struct Artifacts {
    pub catalog: CatalogIndex,
    pub similarity: SimilarityMatrix,
}

impl Artifacts {
    /// Load and validate both artifacts from `data_dir`.
    ///
    /// The two files are read in parallel; validation ties the matrix
    /// dimensions to the movie list before anything is returned.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let movies_path = data_dir.join("movies.json");
        let similarity_path = data_dir.join("similarity.json");

        let (rows, matrix) = rayon::join(
            || read_json::<Vec<CatalogRow>>(&movies_path),
            || read_json::<Vec<Vec<f32>>>(&similarity_path),
        );
        let rows = rows?;
        let matrix = matrix?;

        let catalog = CatalogIndex::from_rows(rows);
        let similarity = SimilarityMatrix::new(matrix, catalog.len())?;

        info!(
            movies = catalog.len(),
            "Loaded catalog artifacts from {:?}", data_dir
        );

        Ok(Self {
            catalog,
            similarity,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = std::fs::read(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| CatalogError::Malformed {
        path: path.display().to_string(),
        source,
    })
}
