//! Core domain types for the movie catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::error::{CatalogError, Result};

/// Dense 0-based index of a movie within the loaded catalog.
///
/// Distinct from [`TmdbId`]: ordinal ids index the similarity matrix, TMDB ids
/// key the external metadata service.
pub type OrdinalId = usize;

/// External catalog key used to query TMDB
pub type TmdbId = u32;

/// One row of the precomputed movie artifact, in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogRow {
    pub title: String,
    pub tmdb_id: TmdbId,
}

/// A movie as known to the loaded catalog. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub ordinal_id: OrdinalId,
    pub tmdb_id: TmdbId,
    pub title: String,
}

/// Immutable lookup from titles to movie records.
///
/// Ordinal ids are assigned from the row order of the artifact, so they stay
/// consistent with the similarity matrix built from the same rows. Titles are
/// not guaranteed unique in the underlying data; lookup keeps first-match
/// semantics on duplicates.
#[derive(Debug)]
pub struct CatalogIndex {
    records: Vec<MovieRecord>,
    by_title: HashMap<String, OrdinalId>,
}

impl CatalogIndex {
    /// Build the index from artifact rows, assigning ordinal ids by position.
    pub fn from_rows(rows: Vec<CatalogRow>) -> Self {
        let mut records = Vec::with_capacity(rows.len());
        let mut by_title = HashMap::with_capacity(rows.len());

        for (ordinal_id, row) in rows.into_iter().enumerate() {
            if by_title.contains_key(&row.title) {
                warn!(title = %row.title, ordinal_id, "duplicate title, keeping first match");
            } else {
                by_title.insert(row.title.clone(), ordinal_id);
            }
            records.push(MovieRecord {
                ordinal_id,
                tmdb_id: row.tmdb_id,
                title: row.title,
            });
        }

        Self { records, by_title }
    }

    /// Exact, case-sensitive title lookup.
    ///
    /// Returns the first matching record when the data holds duplicate titles.
    pub fn lookup_by_title(&self, title: &str) -> Result<&MovieRecord> {
        self.by_title
            .get(title)
            .map(|&id| &self.records[id])
            .ok_or_else(|| CatalogError::TitleNotFound(title.to_string()))
    }

    /// Get a record by ordinal id
    pub fn get(&self, id: OrdinalId) -> Option<&MovieRecord> {
        self.records.get(id)
    }

    /// All titles in catalog order, for populating a title-selection surface.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.title.as_str())
    }

    /// All records in catalog order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
