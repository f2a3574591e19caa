//! # Recommendation Engine
//!
//! Coordinates the recommendation pipeline:
//! 1. Resolve the query title to its ordinal id
//! 2. Rank every other catalog item by similarity
//! 3. Walk the ranked candidates, enriching each via the metadata resolver
//! 4. Accept enriched candidates, skip fallbacks, stop at five
//! 5. Pad to exactly five with the placeholder record

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument};

use catalog::{CatalogIndex, OrdinalId, SimilarityMatrix};
use tmdb_client::{
    MetadataResolver, MovieDetails, Resolution, FALLBACK_OVERVIEW, PLACEHOLDER_POSTER_URL,
};

/// Number of recommendations returned per request
pub const RESULT_COUNT: usize = 5;

/// Final enriched recommendation returned to the caller.
///
/// Every field is always populated; `rating: None` renders as `N/A`.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub poster_url: String,
    pub genres: String,
    pub rating: Option<f64>,
    pub overview: String,
}

impl Recommendation {
    /// Fixed sentinel record used to pad short result lists
    pub fn placeholder() -> Self {
        Self {
            title: "No Title Found".to_string(),
            poster_url: PLACEHOLDER_POSTER_URL.to_string(),
            genres: "N/A".to_string(),
            rating: None,
            overview: FALLBACK_OVERVIEW.to_string(),
        }
    }

    fn from_details(title: &str, details: MovieDetails) -> Self {
        Self {
            title: title.to_string(),
            poster_url: details.poster_url,
            genres: details.genres,
            rating: details.rating,
            overview: details.overview,
        }
    }
}

/// An item under consideration, prior to enrichment. Transient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub ordinal_id: OrdinalId,
    pub score: f32,
}

#[derive(Debug, Error)]
pub enum RecommendError {
    /// Query title absent from the catalog. Propagated, never substituted.
    #[error("Title not found in catalog: {0}")]
    TitleNotFound(String),
}

/// Rank all candidates for `ordinal_id`: similarity score descending, ties
/// broken by ascending ordinal id so repeated requests see the same order.
/// The query item itself is excluded up front rather than trusting it to
/// sort first.
pub fn rank_candidates(similarity: &SimilarityMatrix, ordinal_id: OrdinalId) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = similarity
        .scores_for(ordinal_id)
        .into_iter()
        .map(|(ordinal_id, score)| Candidate { ordinal_id, score })
        .collect();

    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.ordinal_id.cmp(&b.ordinal_id))
    });

    candidates
}

/// Drives catalog lookup, ranking and metadata enrichment.
///
/// Holds only shared read-only data and a stateless resolver, so one
/// recommender can serve any number of requests. Generic over the resolver
/// so tests can substitute a scripted fake.
pub struct Recommender<R> {
    catalog: Arc<CatalogIndex>,
    similarity: Arc<SimilarityMatrix>,
    resolver: R,
}

impl<R: MetadataResolver> Recommender<R> {
    pub fn new(
        catalog: Arc<CatalogIndex>,
        similarity: Arc<SimilarityMatrix>,
        resolver: R,
    ) -> Self {
        Self {
            catalog,
            similarity,
            resolver,
        }
    }

    /// Main entry point: exactly [`RESULT_COUNT`] enriched recommendations
    /// for a known title.
    ///
    /// Candidates whose metadata lookup degrades are skipped without
    /// consuming a slot; the next-ranked candidate backfills. Accepted
    /// results keep rank order, placeholders are appended last.
    #[instrument(skip(self))]
    pub async fn recommend(&self, title: &str) -> Result<Vec<Recommendation>, RecommendError> {
        let record = self
            .catalog
            .lookup_by_title(title)
            .map_err(|_| RecommendError::TitleNotFound(title.to_string()))?;

        let candidates = rank_candidates(&self.similarity, record.ordinal_id);
        debug!(
            query_id = record.ordinal_id,
            candidates = candidates.len(),
            "Ranked candidates"
        );

        let mut results = Vec::with_capacity(RESULT_COUNT);
        for candidate in candidates {
            if results.len() == RESULT_COUNT {
                break;
            }
            let Some(movie) = self.catalog.get(candidate.ordinal_id) else {
                continue;
            };
            match self.resolver.resolve(movie.tmdb_id).await {
                Resolution::Enriched(details) => {
                    results.push(Recommendation::from_details(&movie.title, details));
                }
                Resolution::Fallback { reason, .. } => {
                    debug!(
                        candidate = %movie.title,
                        score = candidate.score,
                        %reason,
                        "Skipping candidate without usable metadata"
                    );
                }
            }
        }

        let accepted = results.len();
        while results.len() < RESULT_COUNT {
            results.push(Recommendation::placeholder());
        }

        info!(query = title, accepted, "Recommendation request complete");
        Ok(results)
    }

    /// The full set of known titles, for populating a title-selection control
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.catalog.titles()
    }
}
