//! HTTP client for the TMDB movie details endpoint.
//!
//! One GET per lookup, bounded by the configured timeout, no retry. Every
//! failure mode degrades to [`Resolution::Fallback`]; nothing propagates.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::config::TmdbConfig;
use crate::resolution::{
    FetchFailure, MovieDetails, Resolution, ELLIPSIS, MISSING_OVERVIEW, OVERVIEW_CHAR_BUDGET,
    PLACEHOLDER_POSTER_URL, UNKNOWN_GENRE,
};

/// External catalog key understood by TMDB
pub type TmdbId = u32;

/// Resolves an external catalog key to enriched movie metadata.
///
/// Implementations hold no per-call state, so one resolver can serve any
/// number of lookups. The engine is generic over this trait so tests can
/// substitute a scripted fake.
#[async_trait]
pub trait MetadataResolver: Send + Sync {
    async fn resolve(&self, tmdb_id: TmdbId) -> Resolution;
}

/// Movie details response body, optional everywhere we only degrade on absence
#[derive(Debug, Deserialize)]
struct TmdbMovie {
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    genres: Vec<TmdbGenre>,
    #[serde(default)]
    vote_average: Option<f64>,
    #[serde(default)]
    overview: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbGenre {
    name: String,
}

/// Stateless TMDB client.
#[derive(Clone)]
pub struct TmdbClient {
    http_client: reqwest::Client,
    config: TmdbConfig,
}

impl TmdbClient {
    /// Build a client with the per-call timeout baked into the HTTP client.
    pub fn new(config: TmdbConfig) -> reqwest::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http_client,
            config,
        })
    }

    async fn fetch(&self, tmdb_id: TmdbId) -> Result<TmdbMovie, FetchFailure> {
        let url = format!("{}/{}", self.config.api_base.trim_end_matches('/'), tmdb_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("language", "en-US"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchFailure::Status(response.status().as_u16()));
        }

        response
            .json::<TmdbMovie>()
            .await
            .map_err(|e| FetchFailure::Decode(e.to_string()))
    }
}

#[async_trait]
impl MetadataResolver for TmdbClient {
    #[instrument(skip(self))]
    async fn resolve(&self, tmdb_id: TmdbId) -> Resolution {
        match self.fetch(tmdb_id).await {
            Ok(movie) => {
                let resolution = map_response(movie, &self.config.image_base);
                if let Resolution::Fallback { reason, .. } = &resolution {
                    debug!(tmdb_id, %reason, "TMDB response not usable for acceptance");
                }
                resolution
            }
            Err(reason) => {
                warn!(tmdb_id, error = %reason, "TMDB lookup failed, using fallback");
                Resolution::Fallback {
                    details: MovieDetails::fallback(),
                    reason,
                }
            }
        }
    }
}

/// Map a decoded response body to a resolution.
///
/// Genre, rating and overview are filled from the response even when the
/// poster is missing; only the poster decides enriched vs fallback.
fn map_response(movie: TmdbMovie, image_base: &str) -> Resolution {
    let genres = if movie.genres.is_empty() {
        UNKNOWN_GENRE.to_string()
    } else {
        movie
            .genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let overview = movie
        .overview
        .as_deref()
        .map(truncate_overview)
        .unwrap_or_else(|| MISSING_OVERVIEW.to_string());

    match movie.poster_path {
        Some(path) => Resolution::Enriched(MovieDetails {
            poster_url: format!(
                "{}/{}",
                image_base.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            genres,
            rating: movie.vote_average,
            overview,
        }),
        None => Resolution::Fallback {
            details: MovieDetails {
                poster_url: PLACEHOLDER_POSTER_URL.to_string(),
                genres,
                rating: movie.vote_average,
                overview,
            },
            reason: FetchFailure::MissingPoster,
        },
    }
}

/// Truncate to the character budget, appending the ellipsis marker only when
/// something was actually cut.
fn truncate_overview(overview: &str) -> String {
    let mut chars = overview.char_indices();
    match chars.nth(OVERVIEW_CHAR_BUDGET) {
        Some((byte_index, _)) => format!("{}{}", &overview[..byte_index], ELLIPSIS),
        None => overview.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

    fn movie_json(body: &str) -> TmdbMovie {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_map_full_response() {
        let movie = movie_json(
            r#"{
                "poster_path": "/abc.jpg",
                "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
                "vote_average": 8.2,
                "overview": "A thief who steals corporate secrets."
            }"#,
        );

        let resolution = map_response(movie, IMAGE_BASE);
        assert!(resolution.is_enriched());

        let details = resolution.into_details();
        assert_eq!(
            details.poster_url,
            "https://image.tmdb.org/t/p/w500/abc.jpg"
        );
        assert_eq!(details.genres, "Action, Science Fiction");
        assert_eq!(details.rating, Some(8.2));
        assert_eq!(details.overview, "A thief who steals corporate secrets.");
    }

    #[test]
    fn test_map_missing_poster_keeps_real_fields() {
        let movie = movie_json(
            r#"{
                "genres": [{"id": 18, "name": "Drama"}],
                "vote_average": 6.5,
                "overview": "Posterless but otherwise complete."
            }"#,
        );

        let resolution = map_response(movie, IMAGE_BASE);
        assert!(!resolution.is_enriched());

        match resolution {
            Resolution::Fallback { details, reason } => {
                assert!(matches!(reason, FetchFailure::MissingPoster));
                assert_eq!(details.poster_url, PLACEHOLDER_POSTER_URL);
                assert_eq!(details.genres, "Drama");
                assert_eq!(details.rating, Some(6.5));
                assert_eq!(details.overview, "Posterless but otherwise complete.");
            }
            Resolution::Enriched(_) => panic!("expected fallback"),
        }
    }

    #[test]
    fn test_map_empty_genres_and_absent_fields() {
        let movie = movie_json(r#"{"poster_path": "/p.jpg"}"#);

        let details = map_response(movie, IMAGE_BASE).into_details();
        assert_eq!(details.genres, UNKNOWN_GENRE);
        assert_eq!(details.rating, None);
        assert_eq!(details.overview, MISSING_OVERVIEW);
    }

    #[test]
    fn test_absent_overview_distinct_from_failure_sentence() {
        // Successful response without an overview says "No overview
        // available.", only a failed lookup says "No details available."
        let movie = movie_json(r#"{"poster_path": "/p.jpg"}"#);
        let details = map_response(movie, IMAGE_BASE).into_details();

        assert_eq!(details.overview, "No overview available.");
        assert_eq!(MovieDetails::fallback().overview, "No details available.");
        assert_ne!(details.overview, MovieDetails::fallback().overview);
    }

    #[test]
    fn test_truncates_long_overview() {
        let long = "x".repeat(450);
        let truncated = truncate_overview(&long);

        assert_eq!(truncated.chars().count(), OVERVIEW_CHAR_BUDGET + ELLIPSIS.len());
        assert!(truncated.ends_with(ELLIPSIS));
        assert!(truncated.starts_with(&"x".repeat(OVERVIEW_CHAR_BUDGET)));
    }

    #[test]
    fn test_exactly_300_chars_passes_through() {
        let exact = "y".repeat(OVERVIEW_CHAR_BUDGET);
        assert_eq!(truncate_overview(&exact), exact);
    }

    #[test]
    fn test_short_overview_unmodified() {
        assert_eq!(truncate_overview("short"), "short");
    }

    #[test]
    fn test_truncation_respects_multibyte_chars() {
        let long = "é".repeat(350);
        let truncated = truncate_overview(&long);

        assert_eq!(truncated.chars().count(), OVERVIEW_CHAR_BUDGET + ELLIPSIS.len());
        assert!(truncated.ends_with(ELLIPSIS));
    }
}
