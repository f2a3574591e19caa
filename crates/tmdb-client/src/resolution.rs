//! Resolver outcome types and the fixed fallback values.

use thiserror::Error;

/// Poster URL used whenever no real poster is available
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";

/// Genre string when the response carried an empty genre list
pub const UNKNOWN_GENRE: &str = "Unknown Genre";

/// Genre string in the full-fallback tuple
pub const FALLBACK_GENRES: &str = "Unknown";

/// Overview used when a successful response carried none
pub const MISSING_OVERVIEW: &str = "No overview available.";

/// Overview in the full-fallback tuple and the placeholder record
pub const FALLBACK_OVERVIEW: &str = "No details available.";

/// Character budget before an overview is truncated
pub const OVERVIEW_CHAR_BUDGET: usize = 300;

/// Marker appended to truncated overviews
pub const ELLIPSIS: &str = "...";

/// Enrichment payload for one movie.
///
/// `poster_url` is always populated, either a real URL or
/// [`PLACEHOLDER_POSTER_URL`]. `rating: None` is the `N/A` sentinel and is
/// rendered as such at the presentation boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetails {
    pub poster_url: String,
    pub genres: String,
    pub rating: Option<f64>,
    pub overview: String,
}

impl MovieDetails {
    /// The fixed tuple returned when nothing usable came back from TMDB
    pub fn fallback() -> Self {
        Self {
            poster_url: PLACEHOLDER_POSTER_URL.to_string(),
            genres: FALLBACK_GENRES.to_string(),
            rating: None,
            overview: FALLBACK_OVERVIEW.to_string(),
        }
    }
}

/// Why a lookup degraded to the fallback tuple.
///
/// Never propagated past the resolver; carried on [`Resolution::Fallback`]
/// so failure paths stay observable instead of being swallowed.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// Network failure, including the per-call timeout
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// TMDB answered with a non-success status
    #[error("TMDB returned status {0}")]
    Status(u16),

    /// Response body was not the expected JSON shape
    #[error("failed to decode TMDB response: {0}")]
    Decode(String),

    /// HTTP call succeeded but the response carried no poster path
    #[error("no poster path in TMDB response")]
    MissingPoster,
}

/// Exhaustive outcome of one metadata lookup.
///
/// `Enriched` means the HTTP call succeeded and a poster path was present;
/// that is exactly the acceptance condition the recommendation engine keys
/// off. Everything else is `Fallback`, whose details may still carry real
/// genre/rating/overview values (e.g. on [`FetchFailure::MissingPoster`]).
#[derive(Debug)]
pub enum Resolution {
    Enriched(MovieDetails),
    Fallback {
        details: MovieDetails,
        reason: FetchFailure,
    },
}

impl Resolution {
    pub fn is_enriched(&self) -> bool {
        matches!(self, Resolution::Enriched(_))
    }

    pub fn details(&self) -> &MovieDetails {
        match self {
            Resolution::Enriched(details) => details,
            Resolution::Fallback { details, .. } => details,
        }
    }

    pub fn into_details(self) -> MovieDetails {
        match self {
            Resolution::Enriched(details) => details,
            Resolution::Fallback { details, .. } => details,
        }
    }
}
