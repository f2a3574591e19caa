//! # TMDB Client Crate
//!
//! Metadata resolver for the recommendation engine: given a TMDB movie id,
//! return poster/genre/rating/overview, or a well-defined fallback on any
//! failure. One bounded HTTP call per lookup, no retries, no shared state
//! between calls.
//!
//! The [`MetadataResolver`] trait is the seam the engine depends on; the
//! [`TmdbClient`] is the production implementation.

pub mod client;
pub mod config;
pub mod resolution;

pub use client::{MetadataResolver, TmdbClient, TmdbId};
pub use config::TmdbConfig;
pub use resolution::{
    FetchFailure, MovieDetails, Resolution, ELLIPSIS, FALLBACK_GENRES, FALLBACK_OVERVIEW,
    MISSING_OVERVIEW, OVERVIEW_CHAR_BUDGET, PLACEHOLDER_POSTER_URL, UNKNOWN_GENRE,
};
