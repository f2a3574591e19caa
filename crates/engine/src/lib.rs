//! Engine crate for the Cinematch recommendation core.
//!
//! This crate contains the recommender that coordinates the catalog,
//! the similarity matrix and the metadata resolver.

pub mod recommender;

pub use recommender::{
    rank_candidates, Candidate, RecommendError, Recommendation, Recommender, RESULT_COUNT,
};
