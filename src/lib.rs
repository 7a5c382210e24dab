//! Jobmatch Algo - matching and ranking service for the part-time job
//! marketplace
//!
//! This library provides the compatibility scoring engine that orders
//! open job postings for a seeker. It combines three fixed-weight
//! signals (category affinity, schedule overlap, geographic proximity)
//! into a single 0-100 match score.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{haversine_distance, RankResult, Ranker};
pub use models::{
    GeoPoint, JobPosting, RankRequest, RankResponse, ScoredPosting, ScoringWeights,
    SeekerPreferences,
};
