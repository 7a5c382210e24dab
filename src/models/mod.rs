// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{GeoPoint, JobPosting, ScoredPosting, ScoringWeights, SeekerPreferences};
pub use requests::RankRequest;
pub use responses::{ErrorResponse, HealthResponse, RankResponse};
