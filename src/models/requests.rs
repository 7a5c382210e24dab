use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{JobPosting, SeekerPreferences};

/// Request to rank open postings for a seeker
///
/// The caller (the marketplace backend) has already authenticated the
/// seeker, loaded their stored preferences, and loaded the open postings
/// with display data joined in. This service only scores and orders.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(nested)]
    pub seeker: SeekerPreferences,
    #[serde(default)]
    #[validate(nested)]
    pub postings: Vec<JobPosting>,
}
