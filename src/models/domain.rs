use serde::{Deserialize, Serialize};
use validator::Validate;

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct GeoPoint {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

/// Job seeker preferences used for matching
///
/// Loaded by the caller from the seeker's stored profile. `available_days`
/// carries the raw serialized day list as stored; parsing happens in the
/// engine so malformed data degrades to a zero signal instead of failing
/// the request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SeekerPreferences {
    #[serde(rename = "interestedCategoryIds", default)]
    pub interested_category_ids: Vec<i64>,
    #[serde(rename = "availableDays", default)]
    pub available_days: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub location: Option<GeoPoint>,
}

/// An open job posting, as loaded by the caller with shop display data
/// joined in
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JobPosting {
    pub id: i64,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    #[serde(rename = "availableDays", default)]
    pub available_days: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub location: Option<GeoPoint>,
    #[serde(rename = "jobName")]
    pub job_name: String,
    #[serde(rename = "shopName")]
    pub shop_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub wage: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A scored posting: the input posting's display fields plus the
/// computed match score and, when both locations were known, the
/// distance to the seeker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredPosting {
    pub id: i64,
    #[serde(rename = "categoryId")]
    pub category_id: i64,
    #[serde(rename = "jobName")]
    pub job_name: String,
    #[serde(rename = "shopName")]
    pub shop_name: String,
    pub address: Option<String>,
    pub wage: Option<f64>,
    pub description: Option<String>,
    #[serde(rename = "distanceKm", skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// Scoring weights and distance tiers
///
/// The defaults are the scoring contract (category 40, schedule 30,
/// proximity 30/15 at 10km/20km); configuration can override them for
/// experimentation but rankings produced with non-default values are not
/// comparable to production scores.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub category: u8,
    pub schedule: u8,
    pub proximity_near: u8,
    pub proximity_mid: u8,
    pub near_tier_km: f64,
    pub mid_tier_km: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            category: crate::core::scoring::CATEGORY_WEIGHT,
            schedule: crate::core::scoring::SCHEDULE_WEIGHT,
            proximity_near: crate::core::scoring::PROXIMITY_NEAR_WEIGHT,
            proximity_mid: crate::core::scoring::PROXIMITY_MID_WEIGHT,
            near_tier_km: crate::core::scoring::NEAR_TIER_KM,
            mid_tier_km: crate::core::scoring::MID_TIER_KM,
        }
    }
}
