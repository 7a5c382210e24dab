use crate::core::distance::haversine_distance;
use crate::core::schedule::{days_overlap, parse_day_set};
use crate::models::{JobPosting, ScoringWeights, SeekerPreferences};

/// Points awarded when the posting's category is in the seeker's
/// interested set
pub const CATEGORY_WEIGHT: u8 = 40;
/// Points awarded when seeker and posting share at least one available day
pub const SCHEDULE_WEIGHT: u8 = 30;
/// Points awarded when the posting is within the near distance tier
pub const PROXIMITY_NEAR_WEIGHT: u8 = 30;
/// Points awarded when the posting is within the mid distance tier
pub const PROXIMITY_MID_WEIGHT: u8 = 15;
/// Near tier boundary in kilometers
pub const NEAR_TIER_KM: f64 = 10.0;
/// Mid tier boundary in kilometers
pub const MID_TIER_KM: f64 = 20.0;

/// Calculate a match score (0-100) for a posting against a seeker's
/// preferences
///
/// Scoring formula:
/// ```text
/// score = category_signal   (40 if categoryId is an interested category)
///       + schedule_signal   (30 if the parsed day sets intersect)
///       + proximity_signal  (30 if <= 10km, 15 if <= 20km, else 0)
/// ```
///
/// Returns the score and the distance in kilometers. The distance is
/// `None` when either side has no location; it is never substituted with
/// a sentinel, so a missing distance stays distinguishable from a real
/// zero. Missing or malformed optional fields contribute 0 to their
/// signal and never abort scoring.
pub fn calculate_match_score(
    seeker: &SeekerPreferences,
    posting: &JobPosting,
    weights: &ScoringWeights,
) -> (u8, Option<f64>) {
    let category = category_score(seeker, posting, weights);
    let schedule = schedule_score(seeker, posting, weights);
    let (proximity, distance_km) = proximity_score(seeker, posting, weights);

    // Default weights sum to at most 100; widen and clamp so overridden
    // weights cannot overflow the score
    let total = category as u16 + schedule as u16 + proximity as u16;

    (total.min(100) as u8, distance_km)
}

/// Category signal: exact integer membership, no partial similarity
#[inline]
fn category_score(
    seeker: &SeekerPreferences,
    posting: &JobPosting,
    weights: &ScoringWeights,
) -> u8 {
    if seeker.interested_category_ids.contains(&posting.category_id) {
        weights.category
    } else {
        0
    }
}

/// Schedule signal: both day lists must parse and intersect. A missing
/// or unparseable list on either side is a silent zero, not an error.
#[inline]
fn schedule_score(
    seeker: &SeekerPreferences,
    posting: &JobPosting,
    weights: &ScoringWeights,
) -> u8 {
    let seeker_days = parse_day_set(seeker.available_days.as_deref());
    let posting_days = parse_day_set(posting.available_days.as_deref());

    match (seeker_days, posting_days) {
        (Some(a), Some(b)) if days_overlap(&a, &b) => weights.schedule,
        _ => 0,
    }
}

/// Proximity signal: tiered on the haversine distance. Skipped entirely
/// when either location is absent, in which case no distance is reported.
#[inline]
fn proximity_score(
    seeker: &SeekerPreferences,
    posting: &JobPosting,
    weights: &ScoringWeights,
) -> (u8, Option<f64>) {
    let (seeker_loc, posting_loc) = match (seeker.location, posting.location) {
        (Some(s), Some(p)) => (s, p),
        _ => return (0, None),
    };

    let distance_km = haversine_distance(
        seeker_loc.latitude,
        seeker_loc.longitude,
        posting_loc.latitude,
        posting_loc.longitude,
    );

    let points = if distance_km <= weights.near_tier_km {
        weights.proximity_near
    } else if distance_km <= weights.mid_tier_km {
        weights.proximity_mid
    } else {
        0
    };

    (points, Some(distance_km))
}
