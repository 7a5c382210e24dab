use crate::core::scoring::calculate_match_score;
use crate::models::{JobPosting, ScoredPosting, ScoringWeights, SeekerPreferences};

/// Result of the ranking process
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<ScoredPosting>,
    pub total_candidates: usize,
}

/// Ranking orchestrator
///
/// Scores every candidate posting against the seeker's preferences and
/// returns them ordered by descending match score. Each posting's score
/// depends only on that posting and the seeker profile, so ranking is
/// deterministic regardless of evaluation order. The caller is expected
/// to have pre-filtered postings to the open ones; no status filtering
/// happens here.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: ScoringWeights,
}

impl Ranker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank candidate postings for a seeker
    ///
    /// # Arguments
    /// * `seeker` - The seeker's stored matching preferences
    /// * `postings` - Open postings loaded by the caller, display data included
    ///
    /// # Returns
    /// RankResult with every posting scored and sorted descending by
    /// match score. The sort is stable: postings with equal scores keep
    /// their input order. This function has no failure path; malformed
    /// optional fields on any posting degrade that posting's signals to
    /// zero without affecting the rest of the batch.
    pub fn rank(&self, seeker: &SeekerPreferences, postings: Vec<JobPosting>) -> RankResult {
        let total_candidates = postings.len();

        let mut matches: Vec<ScoredPosting> = postings
            .into_iter()
            .map(|posting| {
                let (match_score, distance_km) =
                    calculate_match_score(seeker, &posting, &self.weights);

                ScoredPosting {
                    id: posting.id,
                    category_id: posting.category_id,
                    job_name: posting.job_name,
                    shop_name: posting.shop_name,
                    address: posting.address,
                    wage: posting.wage,
                    description: posting.description,
                    distance_km,
                    match_score,
                }
            })
            .collect();

        // sort_by is stable, so equal scores preserve input order
        matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        RankResult {
            matches,
            total_candidates,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;

    fn create_posting(
        id: i64,
        category_id: i64,
        days: Option<&str>,
        location: Option<(f64, f64)>,
    ) -> JobPosting {
        JobPosting {
            id,
            category_id,
            available_days: days.map(|d| d.to_string()),
            location: location.map(|(latitude, longitude)| GeoPoint {
                latitude,
                longitude,
            }),
            job_name: format!("Job {}", id),
            shop_name: format!("Shop {}", id),
            address: None,
            wage: Some(50.0),
            description: None,
        }
    }

    fn create_seeker() -> SeekerPreferences {
        SeekerPreferences {
            interested_category_ids: vec![2],
            available_days: Some(r#"["Mon","Wed"]"#.to_string()),
            location: Some(GeoPoint {
                latitude: 18.80,
                longitude: 98.98,
            }),
        }
    }

    #[test]
    fn test_rank_orders_by_score_descending() {
        let ranker = Ranker::with_default_weights();
        let seeker = create_seeker();

        let postings = vec![
            // Category + schedule + near: 100
            create_posting(1, 2, Some(r#"["Mon"]"#), Some((18.81, 98.99))),
            // Nothing: 0
            create_posting(2, 5, None, None),
            // Category + mid tier: 55
            create_posting(3, 2, Some(r#"["Fri"]"#), Some((18.93, 99.08))),
        ];

        let result = ranker.rank(&seeker, postings);

        assert_eq!(result.total_candidates, 3);
        let ids: Vec<i64> = result.matches.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);

        assert_eq!(result.matches[0].match_score, 100);
        assert_eq!(result.matches[1].match_score, 55);
        assert_eq!(result.matches[2].match_score, 0);
    }

    #[test]
    fn test_rank_empty_input() {
        let ranker = Ranker::with_default_weights();
        let seeker = create_seeker();

        let result = ranker.rank(&seeker, vec![]);

        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 0);
    }

    #[test]
    fn test_rank_is_stable_for_equal_scores() {
        let ranker = Ranker::with_default_weights();
        let seeker = create_seeker();

        // All four score 40 (category only), in a scrambled id order
        let postings = vec![
            create_posting(9, 2, None, None),
            create_posting(3, 2, None, None),
            create_posting(7, 2, None, None),
            create_posting(1, 2, None, None),
        ];

        let result = ranker.rank(&seeker, postings);

        let ids: Vec<i64> = result.matches.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![9, 3, 7, 1]);
    }

    #[test]
    fn test_rank_passes_display_fields_through() {
        let ranker = Ranker::with_default_weights();
        let seeker = create_seeker();

        let mut posting = create_posting(42, 2, None, None);
        posting.address = Some("12 Nimman Road".to_string());
        posting.description = Some("Weekend barista".to_string());

        let result = ranker.rank(&seeker, vec![posting]);

        let m = &result.matches[0];
        assert_eq!(m.id, 42);
        assert_eq!(m.job_name, "Job 42");
        assert_eq!(m.shop_name, "Shop 42");
        assert_eq!(m.address.as_deref(), Some("12 Nimman Road"));
        assert_eq!(m.description.as_deref(), Some("Weekend barista"));
        assert_eq!(m.wage, Some(50.0));
    }

    #[test]
    fn test_rank_survives_malformed_days_in_batch() {
        let ranker = Ranker::with_default_weights();
        let seeker = create_seeker();

        let postings = vec![
            create_posting(1, 2, Some("garbage"), None),
            create_posting(2, 2, Some(r#"["Mon"]"#), None),
        ];

        let result = ranker.rank(&seeker, postings);

        assert_eq!(result.matches.len(), 2);
        // The well-formed posting outranks the malformed one
        assert_eq!(result.matches[0].id, 2);
        assert_eq!(result.matches[0].match_score, 70);
        assert_eq!(result.matches[1].id, 1);
        assert_eq!(result.matches[1].match_score, 40);
    }

    #[test]
    fn test_missing_location_omits_distance() {
        let ranker = Ranker::with_default_weights();
        let seeker = create_seeker();

        let postings = vec![
            create_posting(1, 5, None, Some((18.81, 98.99))),
            create_posting(2, 5, None, None),
        ];

        let result = ranker.rank(&seeker, postings);

        let with_location = result.matches.iter().find(|m| m.id == 1).unwrap();
        let without_location = result.matches.iter().find(|m| m.id == 2).unwrap();

        assert!(with_location.distance_km.is_some());
        assert!(without_location.distance_km.is_none());
    }
}
