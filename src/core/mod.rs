// Core algorithm exports
pub mod distance;
pub mod ranker;
pub mod schedule;
pub mod scoring;

pub use distance::haversine_distance;
pub use ranker::{RankResult, Ranker};
pub use schedule::{parse_day_set, Weekday};
pub use scoring::calculate_match_score;
