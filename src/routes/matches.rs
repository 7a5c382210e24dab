use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Ranker;
use crate::models::{ErrorResponse, HealthResponse, RankRequest, RankResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranker: Ranker,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank postings endpoint
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "seeker": {
///     "interestedCategoryIds": [2],
///     "availableDays": "[\"Mon\",\"Wed\"]",
///     "location": { "latitude": 18.80, "longitude": 98.98 }
///   },
///   "postings": [ ... ]
/// }
/// ```
///
/// Returns every posting scored 0-100 and sorted descending by
/// matchScore, with distanceKm present only where both sides had a
/// location. Ranking itself cannot fail; the only error path here is
/// request validation.
async fn rank_matches(state: web::Data<AppState>, req: web::Json<RankRequest>) -> impl Responder {
    // Coordinates are validated here once; the engine trusts them
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();

    tracing::info!(
        "Ranking {} postings for seeker with {} interested categories",
        req.postings.len(),
        req.seeker.interested_category_ids.len()
    );

    let result = state.ranker.rank(&req.seeker, req.postings);

    let response = RankResponse {
        matches: result.matches,
        total_results: result.total_candidates,
    };

    tracing::debug!(
        "Returning {} ranked postings (top score: {})",
        response.matches.len(),
        response.matches.first().map(|m| m.match_score).unwrap_or(0)
    );

    HttpResponse::Ok().json(response)
}
