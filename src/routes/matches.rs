use crate::models::{ErrorResponse, MatchRequest, MatchResponse};
use crate::routes::AppState;
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Configure match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/match", web::post().to(find_matches))
        .route("/demo/users", web::get().to(get_demo_users))
        .route("/stats", web::get().to(get_stats));
}

/// Find matches endpoint
///
/// POST /match
///
/// Request body:
/// ```json
/// {
///   "skills": ["string"]
/// }
/// ```
///
/// Extra fields in the body are ignored.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!("Finding matches for {} requested skills", req.skills.len());

    let matches = state
        .matcher
        .find_matches(&req.skills, state.roster.profiles());

    tracing::debug!(
        "Returning {} matches (roster size {})",
        matches.len(),
        state.roster.len()
    );

    HttpResponse::Ok().json(MatchResponse { matches })
}

/// Demo roster endpoint
///
/// GET /demo/users
async fn get_demo_users(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.roster.profiles())
}

/// Demo statistics endpoint
///
/// GET /stats
async fn get_stats() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "total_users": 1247,
        "successful_matches": 89,
        "active_collaborations": 34,
        "completed_projects": 23,
        "skills_analyzed": 15000,
        "avg_match_accuracy": 0.87,
        "countries_represented": 42,
        "top_skills": ["Python", "Machine Learning", "JavaScript", "Data Science", "React"],
        "success_stories": [
            "AI-powered e-commerce platform built by ML engineer + Full-stack developer",
            "NLP research project turned into startup by Data Scientist + Product Manager",
            "Open-source ML tools with 2K+ GitHub stars from international collaboration"
        ]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_request_accepts_missing_skills() {
        let req: MatchRequest = serde_json::from_str("{}").unwrap();
        assert!(req.skills.is_empty());
    }

    #[test]
    fn test_match_request_ignores_extra_fields() {
        let req: MatchRequest =
            serde_json::from_str(r#"{"skills": ["Python"], "user_id": "abc"}"#).unwrap();
        assert_eq!(req.skills, vec!["Python"]);
    }
}
