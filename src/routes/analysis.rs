use crate::core::analyze_conversation;
use crate::models::{AnalyzeRequest, ErrorResponse, HealthResponse};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Example text used by the demo analysis endpoint
const EXAMPLE_CONVERSATION: &str = "I'm a mechanical engineer with 2 years of data science \
    experience. I'm working on a football momentum prediction project using machine learning \
    with walk-forward validation. I need to learn web development and NLP to build the \
    complete application with commentary features. Looking for portfolio building \
    collaboration partners.";

/// Configure analysis-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(service_info))
        .route("/health", web::get().to(health_check))
        .route("/analyze", web::post().to(analyze))
        .route("/demo/conversation", web::get().to(demo_conversation));
}

/// Service info endpoint
///
/// GET /
async fn service_info() -> impl Responder {
    let build_id = std::env::var("BUILD_ID").unwrap_or_else(|_| "local".to_string());

    HttpResponse::Ok().json(serde_json::json!({
        "message": "AI/DS Matchmaker API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "build_id": build_id,
        "endpoints": {
            "analyze": "/analyze - Extract skills from conversation",
            "match": "/match - Find collaboration partners",
            "demo_users": "/demo/users - Sample user profiles",
            "demo_conversation": "/demo/conversation - Example conversation analysis"
        }
    }))
}

/// Health check endpoint
///
/// There are no downstream dependencies to probe; the service is healthy
/// whenever it can answer.
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "AI/DS Matchmaker API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Conversation analysis endpoint
///
/// POST /analyze
///
/// Request body:
/// ```json
/// {
///   "text": "string"
/// }
/// ```
async fn analyze(req: web::Json<AnalyzeRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for analyze request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let analysis = analyze_conversation(&req.text);

    tracing::debug!(
        "Analyzed {} chars: {} skills, level {:?}",
        req.text.len(),
        analysis.extracted_skills.len(),
        analysis.experience_level
    );

    HttpResponse::Ok().json(analysis)
}

/// Canned conversation analysis for demos
///
/// GET /demo/conversation
async fn demo_conversation() -> impl Responder {
    let analysis = analyze_conversation(EXAMPLE_CONVERSATION);

    HttpResponse::Ok().json(serde_json::json!({
        "example_input": EXAMPLE_CONVERSATION,
        "analysis_result": analysis,
        "demo_note": "Shows how skills, experience, and collaboration needs are extracted \
                      from natural conversation"
    }))
}
