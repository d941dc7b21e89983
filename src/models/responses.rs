use crate::models::domain::{ExperienceLevel, ScoredMatch, SkillExtraction};
use serde::{Deserialize, Serialize};

/// Full analysis of one piece of conversation text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationAnalysis {
    pub extracted_skills: Vec<SkillExtraction>,
    pub experience_level: ExperienceLevel,
    pub learning_goals: Vec<String>,
    pub collaboration_style: String,
    pub problem_solving_approach: String,
    pub portfolio_readiness: f64,
}

/// Response for the find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matches: Vec<ScoredMatch>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
