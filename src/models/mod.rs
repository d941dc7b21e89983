// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ExperienceLevel, MutualBenefits, ScoredMatch, ScoringWeights, SkillExtraction, UserProfile,
};
pub use requests::{AnalyzeRequest, MatchRequest};
pub use responses::{ConversationAnalysis, ErrorResponse, HealthResponse, MatchResponse};
