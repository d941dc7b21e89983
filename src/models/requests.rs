use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to analyze free-text conversation input
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[validate(length(max = 20000))]
    pub text: String,
}

/// Request to find collaboration matches
///
/// Unknown extra fields in the body are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    #[serde(default)]
    #[validate(length(max = 50))]
    pub skills: Vec<String>,
}
