use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Demo user profile with skills and collaboration data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub title: String,
    pub location: String,
    /// Skill name -> proficiency level (1-5)
    pub skills: BTreeMap<String, u8>,
    #[serde(default)]
    pub learning_goals: Vec<String>,
    #[serde(default)]
    pub collaboration_preferences: Vec<String>,
    #[serde(default)]
    pub current_projects: Vec<String>,
    pub bio: String,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub linkedin_url: Option<String>,
}

impl UserProfile {
    /// Helper to check a collaboration preference by name
    pub fn prefers(&self, preference: &str) -> bool {
        self.collaboration_preferences
            .iter()
            .any(|p| p == preference)
    }
}

/// One extracted skill with its supporting evidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillExtraction {
    pub skill: String,
    /// Trigger coverage score in [0, 1], rounded to two decimals
    pub confidence: f64,
    /// Up to three matched trigger phrases, in table order
    pub evidence: Vec<String>,
}

/// Experience level inferred from conversation text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
}

/// Scored match result for one roster profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub user: UserProfile,
    pub compatibility_score: f64,
    pub skill_complementarity: f64,
    pub learning_synergy: f64,
    pub collaboration_fit: f64,
    pub reasoning: Vec<String>,
    pub suggested_projects: Vec<String>,
    pub mutual_benefits: MutualBenefits,
}

/// What each side gets out of the collaboration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutualBenefits {
    pub you_gain: Vec<String>,
    pub they_gain: Vec<String>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub skill_overlap: f64,
    pub learning_synergy: f64,
    pub collaboration_fit: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_overlap: 0.4,
            learning_synergy: 0.4,
            collaboration_fit: 0.2,
        }
    }
}
