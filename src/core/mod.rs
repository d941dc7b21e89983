// Core algorithm exports
pub mod analysis;
pub mod keywords;
pub mod matcher;
pub mod scoring;

pub use analysis::{
    analyze_conversation, assess_experience_level, classify_collaboration_style,
    classify_problem_solving, extract_learning_goals, extract_skills,
};
pub use matcher::{FitSampler, FixedFitSampler, Matcher, UniformFitSampler, DEFAULT_MAX_RESULTS};
pub use scoring::score_profile;

/// Round a score to two decimal places for the wire format
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
