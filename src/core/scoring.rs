use crate::core::round2;
use crate::models::{MutualBenefits, ScoredMatch, ScoringWeights, UserProfile};
use std::collections::HashSet;

/// Maximum entries per mutual-benefit list
const MAX_BENEFITS: usize = 2;

/// Score one roster profile against the requester's stated skills.
///
/// `collaboration_fit` is supplied by the caller so the randomness source
/// stays injectable; production samples it uniformly from [0.6, 0.9].
pub fn score_profile(
    profile: &UserProfile,
    requested_skills: &[String],
    collaboration_fit: f64,
    weights: &ScoringWeights,
) -> ScoredMatch {
    let skill_overlap = calculate_skill_overlap(profile, requested_skills);
    let learning_synergy = calculate_learning_synergy(profile, requested_skills);

    let compatibility_score = round2(
        skill_overlap * weights.skill_overlap
            + learning_synergy * weights.learning_synergy
            + collaboration_fit * weights.collaboration_fit,
    );

    let reasoning = build_reasoning(profile, skill_overlap, learning_synergy);
    let suggested_projects = suggest_projects(profile);
    let mutual_benefits = build_mutual_benefits(profile, requested_skills);

    ScoredMatch {
        user: profile.clone(),
        compatibility_score,
        skill_complementarity: round2(skill_overlap),
        learning_synergy: round2(learning_synergy),
        collaboration_fit: round2(collaboration_fit),
        reasoning,
        suggested_projects,
        mutual_benefits,
    }
}

/// Fraction of the requester's stated skills the profile also has.
///
/// Asymmetric on purpose: the numerator dedups the requested skills while
/// the denominator is the raw list length, and an empty request divides by
/// one instead of failing.
fn calculate_skill_overlap(profile: &UserProfile, requested: &[String]) -> f64 {
    let unique: HashSet<&str> = requested.iter().map(String::as_str).collect();
    let shared = unique
        .iter()
        .filter(|skill| profile.skills.contains_key(**skill))
        .count();

    shared as f64 / requested.len().max(1) as f64
}

/// Fraction of the profile's learning goals the requester could satisfy.
fn calculate_learning_synergy(profile: &UserProfile, requested: &[String]) -> f64 {
    let shared = profile
        .learning_goals
        .iter()
        .filter(|goal| requested.contains(goal))
        .count();

    shared as f64 / profile.learning_goals.len().max(1) as f64
}

/// Reasoning strings in fixed check order
fn build_reasoning(profile: &UserProfile, skill_overlap: f64, learning_synergy: f64) -> Vec<String> {
    let mut reasoning = Vec::new();

    if skill_overlap > 0.3 {
        reasoning.push("Strong skill complementarity for collaboration".to_string());
    }
    if learning_synergy > 0.3 {
        reasoning.push("Excellent learning exchange opportunities".to_string());
    }
    if profile.prefers("Portfolio Building") {
        reasoning.push("Both focused on portfolio development".to_string());
    }

    reasoning
}

/// Two project ideas derived from the profile's title and skill set
fn suggest_projects(profile: &UserProfile) -> Vec<String> {
    let focus = profile.title.split_whitespace().next().unwrap_or("AI");
    let skill_names: Vec<&str> = profile.skills.keys().map(String::as_str).collect();

    vec![
        format!("Full-stack AI application combining {} and ML", focus),
        format!(
            "Portfolio project showcasing {} integration",
            skill_names.join(", ")
        ),
    ]
}

/// Up to two entries per side.
///
/// `you_gain` keeps the upstream quirk of naming skills the two sides
/// already share rather than new ones; callers depend on the literal
/// behavior.
fn build_mutual_benefits(profile: &UserProfile, requested: &[String]) -> MutualBenefits {
    let you_gain = profile
        .skills
        .keys()
        .filter(|skill| requested.iter().any(|s| &s == skill))
        .take(MAX_BENEFITS)
        .map(|skill| format!("Learn {}", skill))
        .collect();

    let they_gain = requested
        .iter()
        .filter(|skill| !profile.skills.contains_key(skill.as_str()))
        .take(MAX_BENEFITS)
        .map(|skill| format!("Learn {}", skill))
        .collect();

    MutualBenefits { you_gain, they_gain }
}
