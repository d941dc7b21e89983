use crate::core::keywords::{
    COLLABORATION_STYLES, DEFAULT_COLLABORATION_STYLE, DEFAULT_PROBLEM_SOLVING,
    EXPERIENCE_INDICATORS, LEARNING_PHRASES, PROBLEM_SOLVING_APPROACHES, SKILL_KEYWORDS,
};
use crate::core::round2;
use crate::models::{ConversationAnalysis, ExperienceLevel, SkillExtraction};

/// Maximum trigger phrases reported as evidence per skill
const MAX_EVIDENCE: usize = 3;

/// Maximum learning goals reported per analysis
const MAX_LEARNING_GOALS: usize = 3;

/// Extract skills from free-form text with confidence scoring.
///
/// A skill is reported when at least one of its trigger phrases occurs as a
/// substring of the lowercased input. Confidence rewards dense trigger
/// coverage and saturates at 1.0 once half of the declared triggers appear.
/// Results are sorted by descending confidence; the sort is stable, so ties
/// keep table declaration order.
pub fn extract_skills(text: &str) -> Vec<SkillExtraction> {
    let text_lower = text.to_lowercase();
    let mut extracted = Vec::new();

    for (skill, triggers) in SKILL_KEYWORDS {
        let matches: Vec<&str> = triggers
            .iter()
            .copied()
            .filter(|trigger| text_lower.contains(trigger))
            .collect();

        if matches.is_empty() {
            continue;
        }

        let confidence = round2((matches.len() as f64 / triggers.len() as f64 * 2.0).min(1.0));
        extracted.push(SkillExtraction {
            skill: (*skill).to_string(),
            confidence,
            evidence: matches
                .iter()
                .take(MAX_EVIDENCE)
                .map(|m| (*m).to_string())
                .collect(),
        });
    }

    extracted.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    extracted
}

/// Assess experience level from indicator phrases.
///
/// Indicator groups are checked in priority order (expert first); the first
/// group with any matching phrase wins. Total function: falls back to
/// `Intermediate` when nothing matches.
pub fn assess_experience_level(text: &str) -> ExperienceLevel {
    let text_lower = text.to_lowercase();

    for (level, indicators) in EXPERIENCE_INDICATORS {
        if indicators.iter().any(|phrase| text_lower.contains(phrase)) {
            return *level;
        }
    }

    ExperienceLevel::Intermediate
}

/// Extract skills the author wants to learn but does not already show.
///
/// A skill qualifies when a generic learning phrase appears anywhere in the
/// text, the skill's name occurs literally in the lowercased text, and the
/// skill was not already extracted for the same text. The learning-phrase
/// check is deliberately unanchored to the specific skill mention.
pub fn extract_learning_goals(text: &str, extracted: &[SkillExtraction]) -> Vec<String> {
    let text_lower = text.to_lowercase();

    if !LEARNING_PHRASES
        .iter()
        .any(|phrase| text_lower.contains(phrase))
    {
        return Vec::new();
    }

    SKILL_KEYWORDS
        .iter()
        .map(|(skill, _)| *skill)
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .filter(|skill| !extracted.iter().any(|e| e.skill == *skill))
        .take(MAX_LEARNING_GOALS)
        .map(str::to_string)
        .collect()
}

/// First-match-wins classification over an ordered (label, triggers) table
fn classify(
    text_lower: &str,
    table: &[(&'static str, &'static [&'static str])],
    default: &'static str,
) -> &'static str {
    table
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|phrase| text_lower.contains(phrase)))
        .map(|(label, _)| *label)
        .unwrap_or(default)
}

/// Classify the author's preferred collaboration style.
pub fn classify_collaboration_style(text: &str) -> &'static str {
    classify(
        &text.to_lowercase(),
        COLLABORATION_STYLES,
        DEFAULT_COLLABORATION_STYLE,
    )
}

/// Classify the author's problem-solving approach.
pub fn classify_problem_solving(text: &str) -> &'static str {
    classify(
        &text.to_lowercase(),
        PROBLEM_SOLVING_APPROACHES,
        DEFAULT_PROBLEM_SOLVING,
    )
}

/// Portfolio readiness derived from already-computed analysis fields.
///
/// No new matching logic: 0.2 per extracted skill plus a bonus of 0.3 for
/// advanced/expert authors (0.1 otherwise), capped at 1.0.
pub fn calculate_portfolio_readiness(skill_count: usize, experience: ExperienceLevel) -> f64 {
    let bonus = match experience {
        ExperienceLevel::Advanced | ExperienceLevel::Expert => 0.3,
        _ => 0.1,
    };
    round2((skill_count as f64 * 0.2 + bonus).min(1.0))
}

/// Run the full conversation analysis over one piece of text.
///
/// The component analyses are independent; none of them can fail. Empty or
/// unrecognized text degrades to defaults rather than erroring.
pub fn analyze_conversation(text: &str) -> ConversationAnalysis {
    let extracted_skills = extract_skills(text);
    let experience_level = assess_experience_level(text);
    let learning_goals = extract_learning_goals(text, &extracted_skills);
    let collaboration_style = classify_collaboration_style(text).to_string();
    let problem_solving_approach = classify_problem_solving(text).to_string();
    let portfolio_readiness =
        calculate_portfolio_readiness(extracted_skills.len(), experience_level);

    ConversationAnalysis {
        extracted_skills,
        experience_level,
        learning_goals,
        collaboration_style,
        problem_solving_approach,
        portfolio_readiness,
    }
}
