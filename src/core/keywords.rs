//! Constant trigger-phrase tables for skill and trait detection.
//!
//! All triggers are lowercase and matched as substrings of lowercased input.
//! Declaration order is priority order: skill extraction reports ties in
//! table order, and the classifier tables are scanned first-match-wins.

use crate::models::ExperienceLevel;

/// Skill name -> trigger phrases
pub const SKILL_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Python",
        &["python", "py", "django", "flask", "fastapi", "pandas", "numpy"],
    ),
    (
        "Machine Learning",
        &[
            "ml",
            "machine learning",
            "scikit-learn",
            "sklearn",
            "model",
            "algorithm",
        ],
    ),
    (
        "Deep Learning",
        &[
            "deep learning",
            "neural network",
            "tensorflow",
            "pytorch",
            "keras",
        ],
    ),
    (
        "NLP",
        &[
            "nlp",
            "natural language",
            "text processing",
            "spacy",
            "nltk",
            "transformers",
        ],
    ),
    (
        "Data Science",
        &["data science", "data analysis", "statistics", "visualization"],
    ),
    ("SQL", &["sql", "database", "postgresql", "mysql", "query"]),
    (
        "JavaScript",
        &["javascript", "js", "react", "node", "express", "next"],
    ),
    (
        "Frontend",
        &["frontend", "ui", "css", "html", "react", "vue", "angular"],
    ),
    (
        "Backend",
        &["backend", "api", "server", "fastapi", "django", "flask"],
    ),
    (
        "DevOps",
        &["docker", "kubernetes", "aws", "deployment", "ci/cd"],
    ),
    ("Git", &["git", "github", "version control", "collaboration"]),
    ("Cloud", &["aws", "azure", "gcp", "cloud", "deployment"]),
];

/// Experience indicators, highest level first. The first group with a
/// matching phrase wins.
pub const EXPERIENCE_INDICATORS: &[(ExperienceLevel, &[&str])] = &[
    (
        ExperienceLevel::Expert,
        &[
            "expert",
            "senior",
            "lead",
            "architect",
            "years",
            "production",
            "scale",
        ],
    ),
    (
        ExperienceLevel::Advanced,
        &["advanced", "complex", "optimization", "architecture", "design"],
    ),
    (
        ExperienceLevel::Intermediate,
        &["intermediate", "working with", "experience", "familiar"],
    ),
    (
        ExperienceLevel::Beginner,
        &["learning", "new to", "getting started", "beginner", "tutorial"],
    ),
];

/// Collaboration style indicators, first match wins
pub const COLLABORATION_STYLES: &[(&str, &[&str])] = &[
    ("Portfolio Builder", &["portfolio", "showcase", "project", "build"]),
    ("Learning Partner", &["learn", "study", "together", "mentor"]),
    ("Technical Leader", &["lead", "manage", "team", "architecture"]),
    ("Problem Solver", &["solve", "challenge", "problem", "optimize"]),
];

pub const DEFAULT_COLLABORATION_STYLE: &str = "Portfolio Builder";

/// Problem-solving approach indicators, first match wins
pub const PROBLEM_SOLVING_APPROACHES: &[(&str, &[&str])] = &[
    ("Systematic", &["systematic", "process", "methodology", "framework"]),
    ("Creative", &["creative", "innovative", "unique", "original"]),
    ("Practical", &["practical", "real-world", "useful", "efficient"]),
    ("Research-Oriented", &["research", "academic", "theory", "analysis"]),
];

pub const DEFAULT_PROBLEM_SOLVING: &str = "Practical";

/// Phrases that signal intent to learn something new
pub const LEARNING_PHRASES: &[&str] =
    &["want to learn", "need to learn", "interested in", "learning"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_names_unique() {
        let mut names: Vec<&str> = SKILL_KEYWORDS.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SKILL_KEYWORDS.len());
    }

    #[test]
    fn test_triggers_are_lowercase() {
        for (_, triggers) in SKILL_KEYWORDS {
            for trigger in *triggers {
                assert_eq!(*trigger, trigger.to_lowercase());
            }
        }
        for (_, indicators) in EXPERIENCE_INDICATORS {
            for phrase in *indicators {
                assert_eq!(*phrase, phrase.to_lowercase());
            }
        }
    }

    #[test]
    fn test_every_skill_has_triggers() {
        for (name, triggers) in SKILL_KEYWORDS {
            assert!(!triggers.is_empty(), "skill {} has no triggers", name);
        }
    }

    #[test]
    fn test_experience_priority_order() {
        // expert must outrank everything, beginner must come last
        assert_eq!(EXPERIENCE_INDICATORS[0].0, ExperienceLevel::Expert);
        assert_eq!(
            EXPERIENCE_INDICATORS[EXPERIENCE_INDICATORS.len() - 1].0,
            ExperienceLevel::Beginner
        );
    }
}
