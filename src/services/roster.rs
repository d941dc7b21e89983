use crate::models::UserProfile;
use std::collections::BTreeMap;

/// The fixed demo roster.
///
/// Seeded once at startup and read-only for the lifetime of the process;
/// requests never mutate it.
#[derive(Debug, Clone)]
pub struct Roster {
    profiles: Vec<UserProfile>,
}

impl Roster {
    /// Seed the four demo profiles
    pub fn demo() -> Self {
        let profiles = vec![
            UserProfile {
                id: "user1".to_string(),
                name: "Sarah Chen".to_string(),
                title: "Full-Stack Developer & ML Enthusiast".to_string(),
                location: "San Francisco, CA".to_string(),
                skills: skill_map(&[
                    ("JavaScript", 5),
                    ("React", 5),
                    ("Python", 3),
                    ("Machine Learning", 2),
                ]),
                learning_goals: strings(&["Machine Learning", "Deep Learning", "Data Science"]),
                collaboration_preferences: strings(&["Portfolio Building", "Learning Partner"]),
                current_projects: strings(&["E-commerce Platform", "Learning ML Fundamentals"]),
                bio: "Frontend expert transitioning to AI/ML. Love building user-friendly \
                      interfaces and want to add intelligence to my applications."
                    .to_string(),
                github_url: Some("https://github.com/sarahchen".to_string()),
                linkedin_url: Some("https://linkedin.com/in/sarahchen".to_string()),
            },
            UserProfile {
                id: "user2".to_string(),
                name: "Marcus Rodriguez".to_string(),
                title: "NLP Research Engineer".to_string(),
                location: "Austin, TX".to_string(),
                skills: skill_map(&[
                    ("Python", 5),
                    ("NLP", 5),
                    ("Deep Learning", 4),
                    ("Frontend", 2),
                ]),
                learning_goals: strings(&["Frontend", "Product Management", "UI/UX"]),
                collaboration_preferences: strings(&["Portfolio Building", "Technical Mentor"]),
                current_projects: strings(&["Sentiment Analysis API", "Chatbot Framework"]),
                bio: "NLP specialist with 4+ years experience. Want to learn how to build \
                      better user interfaces for my AI models."
                    .to_string(),
                github_url: Some("https://github.com/marcusrodriguez".to_string()),
                linkedin_url: None,
            },
            UserProfile {
                id: "user3".to_string(),
                name: "Priya Patel".to_string(),
                title: "Data Scientist → Product Manager".to_string(),
                location: "New York, NY".to_string(),
                skills: skill_map(&[
                    ("Data Science", 4),
                    ("SQL", 5),
                    ("Python", 4),
                    ("Product Management", 3),
                ]),
                learning_goals: strings(&["Machine Learning", "Technical Leadership"]),
                collaboration_preferences: strings(&["Co-founder", "Strategic Partner"]),
                current_projects: strings(&["Analytics Dashboard", "ML Product Strategy"]),
                bio: "Bridging data science and product. Looking for technical co-founders \
                      to build AI-powered products."
                    .to_string(),
                github_url: None,
                linkedin_url: Some("https://linkedin.com/in/priyapatel".to_string()),
            },
            UserProfile {
                id: "user4".to_string(),
                name: "Alex Kim".to_string(),
                title: "DevOps Engineer Learning AI".to_string(),
                location: "Seattle, WA".to_string(),
                skills: skill_map(&[
                    ("DevOps", 5),
                    ("Cloud", 5),
                    ("Python", 3),
                    ("Machine Learning", 1),
                ]),
                learning_goals: strings(&["Machine Learning", "AI/ML Operations"]),
                collaboration_preferences: strings(&["Learning Partner", "Portfolio Building"]),
                current_projects: strings(&["ML Pipeline Infrastructure", "Kubernetes for ML"]),
                bio: "Infrastructure expert wanting to specialize in MLOps. Can handle all \
                      deployment and scaling needs."
                    .to_string(),
                github_url: Some("https://github.com/alexkim".to_string()),
                linkedin_url: None,
            },
        ];

        Self { profiles }
    }

    pub fn profiles(&self) -> &[UserProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

fn skill_map(entries: &[(&str, u8)]) -> BTreeMap<String, u8> {
    entries
        .iter()
        .map(|(skill, level)| (skill.to_string(), *level))
        .collect()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
