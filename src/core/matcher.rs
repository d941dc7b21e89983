use crate::core::scoring::score_profile;
use crate::models::{ScoredMatch, ScoringWeights, UserProfile};
use rand::Rng;
use std::sync::Arc;

/// Default number of matches returned per request
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Source of the collaboration-fit signal.
///
/// The production sampler draws uniformly from [0.6, 0.9]. Tests pin the
/// draw to a fixed value so rankings are deterministic.
pub trait FitSampler: Send + Sync {
    fn sample(&self) -> f64;
}

/// Uniform draw over a closed range
#[derive(Debug, Clone, Copy)]
pub struct UniformFitSampler {
    pub min: f64,
    pub max: f64,
}

impl UniformFitSampler {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for UniformFitSampler {
    fn default() -> Self {
        Self { min: 0.6, max: 0.9 }
    }
}

impl FitSampler for UniformFitSampler {
    fn sample(&self) -> f64 {
        rand::thread_rng().gen_range(self.min..=self.max)
    }
}

/// Fixed-value sampler for tests and reproducible runs
#[derive(Debug, Clone, Copy)]
pub struct FixedFitSampler(pub f64);

impl FitSampler for FixedFitSampler {
    fn sample(&self) -> f64 {
        self.0
    }
}

/// Ranks the roster against a requested skill set
#[derive(Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    max_results: usize,
    fit_sampler: Arc<dyn FitSampler>,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, max_results: usize) -> Self {
        Self {
            weights,
            max_results,
            fit_sampler: Arc::new(UniformFitSampler::default()),
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), DEFAULT_MAX_RESULTS)
    }

    /// Swap the collaboration-fit source
    pub fn with_fit_sampler(mut self, sampler: Arc<dyn FitSampler>) -> Self {
        self.fit_sampler = sampler;
        self
    }

    /// Score every roster profile and return the top matches.
    ///
    /// The requested skills are caller-supplied strings and are not checked
    /// against the keyword table. The sort is stable and descending on
    /// compatibility, so ties keep roster order.
    pub fn find_matches(
        &self,
        requested_skills: &[String],
        roster: &[UserProfile],
    ) -> Vec<ScoredMatch> {
        let mut matches: Vec<ScoredMatch> = roster
            .iter()
            .map(|profile| {
                let fit = self.fit_sampler.sample();
                score_profile(profile, requested_skills, fit, &self.weights)
            })
            .collect();

        matches.sort_by(|a, b| {
            b.compatibility_score
                .partial_cmp(&a.compatibility_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        matches.truncate(self.max_results);
        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
