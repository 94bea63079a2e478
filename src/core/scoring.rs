use thiserror::Error;

use crate::models::RankingWeights;

/// Errors raised when a ranking query is rejected
#[derive(Debug, Error, PartialEq)]
pub enum RankingError {
    #[error("at least one skill is required")]
    EmptySkillSet,

    #[error("{name} weight must be within [0, 1], got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("invalid coordinate ({latitude}, {longitude})")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("limit must be at least 1")]
    ZeroLimit,
}

impl RankingWeights {
    /// Create a validated weight pair
    pub fn new(proximity: f64, skills: f64) -> Result<Self, RankingError> {
        let weights = Self { proximity, skills };
        weights.validate()?;
        Ok(weights)
    }

    pub fn validate(&self) -> Result<(), RankingError> {
        check_weight("proximity", self.proximity)?;
        check_weight("skill", self.skills)
    }

    /// Rescale so the pair sums to 1
    ///
    /// Callers must have validated the weights first. A zero pair is returned
    /// unchanged, which scores every listing 0.
    pub fn normalized(&self) -> Self {
        let total = self.proximity + self.skills;
        if total <= 0.0 {
            return *self;
        }

        Self {
            proximity: self.proximity / total,
            skills: self.skills / total,
        }
    }
}

fn check_weight(name: &'static str, value: f64) -> Result<(), RankingError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(RankingError::InvalidWeight { name, value })
    }
}

/// Scale a distance into [0, 1] against the largest distance in the catalog
#[inline]
pub fn normalize_distance(distance_km: f64, max_distance_km: f64) -> f64 {
    if max_distance_km > 0.0 {
        (distance_km / max_distance_km).min(1.0)
    } else {
        0.0
    }
}

/// Blend proximity and skill fit into a single score, lower is better
///
/// Scoring formula:
/// score = (
///     proximity * distance_km / max_distance_km +
///     skills * (1 - skill_ratio)
/// )
///
/// With normalized weights the result lies in [0, 1]. A listing at the
/// user's location that covers every requested skill scores 0.
pub fn calculate_score(
    distance_km: f64,
    max_distance_km: f64,
    skill_ratio: f64,
    weights: &RankingWeights,
) -> f64 {
    let distance_term = normalize_distance(distance_km, max_distance_km);
    let skill_term = 1.0 - skill_ratio.clamp(0.0, 1.0);

    weights.proximity * distance_term + weights.skills * skill_term
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_validation() {
        assert!(RankingWeights::new(0.5, 0.5).is_ok());
        assert!(RankingWeights::new(0.0, 1.0).is_ok());
        assert_eq!(
            RankingWeights::new(1.2, 0.5),
            Err(RankingError::InvalidWeight { name: "proximity", value: 1.2 })
        );
        assert_eq!(
            RankingWeights::new(0.5, -0.1),
            Err(RankingError::InvalidWeight { name: "skill", value: -0.1 })
        );
        assert!(RankingWeights::new(0.0, 0.0).is_ok());
        assert!(RankingWeights::new(f64::NAN, 0.5).is_err());
    }

    #[test]
    fn test_normalized_weights_sum_to_one() {
        let weights = RankingWeights::new(0.3, 0.9).unwrap().normalized();

        assert!((weights.proximity + weights.skills - 1.0).abs() < 1e-12);
        assert!((weights.proximity - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_zero_weights_normalize_to_zero() {
        let weights = RankingWeights::new(0.0, 0.0).unwrap().normalized();

        assert_eq!(weights, RankingWeights { proximity: 0.0, skills: 0.0 });
        assert_eq!(calculate_score(4.0, 10.0, 0.5, &weights), 0.0);
    }

    #[test]
    fn test_normalize_distance() {
        assert_eq!(normalize_distance(5.0, 10.0), 0.5);
        assert_eq!(normalize_distance(10.0, 10.0), 1.0);
        assert_eq!(normalize_distance(3.0, 0.0), 0.0);
    }

    #[test]
    fn test_perfect_candidate_scores_zero() {
        let weights = RankingWeights::new(0.7, 0.3).unwrap().normalized();
        assert_eq!(calculate_score(0.0, 12.0, 1.0, &weights), 0.0);
    }

    #[test]
    fn test_score_blend() {
        let weights = RankingWeights::default().normalized();

        // half the max distance and half the skills
        let score = calculate_score(5.0, 10.0, 0.5, &weights);
        assert!((score - 0.5).abs() < 1e-12);

        // closer listing with the same skill fit scores lower
        let closer = calculate_score(1.0, 10.0, 0.5, &weights);
        assert!(closer < score);
    }

    #[test]
    fn test_proximity_only_ignores_skills() {
        let weights = RankingWeights::new(1.0, 0.0).unwrap().normalized();

        let a = calculate_score(2.0, 10.0, 0.1, &weights);
        let b = calculate_score(2.0, 10.0, 0.9, &weights);
        assert_eq!(a, b);
    }
}
