use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use ordered_float::OrderedFloat;

use crate::core::{
    scoring::{calculate_score, RankingError},
    skills::{skill_match, SkillMatch, SkillSet},
};
use crate::models::{GeoPoint, Internship, RankingQuery, RankingWeights, ScoredInternship};

/// Number of listings returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: usize = 5;

/// Result of a ranking pass
#[derive(Debug)]
pub struct RankingResult {
    pub matches: Vec<ScoredInternship>,
    /// Listings sharing at least one skill with the user
    pub eligible: usize,
    pub total_candidates: usize,
}

/// Heap entry, ordered by score, then distance, then company name, then
/// catalog position
#[derive(Debug)]
struct ScoredCandidate<'a> {
    score: OrderedFloat<f64>,
    internship: &'a Internship,
    index: usize,
    distance_km: f64,
    skills: SkillMatch,
}

impl ScoredCandidate<'_> {
    fn key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>, &str, usize) {
        (
            self.score,
            OrderedFloat(self.distance_km),
            self.internship.company.as_str(),
            self.index,
        )
    }
}

impl PartialEq for ScoredCandidate<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for ScoredCandidate<'_> {}

impl Ord for ScoredCandidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for ScoredCandidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ranks internships by proximity and skill fit
///
/// # Pipeline Stages
/// 1. Query validation
/// 2. Distance to every listing, for normalization
/// 3. Skill overlap hard filter
/// 4. Min-heap selection of the lowest scores, one per company
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: RankingWeights,
    limit: usize,
}

impl Ranker {
    pub fn new(weights: RankingWeights, limit: usize) -> Self {
        Self { weights, limit }
    }

    pub fn with_default_weights() -> Self {
        Self::new(RankingWeights::default(), DEFAULT_LIMIT)
    }

    pub fn weights(&self) -> RankingWeights {
        self.weights
    }

    /// Build a query that uses this ranker's default weights and limit
    pub fn query<S: Into<String>>(
        &self,
        origin: GeoPoint,
        skills: impl IntoIterator<Item = S>,
    ) -> RankingQuery {
        RankingQuery::new(origin, skills.into_iter().map(Into::into).collect(), self.weights)
            .with_limit(self.limit)
    }

    /// Rank the given listings for a query
    ///
    /// # Arguments
    /// * `internships` - The full catalog
    /// * `query` - Origin, skills, weights and limit
    ///
    /// # Returns
    /// Up to `query.limit` listings, best first. Listings with no skill in
    /// common with the query are never returned.
    pub fn rank(
        &self,
        internships: &[Internship],
        query: &RankingQuery,
    ) -> Result<RankingResult, RankingError> {
        if !query.origin.is_valid() {
            return Err(RankingError::InvalidCoordinate {
                latitude: query.origin.latitude,
                longitude: query.origin.longitude,
            });
        }
        if query.limit == 0 {
            return Err(RankingError::ZeroLimit);
        }
        query.weights.validate()?;

        let user_skills = SkillSet::new(&query.skills);
        if user_skills.is_empty() {
            return Err(RankingError::EmptySkillSet);
        }

        let weights = query.weights.normalized();

        let distances: Vec<f64> = internships
            .iter()
            .map(|i| query.origin.distance_to(&i.location()))
            .collect();
        let max_distance_km = distances.iter().copied().fold(0.0, f64::max);

        let mut open_set = BinaryHeap::with_capacity(internships.len());

        for (index, (internship, &distance_km)) in internships.iter().zip(&distances).enumerate() {
            let skills = skill_match(&user_skills, &SkillSet::new(&internship.skills));

            if !skills.has_overlap() {
                tracing::trace!("Skipping {}: no shared skills", internship.company);
                continue;
            }

            let score = calculate_score(distance_km, max_distance_km, skills.ratio, &weights);

            open_set.push(Reverse(ScoredCandidate {
                score: OrderedFloat(score),
                internship,
                index,
                distance_km,
                skills,
            }));
        }

        let eligible = open_set.len();
        let mut closed_set: HashSet<&str> = HashSet::new();
        let mut matches = Vec::with_capacity(query.limit.min(eligible));

        while matches.len() < query.limit {
            let Some(Reverse(candidate)) = open_set.pop() else {
                break;
            };
            let internship = candidate.internship;

            if !closed_set.insert(internship.company.as_str()) {
                continue;
            }

            matches.push(ScoredInternship {
                company: internship.company.clone(),
                title: internship.title.clone(),
                label: internship.label(),
                latitude: internship.latitude,
                longitude: internship.longitude,
                distance_km: candidate.distance_km,
                skill_match: candidate.skills.ratio,
                matched_skills: candidate.skills.matched,
                score: candidate.score.into_inner(),
            });
        }

        tracing::debug!(
            "Ranked {} listings: {} eligible, {} returned (max distance {:.2} km)",
            internships.len(),
            eligible,
            matches.len(),
            max_distance_km
        );

        Ok(RankingResult {
            matches,
            eligible,
            total_candidates: internships.len(),
        })
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
