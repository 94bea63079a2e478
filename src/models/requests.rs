use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{GeoPoint, RankingQuery, RankingWeights};

/// Request to rank internships around a point
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    #[serde(alias = "lng", alias = "lon")]
    pub longitude: f64,
    #[validate(length(min = 1))]
    pub skills: Vec<String>,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(alias = "proximity_weight", rename = "proximityWeight")]
    pub proximity_weight: Option<f64>,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(alias = "skill_weight", rename = "skillWeight")]
    pub skill_weight: Option<f64>,
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
}

impl RankRequest {
    /// Build a ranking query, filling unset fields from the given defaults
    ///
    /// `max_limit` caps the requested limit.
    pub fn to_query(
        &self,
        defaults: RankingWeights,
        default_limit: usize,
        max_limit: usize,
    ) -> RankingQuery {
        let weights = RankingWeights {
            proximity: self.proximity_weight.unwrap_or(defaults.proximity),
            skills: self.skill_weight.unwrap_or(defaults.skills),
        };
        let limit = self
            .limit
            .map(usize::from)
            .unwrap_or(default_limit)
            .min(max_limit);

        RankingQuery::new(
            GeoPoint::new(self.latitude, self.longitude),
            self.skills.clone(),
            weights,
        )
        .with_limit(limit)
    }
}
