use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Great-circle distance to another point in kilometers
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        crate::core::distance::haversine_distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }

    /// True when both components are finite and inside the WGS84 ranges
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(p: GeoPoint) -> Self {
        // geo uses (x, y) = (lon, lat)
        geo::Point::new(p.longitude, p.latitude)
    }
}

/// Internship listing
///
/// Listings are loaded once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    #[serde(alias = "Company Name")]
    pub company: String,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Internship {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    /// Display label, e.g. "Data Science Intern at Microsoft"
    pub fn label(&self) -> String {
        format!("{} at {}", self.title, self.company)
    }
}

/// Internship with computed ranking data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredInternship {
    pub company: String,
    pub title: String,
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    #[serde(rename = "skillMatch")]
    pub skill_match: f64,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    /// Blended score, lower is better
    pub score: f64,
}

/// Rectangle covering a set of points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapBounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

/// Proximity and skill weights
///
/// Use [`RankingWeights::new`] to get a validated pair. The fields are public
/// for configuration plumbing, so [`RankingWeights::validate`] is re-run by the
/// ranker before any scoring happens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankingWeights {
    pub proximity: f64,
    pub skills: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            proximity: 0.5,
            skills: 0.5,
        }
    }
}

/// A single ranking request against the catalog
#[derive(Debug, Clone)]
pub struct RankingQuery {
    pub origin: GeoPoint,
    pub skills: Vec<String>,
    pub weights: RankingWeights,
    pub limit: usize,
}

impl RankingQuery {
    pub fn new(origin: GeoPoint, skills: Vec<String>, weights: RankingWeights) -> Self {
        Self {
            origin,
            skills,
            weights,
            limit: crate::core::ranker::DEFAULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_format() {
        let internship = Internship {
            company: "Microsoft".to_string(),
            title: "Data Science Intern".to_string(),
            latitude: 25.234511,
            longitude: 55.324905,
            skills: vec![],
        };

        assert_eq!(internship.label(), "Data Science Intern at Microsoft");
    }

    #[test]
    fn test_point_validity() {
        assert!(GeoPoint::new(25.1325, 55.4201).is_valid());
        assert!(GeoPoint::new(-90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -180.5).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }

    #[test]
    fn test_legacy_company_field_name() {
        let json = r#"{
            "Company Name": "ESRI",
            "title": "Software Engineering Intern",
            "latitude": 25.3297,
            "longitude": 55.3913,
            "skills": ["GIS", "Python"]
        }"#;

        let internship: Internship = serde_json::from_str(json).unwrap();
        assert_eq!(internship.company, "ESRI");
        assert_eq!(internship.skills.len(), 2);
    }
}
