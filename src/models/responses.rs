use serde::{Deserialize, Serialize};
use crate::models::domain::{GeoPoint, Internship, MapBounds, ScoredInternship};

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankResponse {
    pub matches: Vec<ScoredInternship>,
    #[serde(rename = "eligibleCount")]
    pub eligible_count: usize,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Full catalog listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InternshipsResponse {
    pub internships: Vec<Internship>,
    pub count: usize,
}

/// Skills available for selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

/// Initial map view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapDefaultsResponse {
    pub center: GeoPoint,
    pub zoom: u8,
    pub bounds: Option<MapBounds>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub internships: usize,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
