// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{GeoPoint, Internship, MapBounds, RankingQuery, RankingWeights, ScoredInternship};
pub use requests::RankRequest;
pub use responses::{
    ErrorResponse, HealthResponse, InternshipsResponse, MapDefaultsResponse, RankResponse,
    SkillsResponse,
};
