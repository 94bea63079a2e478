//! Intern City - location and skill based internship ranking
//!
//! This library ranks a fixed catalog of internship listings for a user
//! location and skill set. Each listing is scored by a weighted blend of
//! normalized great-circle distance and skill overlap, and the best few are
//! selected with a min-heap.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::catalog::{Catalog, CatalogError};
pub use crate::core::{haversine_distance, Ranker, RankingError, RankingResult};
pub use crate::models::{GeoPoint, Internship, RankRequest, RankResponse, RankingQuery, RankingWeights, ScoredInternship};
