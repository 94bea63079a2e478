use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

use crate::catalog::{Catalog, CatalogError};
use crate::config::{MapSettings, Settings};
use crate::core::{Ranker, RankingError};
use crate::models::{
    ErrorResponse, HealthResponse, InternshipsResponse, MapDefaultsResponse, RankRequest,
    RankResponse, RankingWeights, SkillsResponse,
};
use crate::routes::errors::bad_request;
use crate::services::{CacheKey, RankingCache};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub ranker: Ranker,
    pub cache: RankingCache,
    pub map: MapSettings,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Errors that prevent the application state from being built
#[derive(Debug, Error)]
pub enum StateError {
    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid default weights: {0}")]
    Weights(#[from] RankingError),

    #[error("Default limit {default_limit} must be between 1 and max limit {max_limit}")]
    Limits { default_limit: usize, max_limit: usize },
}

impl AppState {
    /// Build state from settings, loading the catalog file if one is configured
    pub fn from_settings(settings: &Settings) -> Result<Self, StateError> {
        let catalog = match &settings.catalog.path {
            Some(path) => Catalog::from_json_file(path)?,
            None => Catalog::builtin(),
        };

        let cache = if settings.cache.enabled {
            RankingCache::new(settings.cache.capacity, settings.cache.ttl_secs)
        } else {
            RankingCache::disabled()
        };

        Self::new(catalog, settings, cache)
    }

    /// Build state around an already loaded catalog
    pub fn new(catalog: Catalog, settings: &Settings, cache: RankingCache) -> Result<Self, StateError> {
        let weights = RankingWeights::from(&settings.ranking.weights);
        weights.validate()?;

        let default_limit = settings.ranking.default_limit;
        let max_limit = settings.ranking.max_limit;
        if default_limit == 0 || default_limit > max_limit {
            return Err(StateError::Limits { default_limit, max_limit });
        }

        Ok(Self {
            catalog: Arc::new(catalog),
            ranker: Ranker::new(weights, default_limit),
            cache,
            map: settings.map.clone(),
            default_limit,
            max_limit,
        })
    }
}

/// Configure all internship-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/internships", web::get().to(list_internships))
        .route("/internships/rank", web::post().to(rank_internships))
        .route("/skills", web::get().to(list_skills))
        .route("/map/defaults", web::get().to(map_defaults));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        internships: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/v1/internships
async fn list_internships(state: web::Data<AppState>) -> impl Responder {
    let internships = state.catalog.internships().to_vec();

    HttpResponse::Ok().json(InternshipsResponse {
        count: internships.len(),
        internships,
    })
}

/// GET /api/v1/skills
async fn list_skills(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(SkillsResponse {
        skills: state.catalog.skills(),
    })
}

/// GET /api/v1/map/defaults
async fn map_defaults(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(MapDefaultsResponse {
        center: state.map.center(),
        zoom: state.map.zoom,
        bounds: state.catalog.bounds(),
    })
}

/// Rank internships endpoint
///
/// POST /api/v1/internships/rank
///
/// Request body:
/// ```json
/// {
///   "latitude": 25.2048,
///   "longitude": 55.2708,
///   "skills": ["python", "ai"],
///   "proximityWeight": 0.5,
///   "skillWeight": 0.5,
///   "limit": 5
/// }
/// ```
async fn rank_internships(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return bad_request("validation_failed", errors.to_string());
    }

    let query = req.to_query(state.ranker.weights(), state.default_limit, state.max_limit);

    tracing::info!(
        "Ranking for ({:.5}, {:.5}) with {} skills, limit {}",
        query.origin.latitude,
        query.origin.longitude,
        query.skills.len(),
        query.limit
    );

    let cache_key = CacheKey::ranking(&query);
    if let Some(cached) = state.cache.get(&cache_key).await {
        return HttpResponse::Ok().json(cached.as_ref());
    }

    let result = match state.ranker.rank(state.catalog.internships(), &query) {
        Ok(result) => result,
        Err(e) => {
            tracing::info!("Rejected rank request: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse::from(&e));
        }
    };

    let response = Arc::new(RankResponse {
        matches: result.matches,
        eligible_count: result.eligible,
        total_candidates: result.total_candidates,
    });

    tracing::info!(
        "Returning {} internships ({} eligible of {})",
        response.matches.len(),
        response.eligible_count,
        response.total_candidates
    );

    state.cache.insert(cache_key, response.clone()).await;

    HttpResponse::Ok().json(response.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_from_default_settings() {
        let state = AppState::from_settings(&Settings::default()).unwrap();

        assert_eq!(state.catalog.len(), 26);
        assert_eq!(state.default_limit, 5);
        assert!(state.cache.is_enabled());
    }

    #[test]
    fn test_state_rejects_bad_weights() {
        let mut settings = Settings::default();
        settings.ranking.weights.proximity = 1.5;

        assert!(matches!(
            AppState::from_settings(&settings),
            Err(StateError::Weights(RankingError::InvalidWeight { name: "proximity", .. }))
        ));
    }

    #[test]
    fn test_state_rejects_bad_limits() {
        let mut settings = Settings::default();
        settings.ranking.default_limit = 30;

        assert!(matches!(
            AppState::from_settings(&settings),
            Err(StateError::Limits { .. })
        ));
    }
}
