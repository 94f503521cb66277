//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;

use crate::cache::{CacheOptions, SharedCache};
use crate::error::{CacheError, Result};
use crate::models::{GetResponse, HasResponse, HealthResponse, SetRequest, SetResponse};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache of JSON values
    pub cache: SharedCache<Value>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: SharedCache<Value>) -> Self {
        Self { cache }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured ttl or item limit is zero.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        Self::with_options(config.cache_options())
    }

    pub fn with_options(options: CacheOptions) -> Result<Self> {
        Ok(Self::new(SharedCache::new(options)?))
    }
}

/// Handler for PUT /set
///
/// Stores a JSON value under a key.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    state.cache.set(req.key.clone(), req.value);

    Ok(Json(SetResponse::new(req.key)))
}

/// Handler for GET /get/:key
///
/// Retrieves a live value; absent and expired keys are both 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    let value = state
        .cache
        .get(&key)
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(GetResponse::new(key, value)))
}

/// Handler for GET /has/:key
pub async fn has_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<HasResponse> {
    let present = state.cache.has(&key);
    Json(HasResponse::new(key, present))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
