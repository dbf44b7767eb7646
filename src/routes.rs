//! Router configuration module
//!
//! Configures all routes, middleware layers, and creates the application
//! router. The fault-injection stage is layered over the mock-producing
//! routes only; `/info` and the OpenAPI document bypass it.

use std::{sync::Arc, time::Duration};

use axum::{
    http::{header, Method, StatusCode},
    middleware,
    routing::{get, post},
    Json, Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::Config;
use crate::delay::NoDelay;
use crate::fault;
use crate::handlers::{binary, form, info, json, legacy};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the application router with default config and no simulated delay
/// (for testing)
pub fn create_router() -> Router {
    let config = Config::default();
    let state = AppState::with_delay(&config, Arc::new(NoDelay));
    create_router_with_state(&config, state)
}

/// Create the application router with custom configuration and wall-clock
/// delays
pub fn create_router_with_config(config: &Config) -> Router {
    let state = AppState::new(config);
    create_router_with_state(config, state)
}

/// Create the application router with explicit state (lets tests inject a
/// delay provider or fault configuration)
pub fn create_router_with_state(config: &Config, state: AppState) -> Router {
    // Configure CORS based on allowed_origins
    let cors = match &config.allowed_origins {
        Some(origins) if !origins.is_empty() => {
            let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            tracing::info!("CORS: Restricting to {} origin(s)", origins.len());
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        }
        _ => {
            tracing::warn!("CORS: Allowing all origins (dev mode)");
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    // Request body limit
    let body_limit = RequestBodyLimitLayer::new(config.body_limit_mb * 1024 * 1024);

    // Request timeout
    let timeout = TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        Duration::from_secs(config.timeout_secs),
    );

    // Mock-producing routes, all behind the fault-injection gate
    let mock_routes = Router::new()
        .route("/v1/register", post(json::register))
        .route("/v1/search", post(json::search))
        .route("/v1/match", post(json::match_images))
        .route("/v2/register", post(form::register))
        .route("/v2/search", post(form::search))
        .route("/v2/match", post(form::match_images))
        .route("/v3/register", post(binary::register))
        .route("/v3/search", post(binary::search))
        .route("/v3/match", post(binary::match_images))
        .route("/enroll", get(legacy::enroll))
        .route("/search", get(legacy::search))
        .route("/match", get(legacy::match_images))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            fault::inject_faults,
        ));

    let router = Router::new()
        .merge(mock_routes)
        .route("/info", get(info::info))
        .route("/api-docs/openapi.json", get(openapi_spec))
        .layer(cors)
        .layer(body_limit)
        .layer(timeout)
        .with_state(state);

    // Conditionally apply rate limiting (disabled in tests, enabled in production)
    if config.rate_limit_enabled {
        let governor_conf = GovernorConfigBuilder::default()
            .per_second(config.rate_limit_per_sec)
            .burst_size(config.rate_limit_burst)
            .finish()
            .expect("Failed to build rate limiter config");

        tracing::info!(
            "Rate limiting: {} req/s (burst: {})",
            config.rate_limit_per_sec,
            config.rate_limit_burst
        );

        router
            .layer(GovernorLayer::new(Arc::new(governor_conf)))
            .layer(TraceLayer::new_for_http())
    } else {
        tracing::warn!("Rate limiting: DISABLED");
        router.layer(TraceLayer::new_for_http())
    }
}

/// GET /api-docs/openapi.json - serve the OpenAPI document
async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
