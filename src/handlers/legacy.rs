//! Legacy unversioned endpoints
//!
//! Kept for backward compatibility: no payload, no image processing, just
//! the bare envelope with the default delay factor. The response shape must
//! not change.

use axum::{extract::State, Json};

use crate::mock::{generate_envelope, MockEnvelope};
use crate::state::AppState;

/// Legacy enrollment endpoint returning only the envelope
#[utoipa::path(
    get,
    path = "/enroll",
    tag = "legacy",
    responses((status = 200, description = "Mock envelope", body = MockEnvelope))
)]
pub async fn enroll(State(state): State<AppState>) -> Json<MockEnvelope> {
    Json(generate_envelope(state.delay.as_ref(), 1.0).await)
}

/// Legacy search endpoint returning only the envelope
#[utoipa::path(
    get,
    path = "/search",
    tag = "legacy",
    responses((status = 200, description = "Mock envelope", body = MockEnvelope))
)]
pub async fn search(State(state): State<AppState>) -> Json<MockEnvelope> {
    Json(generate_envelope(state.delay.as_ref(), 1.0).await)
}

/// Legacy match endpoint returning only the envelope
#[utoipa::path(
    get,
    path = "/match",
    tag = "legacy",
    responses((status = 200, description = "Mock envelope", body = MockEnvelope))
)]
pub async fn match_images(State(state): State<AppState>) -> Json<MockEnvelope> {
    Json(generate_envelope(state.delay.as_ref(), 1.0).await)
}
