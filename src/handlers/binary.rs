//! v3 handlers: raw binary bodies
//!
//! Single-image routes take the whole request body as the image; the match
//! route takes two images joined by a single comma byte.

use axum::{body::Bytes, extract::State, response::Response};

use crate::error::ApiError;
use crate::extract::{binary_image, binary_image_pair};
use crate::handlers::{dual_image_response, single_image_response};
use crate::mock::EndpointKind;
use crate::state::AppState;

/// Mock register endpoint over a raw binary body
#[utoipa::path(
    post,
    path = "/v3/register",
    tag = "v3",
    request_body(content_type = "application/octet-stream", description = "Raw image bytes"),
    responses(
        (status = 200, description = "Mock registration result", body = crate::mock::RegisterResponse),
        (status = 400, description = "Empty body or invalid image"),
        (status = 500, description = "Injected fault")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let image = binary_image(&body)?;
    Ok(single_image_response(&state, EndpointKind::Register, image).await)
}

/// Mock search endpoint over a raw binary body
#[utoipa::path(
    post,
    path = "/v3/search",
    tag = "v3",
    request_body(content_type = "application/octet-stream", description = "Raw image bytes"),
    responses(
        (status = 200, description = "Mock search result", body = crate::mock::SearchResponse),
        (status = 400, description = "Empty body or invalid image"),
        (status = 500, description = "Injected fault")
    )
)]
pub async fn search(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let image = binary_image(&body)?;
    Ok(single_image_response(&state, EndpointKind::Search, image).await)
}

/// Mock match endpoint over a raw binary body, two images comma-joined
#[utoipa::path(
    post,
    path = "/v3/match",
    tag = "v3",
    request_body(content_type = "application/octet-stream", description = "Two raw images joined by a single comma byte"),
    responses(
        (status = 200, description = "Mock match result", body = crate::mock::MatchResponse),
        (status = 400, description = "Empty body, missing separator, or invalid image"),
        (status = 500, description = "Injected fault")
    )
)]
pub async fn match_images(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let (first, second) = binary_image_pair(&body)?;
    Ok(dual_image_response(&state, first, second).await)
}
