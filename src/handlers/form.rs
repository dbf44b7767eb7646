//! v2 handlers: multipart form uploads
//!
//! Single-image routes take a file field named `image`; the match route
//! takes `image-1` and `image-2`.

use axum::{
    extract::{Multipart, State},
    response::Response,
};

use crate::error::ApiError;
use crate::extract::{form_image, form_image_pair};
use crate::handlers::{dual_image_response, single_image_response};
use crate::mock::EndpointKind;
use crate::state::AppState;

/// Mock register endpoint over multipart form data
#[utoipa::path(
    post,
    path = "/v2/register",
    tag = "v2",
    request_body(content_type = "multipart/form-data", description = "File field `image`"),
    responses(
        (status = 200, description = "Mock registration result", body = crate::mock::RegisterResponse),
        (status = 400, description = "Missing image field or invalid image"),
        (status = 500, description = "Form read failure or injected fault")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let image = form_image(&mut multipart).await?;
    Ok(single_image_response(&state, EndpointKind::Register, image).await)
}

/// Mock search endpoint over multipart form data
#[utoipa::path(
    post,
    path = "/v2/search",
    tag = "v2",
    request_body(content_type = "multipart/form-data", description = "File field `image`"),
    responses(
        (status = 200, description = "Mock search result", body = crate::mock::SearchResponse),
        (status = 400, description = "Missing image field or invalid image"),
        (status = 500, description = "Form read failure or injected fault")
    )
)]
pub async fn search(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let image = form_image(&mut multipart).await?;
    Ok(single_image_response(&state, EndpointKind::Search, image).await)
}

/// Mock match endpoint over multipart form data (`image-1`, `image-2`)
#[utoipa::path(
    post,
    path = "/v2/match",
    tag = "v2",
    request_body(content_type = "multipart/form-data", description = "File fields `image-1` and `image-2`"),
    responses(
        (status = 200, description = "Mock match result", body = crate::mock::MatchResponse),
        (status = 400, description = "Missing image field or invalid image"),
        (status = 500, description = "Form read failure or injected fault")
    )
)]
pub async fn match_images(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let (first, second) = form_image_pair(&mut multipart).await?;
    Ok(dual_image_response(&state, first, second).await)
}
