//! v1 handlers: base64 images in JSON bodies
//!
//! Bodies are read as raw bytes and parsed manually so malformed JSON maps
//! to the same 500 "Invalid JSON" shape the clients already expect, rather
//! than a framework rejection.

use axum::{body::Bytes, extract::State, response::Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ApiError;
use crate::extract::decode_base64_image;
use crate::handlers::{dual_image_response, single_image_response};
use crate::mock::EndpointKind;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
struct ImageBody {
    #[serde(default)]
    image: String,
}

#[derive(Debug, Default, Deserialize)]
struct ImagePairBody {
    #[serde(default, rename = "image-1")]
    image_1: String,
    #[serde(default, rename = "image-2")]
    image_2: String,
}

fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::internal(format!("Invalid JSON: {e}")))
}

/// Mock register endpoint over base64 JSON
#[utoipa::path(
    post,
    path = "/v1/register",
    tag = "v1",
    request_body(content_type = "application/json", description = "JSON object with base64 field `image`"),
    responses(
        (status = 200, description = "Mock registration result", body = crate::mock::RegisterResponse),
        (status = 400, description = "Missing or invalid image data"),
        (status = 500, description = "Malformed base64 or JSON, or injected fault")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: ImageBody = parse_json_body(&body)?;
    let image = decode_base64_image(&request.image)?;
    Ok(single_image_response(&state, EndpointKind::Register, image).await)
}

/// Mock search endpoint over base64 JSON
#[utoipa::path(
    post,
    path = "/v1/search",
    tag = "v1",
    request_body(content_type = "application/json", description = "JSON object with base64 field `image`"),
    responses(
        (status = 200, description = "Mock search result", body = crate::mock::SearchResponse),
        (status = 400, description = "Missing or invalid image data"),
        (status = 500, description = "Malformed base64 or JSON, or injected fault")
    )
)]
pub async fn search(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let request: ImageBody = parse_json_body(&body)?;
    let image = decode_base64_image(&request.image)?;
    Ok(single_image_response(&state, EndpointKind::Search, image).await)
}

/// Mock match endpoint over base64 JSON (fields `image-1` and `image-2`)
#[utoipa::path(
    post,
    path = "/v1/match",
    tag = "v1",
    request_body(content_type = "application/json", description = "JSON object with base64 fields `image-1` and `image-2`"),
    responses(
        (status = 200, description = "Mock match result", body = crate::mock::MatchResponse),
        (status = 400, description = "Missing or invalid image data"),
        (status = 500, description = "Malformed base64 or JSON, or injected fault")
    )
)]
pub async fn match_images(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: ImagePairBody = parse_json_body(&body)?;
    let first = decode_base64_image(&request.image_1)?;
    let second = decode_base64_image(&request.image_2)?;
    Ok(dual_image_response(&state, first, second).await)
}
