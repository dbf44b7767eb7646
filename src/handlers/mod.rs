//! HTTP request handlers
//!
//! This module contains all the request handlers for the mock endpoints,
//! grouped by transport: `json` (v1, base64 JSON), `form` (v2, multipart),
//! `binary` (v3, raw body), plus the legacy trio and the service descriptor.

pub mod binary;
pub mod form;
pub mod info;
pub mod json;
pub mod legacy;

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::extract::ImagePayload;
use crate::mock::{self, EndpointKind};
use crate::state::AppState;

pub use info::{info, InfoResponse};

/// Shared tail of every single-image pipeline: synthesize the envelope with
/// a size-proportional delay, then select the endpoint result by category.
pub(crate) async fn single_image_response(
    state: &AppState,
    kind: EndpointKind,
    image: ImagePayload,
) -> Response {
    let delay_factor = image.size as f64 / mock::SINGLE_IMAGE_DELAY_DIVISOR;
    let envelope = mock::generate_envelope(state.delay.as_ref(), delay_factor).await;

    match kind {
        EndpointKind::Register => Json(mock::register_result(envelope, image.size)).into_response(),
        EndpointKind::Search => Json(mock::search_result(envelope, image.size)).into_response(),
    }
}

/// Shared tail of every dual-image pipeline.
pub(crate) async fn dual_image_response(
    state: &AppState,
    first: ImagePayload,
    second: ImagePayload,
) -> Response {
    let total_size = first.size + second.size;
    let delay_factor = total_size as f64 / mock::DUAL_IMAGE_DELAY_DIVISOR;
    let envelope = mock::generate_envelope(state.delay.as_ref(), delay_factor).await;

    Json(mock::match_result(envelope, total_size)).into_response()
}
