//! Service descriptor endpoint
//!
//! Stateless and routed outside the fault-injection layer; the descriptor
//! is fixed regardless of injector state.

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Basic information about the mock server
#[derive(Serialize, ToSchema)]
pub struct InfoResponse {
    /// Service name
    pub service: &'static str,
    /// Server version from Cargo.toml
    pub version: &'static str,
    /// Service status
    pub status: &'static str,
}

/// GET /info - service descriptor
#[utoipa::path(
    get,
    path = "/info",
    tag = "meta",
    responses((status = 200, description = "Service descriptor", body = InfoResponse))
)]
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        service: "mockr",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}
