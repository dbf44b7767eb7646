//! Random fault injection
//!
//! Simulates baseline service unreliability: a fixed fraction of requests to
//! mock-producing endpoints short-circuit into error responses before any
//! image processing runs. Implemented as a middleware stage that runs first
//! in the chain, so injected faults are independent of payload validity.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use rand::Rng;

use crate::state::AppState;

/// Outcome of a fault draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Simulated server-side failure (500, "response failed.")
    ResponseFailed,
    /// Simulated client-side rejection (400, "request failed.")
    RequestFailed,
}

/// Probabilistic fault gate consulted once per request
#[derive(Debug, Clone)]
pub struct FaultInjector {
    enabled: bool,
}

impl FaultInjector {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Draw a uniform value in [0, 100): < 5 fails the response, > 95 fails
    /// the request, everything in between passes through.
    pub fn draw(&self) -> Option<Fault> {
        if !self.enabled {
            return None;
        }
        let seed: f64 = rand::thread_rng().gen_range(0.0..100.0);
        if seed < 5.0 {
            Some(Fault::ResponseFailed)
        } else if seed > 95.0 {
            Some(Fault::RequestFailed)
        } else {
            None
        }
    }
}

/// Middleware wrapping every mock-producing route
///
/// Runs before extraction and may short-circuit the rest of the chain.
/// `/info` and the OpenAPI document are routed outside this layer.
pub async fn inject_faults(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    match state.fault.draw() {
        Some(Fault::ResponseFailed) => {
            tracing::debug!(path = %request.uri().path(), "Injected response fault");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "description": "response failed." })),
            )
                .into_response()
        }
        Some(Fault::RequestFailed) => {
            tracing::debug!(path = %request.uri().path(), "Injected request fault");
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "description": "request failed." })),
            )
                .into_response()
        }
        None => next.run(request).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_injector_never_faults() {
        let injector = FaultInjector::new(false);
        for _ in 0..1_000 {
            assert_eq!(injector.draw(), None);
        }
    }

    #[test]
    fn test_fault_rates_near_five_percent_each() {
        let injector = FaultInjector::new(true);
        let draws = 100_000;
        let mut response_faults = 0u32;
        let mut request_faults = 0u32;

        for _ in 0..draws {
            match injector.draw() {
                Some(Fault::ResponseFailed) => response_faults += 1,
                Some(Fault::RequestFailed) => request_faults += 1,
                None => {}
            }
        }

        let response_rate = f64::from(response_faults) / draws as f64;
        let request_rate = f64::from(request_faults) / draws as f64;

        assert!(
            (0.043..0.057).contains(&response_rate),
            "response fault rate {response_rate} out of tolerance"
        );
        assert!(
            (0.043..0.057).contains(&request_rate),
            "request fault rate {request_rate} out of tolerance"
        );
    }
}
