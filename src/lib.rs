//! mockr - mock biometric enrollment/search/match server
//!
//! This library exposes the server components for use in integration tests.
//! The main binary uses these same components.

pub mod config;
pub mod delay;
pub mod error;
pub mod extract;
pub mod fault;
pub mod handlers;
pub mod mock;
pub mod openapi;
pub mod routes;
pub mod state;

pub use config::Config;
pub use delay::{DelayProvider, NoDelay, TokioDelay};
pub use error::ApiError;
pub use extract::ImagePayload;
pub use fault::{Fault, FaultInjector};
pub use mock::{EndpointKind, MockEnvelope};
pub use openapi::ApiDoc;
pub use routes::{create_router, create_router_with_config, create_router_with_state};
pub use state::AppState;
