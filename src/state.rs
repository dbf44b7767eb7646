//! Application state module
//!
//! Defines shared state accessible across all request handlers. Everything
//! else in the pipeline is request-scoped; the state only carries the delay
//! provider and the fault gate, both of which are read-only.

use std::sync::Arc;

use crate::config::Config;
use crate::delay::{DelayProvider, TokioDelay};
use crate::fault::FaultInjector;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Source of the simulated processing delay
    pub delay: Arc<dyn DelayProvider>,
    /// Probabilistic fault gate for mock-producing routes
    pub fault: FaultInjector,
}

impl AppState {
    /// Build state with wall-clock delays (production)
    pub fn new(config: &Config) -> Self {
        Self::with_delay(config, Arc::new(TokioDelay))
    }

    /// Build state with an injected delay provider (tests)
    pub fn with_delay(config: &Config, delay: Arc<dyn DelayProvider>) -> Self {
        Self {
            delay,
            fault: FaultInjector::new(config.fault_injection_enabled),
        }
    }
}
