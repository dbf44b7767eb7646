//! Simulated processing latency
//!
//! The synthesizer suspends for a payload-proportional duration to model
//! realistic throughput degradation. The sleep itself goes through an
//! injectable provider so tests can substitute a no-op implementation
//! without touching the response logic.

use std::time::Duration;

use async_trait::async_trait;

/// Source of the simulated processing delay
#[async_trait]
pub trait DelayProvider: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Wall-clock delay backed by the tokio timer
#[derive(Debug, Default)]
pub struct TokioDelay;

#[async_trait]
impl DelayProvider for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Zero-delay provider for tests
#[derive(Debug, Default)]
pub struct NoDelay;

#[async_trait]
impl DelayProvider for NoDelay {
    async fn sleep(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_no_delay_returns_immediately() {
        let start = Instant::now();
        NoDelay.sleep(Duration::from_secs(60)).await;
        assert!(start.elapsed() < Duration::from_millis(100));
    }
}
