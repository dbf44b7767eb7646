//! Synthetic response generation
//!
//! Builds the common response envelope (uuid, timestamp, processing time)
//! and the endpoint-specific mock fields. Every field is freshly randomized
//! per request; nothing is stored or reused.

use std::time::{Duration, Instant};

use chrono::{SecondsFormat, Utc};
use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::delay::DelayProvider;

/// Delay factor divisor for single-image operations
pub const SINGLE_IMAGE_DELAY_DIVISOR: f64 = 10_000.0;
/// Delay factor divisor for dual-image operations
pub const DUAL_IMAGE_DELAY_DIVISOR: f64 = 15_000.0;

const PROCESSING_LEVELS: [&str; 3] = ["basic", "enhanced", "deep"];
const ALGORITHMS: [&str; 5] = ["eigenfaces", "fisherfaces", "LBPH", "CNN", "SIFT"];

/// Semantic category of a single-image route, passed explicitly so the
/// synthesizer never inspects request URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    Register,
    Search,
}

/// Common fields shared by every mock response
#[derive(Debug, Serialize, ToSchema)]
pub struct MockEnvelope {
    /// Freshly generated v4 UUID
    pub uuid: String,
    /// Current UTC instant, ISO-8601
    pub timestamp: String,
    /// Elapsed wall-clock seconds, 6 decimal places
    pub process_time: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Registration {
    pub status: &'static str,
    pub id: String,
    pub quality_score: f64,
    pub features_extracted: u32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    #[serde(flatten)]
    pub envelope: MockEnvelope,
    pub payload_size: usize,
    pub registration: Registration,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchHit {
    pub id: String,
    pub score: f64,
    pub rank: usize,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    #[serde(flatten)]
    pub envelope: MockEnvelope,
    pub payload_size: usize,
    pub search_results: Vec<SearchHit>,
    pub total_matches: usize,
    pub search_time_ms: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MatchDetails {
    pub confidence: f64,
    pub match_points: u32,
    pub processing_level: &'static str,
    pub algorithm: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MatchResponse {
    #[serde(flatten)]
    pub envelope: MockEnvelope,
    /// Combined size of both images in bytes
    pub payload_size: usize,
    pub similarity_score: f64,
    pub match_details: MatchDetails,
}

/// Generate the common envelope, suspending for the simulated delay
///
/// The delay is `uniform(0.5, 1.5) * delay_factor` seconds, so latency is
/// bounded by construction at `1.5 * delay_factor`. `process_time` reports
/// the actual elapsed wall-clock time.
pub async fn generate_envelope(delay: &dyn DelayProvider, delay_factor: f64) -> MockEnvelope {
    let start = Instant::now();
    let base_delay: f64 = rand::thread_rng().gen_range(0.5..=1.5);
    delay
        .sleep(Duration::from_secs_f64(base_delay * delay_factor))
        .await;

    MockEnvelope {
        uuid: Uuid::new_v4().to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
        process_time: format!("{:.6}", start.elapsed().as_secs_f64()),
    }
}

/// Build a register result around an envelope
pub fn register_result(envelope: MockEnvelope, payload_size: usize) -> RegisterResponse {
    let mut rng = rand::thread_rng();
    RegisterResponse {
        envelope,
        payload_size,
        registration: Registration {
            status: "success",
            id: Uuid::new_v4().to_string(),
            quality_score: round_to(rng.gen_range(0.6..=1.0), 2),
            features_extracted: rng.gen_range(80..=150),
        },
    }
}

/// Build a search result around an envelope
pub fn search_result(envelope: MockEnvelope, payload_size: usize) -> SearchResponse {
    let mut rng = rand::thread_rng();
    let total_matches = rng.gen_range(1..=5);
    let search_results = (1..=total_matches)
        .map(|rank| SearchHit {
            id: Uuid::new_v4().to_string(),
            score: round_to(rng.gen_range(0.5..=0.99), 4),
            rank,
        })
        .collect();

    SearchResponse {
        envelope,
        payload_size,
        search_results,
        total_matches,
        search_time_ms: round_to(rng.gen_range(50.0..=500.0), 2),
    }
}

/// Build a match result around an envelope
pub fn match_result(envelope: MockEnvelope, payload_size: usize) -> MatchResponse {
    let mut rng = rand::thread_rng();
    MatchResponse {
        envelope,
        payload_size,
        similarity_score: round_to(rng.gen_range(0.0..=1.0), 4),
        match_details: MatchDetails {
            confidence: round_to(rng.gen_range(0.7..=0.99), 4),
            match_points: rng.gen_range(10..=100),
            processing_level: PROCESSING_LEVELS[rng.gen_range(0..PROCESSING_LEVELS.len())],
            algorithm: ALGORITHMS[rng.gen_range(0..ALGORITHMS.len())],
        },
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::NoDelay;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Captures requested sleep durations instead of waiting
    #[derive(Default)]
    struct RecordingDelay {
        requested: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl DelayProvider for RecordingDelay {
        async fn sleep(&self, duration: Duration) {
            self.requested.lock().unwrap().push(duration);
        }
    }

    #[tokio::test]
    async fn test_delay_drawn_from_half_to_threehalves_of_factor() {
        let recorder = RecordingDelay::default();
        for _ in 0..200 {
            generate_envelope(&recorder, 2.0).await;
        }
        for duration in recorder.requested.lock().unwrap().iter() {
            let secs = duration.as_secs_f64();
            assert!((1.0..=3.0).contains(&secs), "delay {secs} out of range");
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123456, 2), 0.12);
        assert_eq!(round_to(0.98765, 4), 0.9877);
        assert_eq!(round_to(1.0, 2), 1.0);
    }

    #[tokio::test]
    async fn test_envelope_fields() {
        let envelope = generate_envelope(&NoDelay, 0.0).await;
        assert!(Uuid::parse_str(&envelope.uuid).is_ok());
        assert!(envelope.timestamp.contains('T'));
        let elapsed: f64 = envelope.process_time.parse().unwrap();
        assert!(elapsed >= 0.0);
        // Six decimal places
        assert_eq!(envelope.process_time.split('.').nth(1).map(str::len), Some(6));
    }

    #[tokio::test]
    async fn test_envelopes_are_never_identical() {
        let a = generate_envelope(&NoDelay, 0.0).await;
        let b = generate_envelope(&NoDelay, 0.0).await;
        assert_ne!(a.uuid, b.uuid);
    }

    #[test]
    fn test_register_result_ranges() {
        for _ in 0..100 {
            let response = register_result(fixed_envelope(), 1234);
            assert_eq!(response.payload_size, 1234);
            assert_eq!(response.registration.status, "success");
            assert!((0.6..=1.0).contains(&response.registration.quality_score));
            assert!((80..=150).contains(&response.registration.features_extracted));
        }
    }

    #[test]
    fn test_search_result_ranks_are_ordered() {
        for _ in 0..100 {
            let response = search_result(fixed_envelope(), 10);
            assert_eq!(response.search_results.len(), response.total_matches);
            for (i, hit) in response.search_results.iter().enumerate() {
                assert_eq!(hit.rank, i + 1);
                assert!((0.5..=0.99).contains(&hit.score));
            }
            assert!((50.0..=500.0).contains(&response.search_time_ms));
        }
    }

    #[test]
    fn test_match_result_ranges() {
        for _ in 0..100 {
            let response = match_result(fixed_envelope(), 42);
            assert!((0.0..=1.0).contains(&response.similarity_score));
            assert!((0.7..=0.99).contains(&response.match_details.confidence));
            assert!((10..=100).contains(&response.match_details.match_points));
            assert!(PROCESSING_LEVELS.contains(&response.match_details.processing_level));
            assert!(ALGORITHMS.contains(&response.match_details.algorithm));
        }
    }

    fn fixed_envelope() -> MockEnvelope {
        MockEnvelope {
            uuid: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
            process_time: "0.000001".to_string(),
        }
    }
}
