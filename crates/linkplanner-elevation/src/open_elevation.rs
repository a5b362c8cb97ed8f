//! HTTP client for the Open-Elevation lookup API.
//!
//! Request: `POST {url}` with `{"locations":[{"latitude":..,"longitude":..}]}`.
//! Response: `{"results":[{"latitude":..,"longitude":..,"elevation":..}]}`.

use std::time::Duration;

use async_trait::async_trait;
use linkplanner_core::LatLng;
use serde::{Deserialize, Serialize};

use crate::error::{ElevationError, ElevationResult};
use crate::service::ElevationService;

/// Public Open-Elevation endpoint.
pub const DEFAULT_OPEN_ELEVATION_URL: &str = "https://api.open-elevation.com/api/v1/lookup";

/// Connection settings for [`OpenElevationClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct OpenElevationConfig {
    /// Lookup endpoint.
    pub url: String,
    /// Whole-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for OpenElevationConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_OPEN_ELEVATION_URL.to_string(),
            timeout_ms: 10_000,
        }
    }
}

#[derive(Debug, Serialize)]
struct Location {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Serialize)]
struct LookupRequest {
    locations: Vec<Location>,
}

impl LookupRequest {
    fn new(points: &[LatLng]) -> Self {
        Self {
            locations: points
                .iter()
                .map(|p| Location {
                    latitude: p.lat,
                    longitude: p.lng,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LookupResult {
    elevation: f64,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Option<Vec<LookupResult>>,
}

/// Parses a lookup response body into elevations, checking the count.
fn parse_response(body: &str, expected: usize) -> ElevationResult<Vec<f64>> {
    let response: LookupResponse =
        serde_json::from_str(body).map_err(|e| ElevationError::MalformedResponse {
            reason: e.to_string(),
        })?;

    let results = response
        .results
        .ok_or_else(|| ElevationError::MalformedResponse {
            reason: "missing results".to_string(),
        })?;

    if results.len() != expected {
        return Err(ElevationError::LengthMismatch {
            expected,
            actual: results.len(),
        });
    }

    Ok(results.into_iter().map(|r| r.elevation).collect())
}

/// Elevation service backed by an Open-Elevation compatible HTTP API.
#[derive(Debug, Clone)]
pub struct OpenElevationClient {
    client: reqwest::Client,
    config: OpenElevationConfig,
}

impl OpenElevationClient {
    /// Builds a client with the given endpoint and timeout.
    pub fn new(config: OpenElevationConfig) -> ElevationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| ElevationError::Transport {
                reason: e.to_string(),
            })?;
        Ok(Self { client, config })
    }

    /// The configured endpoint.
    pub fn url(&self) -> &str {
        &self.config.url
    }

    fn map_reqwest_error(&self, err: reqwest::Error) -> ElevationError {
        if err.is_timeout() {
            ElevationError::Timeout {
                timeout_ms: self.config.timeout_ms,
            }
        } else {
            ElevationError::Transport {
                reason: err.to_string(),
            }
        }
    }
}

#[async_trait]
impl ElevationService for OpenElevationClient {
    async fn lookup(&self, points: &[LatLng]) -> ElevationResult<Vec<f64>> {
        tracing::debug!(
            "Requesting {} elevations from {}",
            points.len(),
            self.config.url
        );

        let response = self
            .client
            .post(&self.config.url)
            .json(&LookupRequest::new(points))
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ElevationError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;
        parse_response(&body, points.len())
    }

    fn name(&self) -> &str {
        "open-elevation"
    }
}
