//! The elevation service interface and its deterministic stand-ins.

use async_trait::async_trait;
use linkplanner_core::LatLng;

use crate::error::{ElevationError, ElevationResult};

/// Looks up ground elevation for a sequence of coordinates.
///
/// Implementations return one value per input point, in input order.
#[async_trait]
pub trait ElevationService: Send + Sync {
    /// Elevations in meters for `points`.
    async fn lookup(&self, points: &[LatLng]) -> ElevationResult<Vec<f64>>;

    /// Short name used in log lines.
    fn name(&self) -> &str {
        "elevation"
    }
}

/// Best-effort elevation fetch.
///
/// Returns the service's values when it answers with the right number of
/// them, otherwise a vector of zeros of the same length as `points`. Empty
/// input never reaches the service. There is no retry.
pub async fn fetch_elevations(service: &dyn ElevationService, points: &[LatLng]) -> Vec<f64> {
    if points.is_empty() {
        return Vec::new();
    }

    match service.lookup(points).await {
        Ok(values) if values.len() == points.len() => values,
        Ok(values) => {
            let err = ElevationError::LengthMismatch {
                expected: points.len(),
                actual: values.len(),
            };
            tracing::warn!("{} lookup failed, using fallback zeros: {}", service.name(), err);
            vec![0.0; points.len()]
        }
        Err(err) => {
            tracing::warn!("{} lookup failed, using fallback zeros: {}", service.name(), err);
            vec![0.0; points.len()]
        }
    }
}

/// Answers every lookup with the same elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticElevation {
    meters: f64,
}

impl StaticElevation {
    /// Creates a stub that reports `meters` for every point.
    pub fn new(meters: f64) -> Self {
        Self { meters }
    }
}

#[async_trait]
impl ElevationService for StaticElevation {
    async fn lookup(&self, points: &[LatLng]) -> ElevationResult<Vec<f64>> {
        Ok(vec![self.meters; points.len()])
    }

    fn name(&self) -> &str {
        "static-elevation"
    }
}

/// Fails every lookup. Used when elevation is disabled in settings.
#[derive(Debug, Clone, Default)]
pub struct UnavailableElevation {
    reason: String,
}

impl UnavailableElevation {
    /// Creates a stub that always fails with `reason`.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl ElevationService for UnavailableElevation {
    async fn lookup(&self, _points: &[LatLng]) -> ElevationResult<Vec<f64>> {
        Err(ElevationError::Unavailable {
            reason: self.reason.clone(),
        })
    }

    fn name(&self) -> &str {
        "unavailable-elevation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ShortAnswer;

    #[async_trait]
    impl ElevationService for ShortAnswer {
        async fn lookup(&self, _points: &[LatLng]) -> ElevationResult<Vec<f64>> {
            Ok(vec![12.0])
        }
    }

    fn path() -> Vec<LatLng> {
        vec![
            LatLng::new(0.0, 0.0),
            LatLng::new(0.0, 0.5),
            LatLng::new(0.0, 1.0),
        ]
    }

    #[tokio::test]
    async fn test_static_service_values_pass_through() {
        let values = fetch_elevations(&StaticElevation::new(42.0), &path()).await;
        assert_eq!(values, vec![42.0, 42.0, 42.0]);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_zeros() {
        let service = UnavailableElevation::new("offline");
        let values = fetch_elevations(&service, &path()).await;
        assert_eq!(values, vec![0.0, 0.0, 0.0]);
    }

    #[tokio::test]
    async fn test_length_mismatch_falls_back_to_zeros() {
        let values = fetch_elevations(&ShortAnswer, &path()).await;
        assert_eq!(values, vec![0.0; 3]);
    }

    #[tokio::test]
    async fn test_empty_input_skips_service() {
        let values = fetch_elevations(&UnavailableElevation::new("never called"), &[]).await;
        assert!(values.is_empty());
    }
}
