//! First Fresnel zone radius and the elevation pass-through.

use std::sync::Arc;

use linkplanner_core::LatLng;
use linkplanner_elevation::{fetch_elevations, ElevationRequest, ElevationResponse, ElevationService};

/// Propagation speed used for the wavelength, m/s.
pub const SPEED_OF_LIGHT_M_S: f64 = 3e8;

/// Radius in meters of the first Fresnel zone at a point `d1` meters from
/// one antenna and `d2` meters from the other.
///
/// Returns 0 when `d1 + d2 == 0`.
pub fn fresnel_radius(freq_ghz: f64, d1: f64, d2: f64) -> f64 {
    debug_assert!(
        freq_ghz.is_finite() && freq_ghz > 0.0,
        "frequency must be positive and finite, got {freq_ghz}"
    );
    debug_assert!(d1 >= 0.0 && d2 >= 0.0, "distances must be >= 0, got {d1}, {d2}");

    let total = d1 + d2;
    if total == 0.0 {
        return 0.0;
    }
    let wavelength = SPEED_OF_LIGHT_M_S / (freq_ghz * 1e9);
    (wavelength * d1 * d2 / total).sqrt()
}

/// Fresnel helpers bound to an elevation service.
///
/// The service is injected so tests can hand in a deterministic stub.
#[derive(Clone)]
pub struct FresnelCalculator {
    elevation: Arc<dyn ElevationService>,
}

impl FresnelCalculator {
    pub fn new(elevation: Arc<dyn ElevationService>) -> Self {
        Self { elevation }
    }

    /// Elevations for `points`, zeros if the lookup fails.
    pub async fn fetch_elevations(&self, points: &[LatLng]) -> Vec<f64> {
        fetch_elevations(self.elevation.as_ref(), points).await
    }

    /// Runs a tracked request issued by the planner.
    pub async fn resolve(&self, request: ElevationRequest) -> ElevationResponse {
        let elevations = self.fetch_elevations(&request.points).await;
        request.into_response(elevations)
    }
}

impl std::fmt::Debug for FresnelCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FresnelCalculator")
            .field("elevation", &self.elevation.name())
            .finish()
    }
}
