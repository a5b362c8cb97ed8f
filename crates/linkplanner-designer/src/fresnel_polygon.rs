//! First Fresnel zone envelope of a link as a closed map polygon.
//!
//! The path A→B is sampled on the straight lat/lng line. At each sample the
//! zone radius is computed from the great-circle distances to both ends and
//! pushed sideways along the local perpendicular. The offset treats
//! `radius / 1000` as degrees, which is only a display approximation.

use linkplanner_core::{haversine_distance, interpolate, GeoError, LatLng};
use serde::{Deserialize, Serialize};

use crate::fresnel::fresnel_radius;
use crate::model::Tower;

/// Number of intervals the link path is split into by default.
pub const DEFAULT_SAMPLES: usize = 50;

/// Degrees of offset per meter of radius.
const OFFSET_SCALE: f64 = 1.0 / 1000.0;

/// The drawn envelope for one link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FresnelEnvelope {
    pub link_id: String,
    /// Left boundary in path order followed by the right boundary in
    /// reverse path order; `2 * (samples + 1)` points.
    pub ring: Vec<LatLng>,
    /// Sample points along A→B.
    pub centerline: Vec<LatLng>,
    /// Zone radius in meters at each centerline sample.
    pub radii: Vec<f64>,
    pub total_distance_m: f64,
    /// Frequency of the first tower, the one the envelope was computed for.
    pub frequency_ghz: f64,
}

impl FresnelEnvelope {
    /// Widest point of the zone in meters.
    pub fn max_radius(&self) -> f64 {
        self.radii.iter().copied().fold(0.0, f64::max)
    }

    /// Number of intervals the path was split into.
    pub fn samples(&self) -> usize {
        self.centerline.len().saturating_sub(1)
    }
}

/// Builds [`FresnelEnvelope`]s with a fixed sample count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FresnelPolygonBuilder {
    samples: usize,
}

impl Default for FresnelPolygonBuilder {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl FresnelPolygonBuilder {
    /// `samples` must be at least 1.
    pub fn new(samples: usize) -> Result<Self, GeoError> {
        if samples == 0 {
            return Err(GeoError::InvalidSampleCount { count: samples });
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Envelope of the link `link_id` from `a` to `b`, using `a`'s frequency.
    pub fn build(&self, link_id: &str, a: &Tower, b: &Tower) -> Result<FresnelEnvelope, GeoError> {
        let centerline: Vec<LatLng> = interpolate(a.position, b.position, self.samples)?.collect();
        let total = haversine_distance(a.position, b.position);

        let radii: Vec<f64> = centerline
            .iter()
            .map(|p| {
                let d1 = haversine_distance(a.position, *p);
                let d2 = (total - d1).max(0.0);
                fresnel_radius(a.frequency_ghz, d1, d2)
            })
            .collect();

        let mut left = Vec::with_capacity(centerline.len());
        let mut right = Vec::with_capacity(centerline.len());

        for (i, (p, r)) in centerline.iter().zip(&radii).enumerate() {
            let next = centerline.get(i + 1).unwrap_or(p);
            let (off_lat, off_lng) = perpendicular_offset(*p, *next, *r);
            left.push(LatLng::new(p.lat + off_lat, p.lng + off_lng));
            right.push(LatLng::new(p.lat - off_lat, p.lng - off_lng));
        }

        let mut ring = left;
        ring.extend(right.into_iter().rev());

        tracing::debug!(
            "Fresnel envelope for {}: {} points, {:.1} m path, max radius {:.2} m",
            link_id,
            ring.len(),
            total,
            radii.iter().copied().fold(0.0, f64::max)
        );

        Ok(FresnelEnvelope {
            link_id: link_id.to_string(),
            ring,
            centerline,
            radii,
            total_distance_m: total,
            frequency_ghz: a.frequency_ghz,
        })
    }
}

/// `(lat, lng)` offset of length `radius * OFFSET_SCALE` perpendicular to
/// the direction `p → next`, rotated to the left of travel.
fn perpendicular_offset(p: LatLng, next: LatLng, radius: f64) -> (f64, f64) {
    let dx = next.lng - p.lng;
    let dy = next.lat - p.lat;
    let mut len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        len = 1.0;
    }
    let scale = radius * OFFSET_SCALE;
    (dx / len * scale, -dy / len * scale)
}
