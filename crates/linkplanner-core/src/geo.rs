//! Geographic primitives: coordinates, great-circle distance and
//! straight-line path sampling.

use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Mean Earth radius in meters used by the haversine formula.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a coordinate without range checks.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a coordinate, rejecting values outside -90..=90 / -180..=180.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, GeoError> {
        let point = Self { lat, lng };
        if point.is_valid() {
            Ok(point)
        } else {
            Err(GeoError::CoordinateOutOfRange { lat, lng })
        }
    }

    /// Returns true when both components are finite and in range.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<(f64, f64)> for LatLng {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Great-circle distance between two points in meters.
pub fn haversine_distance(a: LatLng, b: LatLng) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();

    let s_lat = (d_lat / 2.0).sin();
    let s_lng = (d_lng / 2.0).sin();
    let h = s_lat * s_lat + lat1.cos() * lat2.cos() * s_lng * s_lng;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_M * c
}

/// Evenly spaced points on the straight lat/lng line between two endpoints.
///
/// Yields `intervals + 1` points; the first is the start and the last is the
/// end. Cloning the iterator restarts it from its current position, so a
/// fresh clone of a new `Interpolation` walks the full path again.
#[derive(Debug, Clone)]
pub struct Interpolation {
    start: LatLng,
    end: LatLng,
    intervals: usize,
    next: usize,
}

impl Interpolation {
    /// Number of intervals the path is split into.
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Point at parameter `i / intervals`.
    fn point_at(&self, i: usize) -> LatLng {
        // Endpoints are returned verbatim so `a + (b - a) * 1.0` rounding
        // never moves the last sample off `end`.
        if i == 0 {
            return self.start;
        }
        if i == self.intervals {
            return self.end;
        }
        let t = i as f64 / self.intervals as f64;
        LatLng {
            lat: self.start.lat + (self.end.lat - self.start.lat) * t,
            lng: self.start.lng + (self.end.lng - self.start.lng) * t,
        }
    }
}

impl Iterator for Interpolation {
    type Item = LatLng;

    fn next(&mut self) -> Option<LatLng> {
        if self.next > self.intervals {
            return None;
        }
        let point = self.point_at(self.next);
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.intervals + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Interpolation {}

impl std::iter::FusedIterator for Interpolation {}

/// Linear interpolation between `a` and `b` split into `n` intervals.
///
/// `n` must be at least 1.
pub fn interpolate(a: LatLng, b: LatLng, n: usize) -> Result<Interpolation, GeoError> {
    if n == 0 {
        return Err(GeoError::InvalidSampleCount { count: n });
    }
    Ok(Interpolation {
        start: a,
        end: b,
        intervals: n,
        next: 0,
    })
}
