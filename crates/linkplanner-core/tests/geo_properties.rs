//! Property tests for the geo helpers.

use linkplanner_core::{haversine_distance, interpolate, LatLng};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = LatLng> {
    (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lng)| LatLng::new(lat, lng))
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(p in coordinate()) {
        prop_assert_eq!(haversine_distance(p, p), 0.0);
    }

    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        let ab = haversine_distance(a, b);
        let ba = haversine_distance(b, a);
        prop_assert!((ab - ba).abs() <= 1e-6 * ab.max(1.0));
    }

    #[test]
    fn distance_is_bounded_by_half_circumference(a in coordinate(), b in coordinate()) {
        let d = haversine_distance(a, b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * linkplanner_core::EARTH_RADIUS_M + 1.0);
    }

    #[test]
    fn interpolation_has_expected_shape(a in coordinate(), b in coordinate(), n in 1usize..200) {
        let points: Vec<_> = interpolate(a, b, n).unwrap().collect();
        prop_assert_eq!(points.len(), n + 1);
        prop_assert_eq!(points[0], a);
        prop_assert_eq!(points[n], b);
    }

    #[test]
    fn interpolation_steps_are_even(a in coordinate(), b in coordinate(), n in 1usize..50) {
        let points: Vec<_> = interpolate(a, b, n).unwrap().collect();
        let step_lat = (b.lat - a.lat) / n as f64;
        let step_lng = (b.lng - a.lng) / n as f64;
        for pair in points.windows(2) {
            prop_assert!(((pair[1].lat - pair[0].lat) - step_lat).abs() < 1e-9);
            prop_assert!(((pair[1].lng - pair[0].lng) - step_lng).abs() < 1e-9);
        }
    }
}

#[test]
fn midpoint_is_arithmetic_mean() {
    let a = LatLng::new(-12.5, 33.0);
    let b = LatLng::new(7.5, 35.0);
    let mid = interpolate(a, b, 2).unwrap().nth(1).unwrap();
    assert_eq!(mid, LatLng::new(-2.5, 34.0));
}
