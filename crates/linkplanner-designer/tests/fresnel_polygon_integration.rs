// Integration tests for Fresnel envelope geometry

use linkplanner_core::{haversine_distance, LatLng};
use linkplanner_designer::{
    fresnel_radius, FresnelEnvelope, FresnelPolygonBuilder, PlannerState, Tower,
    SPEED_OF_LIGHT_M_S,
};
use proptest::prelude::*;

fn orientation(p: LatLng, q: LatLng, r: LatLng) -> f64 {
    (q.lng - p.lng) * (r.lat - p.lat) - (q.lat - p.lat) * (r.lng - p.lng)
}

fn segments_cross(a: LatLng, b: LatLng, c: LatLng, d: LatLng) -> bool {
    let o1 = orientation(a, b, c);
    let o2 = orientation(a, b, d);
    let o3 = orientation(c, d, a);
    let o4 = orientation(c, d, b);
    o1 * o2 < 0.0 && o3 * o4 < 0.0
}

/// Whether any two non-adjacent edges of the closed ring properly cross.
fn self_intersects(ring: &[LatLng]) -> bool {
    let n = ring.len();
    for i in 0..n {
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let (a, b) = (ring[i], ring[(i + 1) % n]);
            let (c, d) = (ring[j], ring[(j + 1) % n]);
            if segments_cross(a, b, c, d) {
                return true;
            }
        }
    }
    false
}

fn equator_link() -> FresnelEnvelope {
    let mut state = PlannerState::new();
    let a = state.add_tower(0.0, 0.0).unwrap().id;
    let b = state.add_tower(0.0, 1.0).unwrap().id;
    state.try_create_link(&a, &b).unwrap();
    let link = state.links().next().unwrap().id.clone();
    state.click_link(&link);
    state.envelope().unwrap().clone()
}

#[test]
fn test_equator_link_ring() {
    let envelope = equator_link();
    assert_eq!(envelope.ring.len(), 102);
    assert_ne!(envelope.ring[0], envelope.ring[50]);
    assert!(!self_intersects(&envelope.ring));
}

#[test]
fn test_equator_link_sides() {
    let envelope = equator_link();
    let (left, right) = envelope.ring.split_at(51);
    assert!(left.iter().all(|p| p.lat >= 0.0));
    assert!(right.iter().all(|p| p.lat <= 0.0));
    assert!(left[25].lat > 0.0);
}

#[test]
fn test_equator_link_midpoint_radius() {
    let envelope = equator_link();
    let total = envelope.total_distance_m;
    assert!((total - 111_194.9).abs() < 1.0, "got {}", total);

    let wavelength = SPEED_OF_LIGHT_M_S / 5e9;
    let expected = (wavelength * total / 4.0).sqrt();
    assert!((envelope.radii[25] - expected).abs() < 0.01);
    assert!((envelope.max_radius() - expected).abs() < 0.01);
}

#[test]
fn test_diagonal_link_is_simple() {
    let a = Tower::new(LatLng::new(12.9716, 77.5946), 2.4);
    let b = Tower::new(LatLng::new(13.0827, 80.2707), 2.4);
    let envelope = FresnelPolygonBuilder::default().build("l", &a, &b).unwrap();
    assert_eq!(envelope.ring.len(), 102);
    assert!(!self_intersects(&envelope.ring));
}

#[test]
fn test_reselecting_replaces_envelope() {
    let mut state = PlannerState::new();
    let a = state.add_tower(0.0, 0.0).unwrap().id;
    let b = state.add_tower(0.0, 1.0).unwrap().id;
    state.try_create_link(&a, &b).unwrap();
    let link = state.links().next().unwrap().id.clone();

    state.click_link(&link);
    let first = state.envelope().unwrap().clone();
    state.click_link(&link);
    state.update_tower_frequency(&a, 2.4).unwrap();
    state.update_tower_frequency(&b, 2.4).unwrap();
    state.click_link(&link);
    let second = state.envelope().unwrap().clone();

    assert_eq!(second.frequency_ghz, 2.4);
    assert_eq!(second.ring.len(), first.ring.len());
    assert!(second.max_radius() > first.max_radius());
}

fn coordinate() -> impl Strategy<Value = LatLng> {
    (-80.0f64..80.0, -170.0f64..170.0).prop_map(|(lat, lng)| LatLng::new(lat, lng))
}

proptest! {
    #[test]
    fn prop_ring_has_two_points_per_sample(
        a in coordinate(),
        b in coordinate(),
        freq in 0.5f64..80.0,
        samples in 1usize..200,
    ) {
        let ta = Tower::new(a, freq);
        let tb = Tower::new(b, freq);
        let envelope = FresnelPolygonBuilder::new(samples).unwrap().build("l", &ta, &tb).unwrap();
        prop_assert_eq!(envelope.ring.len(), 2 * (samples + 1));
        prop_assert_eq!(envelope.centerline.len(), samples + 1);
        prop_assert_eq!(envelope.centerline[0], a);
        prop_assert_eq!(envelope.centerline[samples], b);
    }

    #[test]
    fn prop_radii_are_bounded(
        a in coordinate(),
        b in coordinate(),
        freq in 0.5f64..80.0,
    ) {
        let ta = Tower::new(a, freq);
        let tb = Tower::new(b, freq);
        let envelope = FresnelPolygonBuilder::default().build("l", &ta, &tb).unwrap();
        let total = haversine_distance(a, b);
        let bound = fresnel_radius(freq, total / 2.0, total / 2.0);
        for r in &envelope.radii {
            prop_assert!(r.is_finite());
            prop_assert!(*r >= 0.0);
            prop_assert!(*r <= bound * (1.0 + 1e-9) + 1e-9);
        }
    }

    #[test]
    fn prop_sides_mirror_the_centerline(
        a in coordinate(),
        b in coordinate(),
        samples in 1usize..100,
    ) {
        let ta = Tower::new(a, 5.0);
        let tb = Tower::new(b, 5.0);
        let envelope = FresnelPolygonBuilder::new(samples).unwrap().build("l", &ta, &tb).unwrap();
        let last = envelope.ring.len() - 1;
        for (i, p) in envelope.centerline.iter().enumerate() {
            let left = envelope.ring[i];
            let right = envelope.ring[last - i];
            prop_assert!((left.lat + right.lat - 2.0 * p.lat).abs() < 1e-9);
            prop_assert!((left.lng + right.lng - 2.0 * p.lng).abs() < 1e-9);
        }
    }
}
