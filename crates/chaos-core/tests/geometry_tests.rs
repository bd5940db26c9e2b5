// Host-side tests for triangle membership and sampling.

use chaos_core::*;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn permutations(v: &[Point; 3]) -> [[Point; 3]; 6] {
    let [a, b, c] = *v;
    [
        [a, b, c],
        [a, c, b],
        [b, a, c],
        [b, c, a],
        [c, a, b],
        [c, b, a],
    ]
}

#[test]
fn vertices_form_unit_equilateral_triangle() {
    let [a, b, c] = VERTICES;
    assert!((a.distance(b) - 1.0).abs() < 1e-12);
    assert!((b.distance(c) - 1.0).abs() < 1e-12);
    assert!((c.distance(a) - 1.0).abs() < 1e-12);
    assert!((TRIANGLE_HEIGHT - 0.75_f64.sqrt()).abs() < 1e-15);
}

#[test]
fn membership_accepts_vertices_and_centroid() {
    for v in VERTICES {
        assert!(is_point_in_triangle(v, &VERTICES), "vertex {v:?} should be inside");
    }
    let centroid = DVec2::new(0.5, TRIANGLE_HEIGHT / 3.0);
    assert!(is_point_in_triangle(centroid, &VERTICES));
}

#[test]
fn membership_rejects_outside_points() {
    assert!(!is_point_in_triangle(DVec2::new(-1.0, -1.0), &VERTICES));
    assert!(!is_point_in_triangle(DVec2::new(1.0, 0.8), &VERTICES));
    assert!(!is_point_in_triangle(DVec2::new(0.5, -0.01), &VERTICES));
}

#[test]
fn membership_counts_edge_midpoints_as_inside() {
    let [a, b, c] = VERTICES;
    for p in [midpoint(a, b), midpoint(b, c), midpoint(c, a)] {
        assert!(is_point_in_triangle(p, &VERTICES), "edge point {p:?} should be inside");
    }
}

#[test]
fn membership_is_invariant_to_vertex_order() {
    // Property: every ordering of the triple agrees on a grid around the triangle
    let perms = permutations(&VERTICES);
    for i in -10..=20 {
        for j in -10..=20 {
            let p = DVec2::new(i as f64 * 0.07, j as f64 * 0.07);
            let expected = is_point_in_triangle(p, &VERTICES);
            for perm in &perms {
                assert_eq!(
                    is_point_in_triangle(p, perm),
                    expected,
                    "disagreement at {p:?} for order {perm:?}"
                );
            }
        }
    }
}

#[test]
fn triangle_sampling_stays_inside() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..5_000 {
        let p = sample_in_triangle(&mut rng, &VERTICES);
        assert!(is_point_in_triangle(p, &VERTICES), "sample {p:?} escaped the triangle");
    }
}

#[test]
fn rect_sampling_stays_inside_rect() {
    let mut rng = StdRng::seed_from_u64(11);
    let rect = Rect::from_corners(DVec2::new(2.0, -1.0), DVec2::new(-3.0, 4.0));
    assert_eq!(rect.min, DVec2::new(-3.0, -1.0));
    assert_eq!(rect.max, DVec2::new(2.0, 4.0));
    for _ in 0..1_000 {
        assert!(rect.contains(rect.sample(&mut rng)));
    }
}
