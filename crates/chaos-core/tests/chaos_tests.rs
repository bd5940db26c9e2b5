// Host-side tests for the chaos-game engine.

use chaos_core::*;
use glam::DVec2;

const CANVAS: CanvasSize = CanvasSize::new(800.0, 600.0);
const EPS: f64 = 1e-12;

fn initial() -> Viewport {
    Viewport::initial(CANVAS).expect("drawable")
}

#[test]
fn step_moves_exactly_halfway_to_a_vertex() {
    let mut game = ChaosGame::new(42);
    let start = DVec2::new(0.3, 0.2);
    for _ in 0..200 {
        let (target, next) = game.step(start);
        assert!(VERTICES.contains(&target), "target {target:?} is not a vertex");
        assert_eq!(next, midpoint(start, target));
        assert_eq!(next, start * 0.5 + target * 0.5);
    }
}

#[test]
fn step_picks_every_vertex() {
    let mut game = ChaosGame::new(1);
    let mut seen = [0usize; 3];
    for _ in 0..3_000 {
        let (target, _) = game.step(DVec2::ZERO);
        let i = VERTICES.iter().position(|v| *v == target).expect("vertex");
        seen[i] += 1;
    }
    for (i, n) in seen.iter().enumerate() {
        assert!(*n > 800, "vertex {i} chosen only {n} times");
    }
}

#[test]
fn step_preserves_triangle_membership() {
    // Property: the midpoint of two points of a convex set stays in the set
    let mut game = ChaosGame::new(9);
    let mut p = DVec2::new(0.5, 0.1);
    for _ in 0..2_000 {
        let (_, next) = game.step(p);
        assert!(is_point_in_triangle(next, &VERTICES), "{next:?} left the triangle");
        p = next;
    }
}

#[test]
fn ten_thousand_points_stay_in_bounding_box() {
    let mut game = ChaosGame::new(2024);
    game.generate_batch(BatchSize::TenThousand, &initial(), CANVAS);
    assert_eq!(game.points().len(), 10_000);
    for p in game.points() {
        assert!(p.x >= -EPS && p.x <= 1.0 + EPS, "x out of range: {p:?}");
        assert!(p.y >= -EPS && p.y <= TRIANGLE_HEIGHT + EPS, "y out of range: {p:?}");
    }
}

#[test]
fn batch_appends_in_order_and_persists_current_point() {
    let mut game = ChaosGame::new(5);
    let v = initial();
    game.generate_batch(BatchSize::Hundred, &v, CANVAS);
    let first: Vec<Point> = game.points().to_vec();
    assert_eq!(first.len(), 100);
    assert_eq!(game.current_point(), *first.last().expect("non-empty"));

    game.generate_batch(BatchSize::Thousand, &v, CANVAS);
    assert_eq!(game.points().len(), 1_100);
    assert_eq!(&game.points()[..100], first.as_slice());
    assert_eq!(game.current_point(), game.points()[1_099]);
}

#[test]
fn batch_continues_from_visible_current_point() {
    let mut game = ChaosGame::new(8);
    let v = initial();
    game.generate_batch(BatchSize::Hundred, &v, CANVAS);
    let last = game.current_point();
    game.generate_batch(BatchSize::Hundred, &v, CANVAS);
    let first_of_second = game.points()[100];
    // continuity: the next point is a midpoint between the old current point and a vertex
    assert!(
        VERTICES.iter().any(|t| midpoint(last, *t) == first_of_second),
        "second batch did not continue from {last:?}"
    );
}

#[test]
fn seeds_sessions_reproducibly() {
    let mut a = ChaosGame::new(77);
    let mut b = ChaosGame::new(77);
    let v = initial();
    a.generate_batch(BatchSize::Thousand, &v, CANVAS);
    b.generate_batch(BatchSize::Thousand, &v, CANVAS);
    assert_eq!(a.points(), b.points());
}

#[test]
fn reacquire_on_empty_collection_draws_visible_in_triangle_seed() {
    let v = initial();
    let visible = v.visible_rect(CANVAS);
    for seed in 0..50 {
        let mut game = ChaosGame::new(seed);
        let p = game.reacquire_seed(&v, CANVAS);
        assert!(is_point_in_triangle(p, &VERTICES));
        assert!(visible.contains(p));
    }
}

#[test]
fn reacquire_on_empty_collection_ignores_visible_current_point() {
    let v = initial();
    let pinned = DVec2::new(0.5, 0.3);
    assert!(v.visible_rect(CANVAS).contains(pinned));
    for seed in 0..20 {
        let mut game = ChaosGame::new(seed);
        game.set_current_point(pinned);
        assert_ne!(game.reacquire_seed(&v, CANVAS), pinned, "seed {seed}");
    }
}

#[test]
fn reacquire_keeps_visible_current_point() {
    let mut game = ChaosGame::new(4);
    let v = initial();
    game.generate_batch(BatchSize::Hundred, &v, CANVAS);
    let current = game.current_point();
    assert_eq!(game.reacquire_seed(&v, CANVAS), current);
}

#[test]
fn reacquire_replaces_off_screen_current_point() {
    let mut game = ChaosGame::new(4);
    let v = initial();
    game.generate_batch(BatchSize::Hundred, &v, CANVAS);

    // zoom deep into the lower-left vertex so most points fall off screen
    let corner = v.to_screen(VERTICES[0], CANVAS);
    let zoomed = v.zoom_at(corner, -2_500.0, CANVAS);
    let visible = zoomed.visible_rect(CANVAS);
    game.set_current_point(DVec2::new(0.9, 0.05));
    assert!(!visible.contains(game.current_point()));

    let seed = game.reacquire_seed(&zoomed, CANVAS);
    assert!(is_point_in_triangle(seed, &VERTICES));
    assert!(visible.contains(seed), "seed {seed:?} should be on screen");
}

#[test]
fn reacquire_falls_back_to_whole_triangle_when_view_misses_it() {
    let mut game = ChaosGame::new(13);
    let far = Viewport::new(50.0, 50.0, 600.0).expect("valid");
    for _ in 0..20 {
        let p = game.reacquire_seed(&far, CANVAS);
        assert!(is_point_in_triangle(p, &VERTICES), "fallback {p:?} not in triangle");
        assert!(!far.visible_rect(CANVAS).contains(p));
    }
}

#[test]
fn batch_size_parsing_accepts_only_supported_counts() {
    assert_eq!(BatchSize::try_from(100), Ok(BatchSize::Hundred));
    assert_eq!(BatchSize::try_from(1_000), Ok(BatchSize::Thousand));
    assert_eq!(BatchSize::try_from(10_000), Ok(BatchSize::TenThousand));
    assert_eq!(BatchSize::try_from(0), Err(ChaosError::UnsupportedBatchSize(0)));
    assert_eq!(BatchSize::try_from(500), Err(ChaosError::UnsupportedBatchSize(500)));
    for size in [BatchSize::Hundred, BatchSize::Thousand, BatchSize::TenThousand] {
        assert_eq!(BatchSize::try_from(size.count()), Ok(size));
    }
}

#[test]
fn reset_clears_points_and_reseeds_inside_triangle() {
    let mut game = ChaosGame::new(21);
    game.generate_batch(BatchSize::Thousand, &initial(), CANVAS);
    game.reset();
    assert!(game.points().is_empty());
    assert!(is_point_in_triangle(game.current_point(), &VERTICES));
}
