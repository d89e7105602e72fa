use proptest::prelude::*;
use staredit_designer::{Bounds, Point, Viewport};

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-6 && (a.y - b.y).abs() < 1e-6
}

#[test]
fn test_bounds_centered_in_view() {
    let viewport = Viewport::new(800.0, 600.0);
    let bounds = Bounds::default();

    let top_left = viewport.world_to_view(&bounds, Point::new(-240.0, 160.0));
    assert!(close(top_left, Point::new(160.0, 140.0)));

    let origin = viewport.world_to_view(&bounds, Point::ORIGIN);
    assert!(close(origin, Point::new(400.0, 300.0)));
}

#[test]
fn test_view_y_points_down() {
    let mut viewport = Viewport::new(800.0, 600.0);
    viewport.set_scale(2.0);
    let bounds = Bounds::default();
    let up = viewport.world_to_view(&bounds, Point::new(0.0, 10.0));
    let down = viewport.world_to_view(&bounds, Point::new(0.0, -10.0));
    assert!((down.y - up.y - 40.0).abs() < 1e-9);
}

#[test]
fn test_zoom_is_clamped() {
    let mut viewport = Viewport::new(800.0, 600.0).with_zoom_limits(0.5, 0.5, 2.0);
    viewport.zoom_in();
    viewport.zoom_in();
    viewport.zoom_in();
    assert!((viewport.scale() - 2.0).abs() < 1e-9);

    for _ in 0..10 {
        viewport.zoom_out();
    }
    assert!((viewport.scale() - 0.5).abs() < 1e-9);

    viewport.set_scale(f64::NAN);
    assert!((viewport.scale() - 0.5).abs() < 1e-9);
}

#[test]
fn test_min_size_includes_padding() {
    let viewport = Viewport::new(100.0, 100.0).with_padding(10.0);
    let (w, h) = viewport.min_size(&Bounds::new(0.0, 0.0, 100.0, 50.0));
    assert!((w - 120.0).abs() < 1e-9);
    assert!((h - 70.0).abs() < 1e-9);
}

proptest! {
    #[test]
    fn prop_view_to_world_inverts_world_to_view(
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0,
        scale in 0.1f64..4.0,
    ) {
        let mut viewport = Viewport::new(640.0, 480.0);
        viewport.set_scale(scale);
        let bounds = Bounds::new(-300.0, -200.0, 500.0, 250.0);
        let world = Point::new(x, y);
        let back = viewport.view_to_world(&bounds, viewport.world_to_view(&bounds, world));
        prop_assert!(close(back, world));
    }
}
