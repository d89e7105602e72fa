use staredit_designer::{Bounds, CircularPath, Entity, EntityType, Level, MotionPath, Point};

#[test]
fn test_radius_scales_with_entity() {
    assert!((Entity::star(0.0, 0.0).radius() - 12.0).abs() < 1e-12);
    assert!((Entity::rocket(0.0, 0.0).radius() - 20.0).abs() < 1e-12);
    assert!((Entity::planet(0.0, 0.0, 0.5, 0).radius() - 32.0).abs() < 1e-12);
    assert!((Entity::asteroid(0.0, 0.0, 0.25).radius() - 8.0).abs() < 1e-12);
}

#[test]
fn test_contains_boundary() {
    let star = Entity::star(0.0, 0.0);
    assert!(star.contains(Point::new(12.0, 0.0)));
    assert!(!star.contains(Point::new(12.0, 1.0)));
    assert!(!star.contains(Point::new(-13.0, 0.0)));
}

#[test]
fn test_translate_moves_path_reference() {
    let mut star =
        Entity::star(10.0, 0.0).with_path(MotionPath::circular(Point::ORIGIN, 4.0, true));
    star.translate(5.0, -5.0);
    assert_eq!(star.position, Point::new(15.0, -5.0));
    assert_eq!(star.path_reference(), Some(Point::new(5.0, -5.0)));
}

#[test]
fn test_bounds_from_any_corners() {
    let b = Bounds::from_corners(Point::new(10.0, -4.0), Point::new(-2.0, 8.0));
    assert_eq!(b, Bounds::new(-2.0, -4.0, 10.0, 8.0));
    assert!(b.is_valid());
    assert!(!Bounds::new(0.0, 0.0, 0.0, 10.0).is_valid());
    assert!(!Bounds::new(0.0, f64::NAN, 1.0, 1.0).is_valid());
}

#[test]
fn test_new_level_has_rocket_at_origin() {
    let level = Level::new();
    assert_eq!(level.name, "(Untitled)");
    assert_eq!(level.bounds, Bounds::default());
    assert_eq!(level.len(), 1);
    assert_eq!(level.count_of(EntityType::Rocket), 1);
    let (_, rocket) = level.entities().next().unwrap();
    assert!(rocket.position.is_origin());
}

#[test]
fn test_removed_handles_are_not_reused() {
    let mut level = Level::empty("ids", Bounds::default());
    let a = level.add(Entity::star(1.0, 1.0));
    level.remove(a);
    let b = level.add(Entity::star(1.0, 1.0));
    assert_ne!(a, b);
    assert!(level.get(a).is_none());
    assert!(level.contains_id(b));
}

#[test]
fn test_orbit_geometry() {
    let path = CircularPath::new(Point::new(10.0, 10.0), 5.0, false);
    let at = Point::new(10.0, 40.0);
    assert!((path.orbit_radius(at) - 30.0).abs() < 1e-12);
    assert!((path.phase(at) - 90.0).abs() < 1e-9);
}
