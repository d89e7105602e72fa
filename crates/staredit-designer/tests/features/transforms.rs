use proptest::prelude::*;
use staredit_core::ToolError;
use staredit_designer::transforms::{mirror, rotate};
use staredit_designer::{Bounds, DesignerCommand, Entity, Level, MotionPath, Point};

fn level_with(entities: Vec<Entity>) -> (Level, Vec<staredit_core::EntityId>) {
    let mut level = Level::empty("tools", Bounds::default());
    let ids = level.extend(entities);
    (level, ids)
}

#[test]
fn test_mirror_flips_position_and_path() {
    let (mut level, ids) = level_with(vec![Entity::star(30.0, 20.0)
        .with_path(MotionPath::circular(Point::new(10.0, 5.0), 3.0, false))]);

    DesignerCommand::mirror_horizontal()
        .apply(&mut level, &ids)
        .unwrap();

    let star = level.get(ids[0]).unwrap();
    assert_eq!(star.position, Point::new(-30.0, 20.0));
    assert_eq!(star.path_reference(), Some(Point::new(-10.0, 5.0)));
}

#[test]
fn test_mirror_rejects_other_factors() {
    let (mut level, ids) = level_with(vec![Entity::star(1.0, 1.0)]);
    let before = level.clone();
    assert_eq!(
        mirror(&mut level, &ids, 2.0, 1.0),
        Err(ToolError::InvalidMirror { mx: 2.0, my: 1.0 })
    );
    assert_eq!(level, before);
}

#[test]
fn test_rotate_quarter_turn() {
    let (mut level, ids) = level_with(vec![Entity::star(100.0, 0.0), Entity::rocket(0.0, 0.0)]);
    assert_eq!(rotate(&mut level, &ids, 90.0), Ok(1));

    let star = level.position_of(ids[0]).unwrap();
    assert!(star.x.abs() < 1e-9);
    assert!((star.y - 100.0).abs() < 1e-9);
    assert_eq!(level.position_of(ids[1]), Some(Point::ORIGIN));
}

#[test]
fn test_rotate_rejects_nan() {
    let (mut level, ids) = level_with(vec![Entity::star(1.0, 0.0)]);
    assert!(matches!(
        rotate(&mut level, &ids, f64::NAN),
        Err(ToolError::InvalidParameter { name: "angle", .. })
    ));
}

#[test]
fn test_attach_and_detach_paths() {
    let (mut level, ids) = level_with(vec![Entity::star(0.0, 0.0), Entity::bumper(40.0, 0.0, 0.3)]);

    DesignerCommand::AttachLinearPath {
        anchor: Point::new(0.0, 50.0),
        period: 2.0,
    }
    .apply(&mut level, &ids)
    .unwrap();
    assert!(level.entities().all(|(_, e)| e.path.is_some()));

    DesignerCommand::DetachPath
        .apply(&mut level, &ids[..1])
        .unwrap();
    assert!(level.get(ids[0]).unwrap().path.is_none());
    assert_eq!(
        level.get(ids[1]).unwrap().path_reference(),
        Some(Point::new(0.0, 50.0))
    );
}

proptest! {
    #[test]
    fn prop_mirror_twice_is_identity(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        mx in prop::sample::select(vec![1.0f64, -1.0]),
        my in prop::sample::select(vec![1.0f64, -1.0]),
    ) {
        let (mut level, ids) = level_with(vec![Entity::asteroid(x, y, 0.5)
            .with_path(MotionPath::linear(Point::new(y, x), 1.0))]);
        let before = level.clone();
        mirror(&mut level, &ids, mx, my).unwrap();
        mirror(&mut level, &ids, mx, my).unwrap();
        prop_assert_eq!(level, before);
    }

    #[test]
    fn prop_rotation_keeps_distance(
        x in -500.0f64..500.0,
        y in -500.0f64..500.0,
        degrees in -720.0f64..720.0,
    ) {
        let (mut level, ids) = level_with(vec![Entity::star(x, y)]);
        rotate(&mut level, &ids, degrees).unwrap();
        let p = level.position_of(ids[0]).unwrap();
        prop_assert!((p.x.hypot(p.y) - x.hypot(y)).abs() < 1e-6);
    }
}
