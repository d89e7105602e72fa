use staredit_core::ToolError;
use staredit_designer::{
    circular_array, linear_array, ArrayOperation, Bounds, Entity, EntityType, Level, MotionPath,
    Point,
};

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn test_linear_array_ends_on_origin() {
    let mut level = Level::empty("arrays", Bounds::default());
    let star = level.add(Entity::star(90.0, -30.0));

    let copies = linear_array(&mut level, &[star], 3).unwrap();
    assert_eq!(copies.len(), 2);
    assert!(close(level.position_of(copies[0]).unwrap(), Point::new(45.0, -15.0)));
    assert!(close(level.position_of(copies[1]).unwrap(), Point::ORIGIN));
}

#[test]
fn test_linear_array_of_two_reaches_origin() {
    let mut level = Level::empty("arrays", Bounds::default());
    let planet = level.add(Entity::planet(50.0, 50.0, 0.5, 2));

    let copies = linear_array(&mut level, &[planet], 2).unwrap();
    let copy = level.get(copies[0]).unwrap();
    assert!(close(copy.position, Point::ORIGIN));
    assert_eq!(copy.sprite(), Some(2));
}

#[test]
fn test_circular_array_keeps_kind_and_attributes() {
    let mut level = Level::empty("arrays", Bounds::default());
    let item = level.add(Entity::item(0.0, 80.0, 1));

    let copies = circular_array(&mut level, &[item], 4).unwrap();
    assert_eq!(copies.len(), 3);
    assert_eq!(level.count_of(EntityType::Item), 4);
    assert!(close(level.position_of(copies[0]).unwrap(), Point::new(-80.0, 0.0)));
    assert!(close(level.position_of(copies[1]).unwrap(), Point::new(0.0, -80.0)));
    assert!(close(level.position_of(copies[2]).unwrap(), Point::new(80.0, 0.0)));
    assert!(copies
        .iter()
        .all(|id| level.get(*id).and_then(Entity::item_type) == Some(1)));
}

#[test]
fn test_circular_copies_carry_rotated_path() {
    let mut level = Level::empty("arrays", Bounds::default());
    let star = level.add(
        Entity::star(100.0, 0.0).with_path(MotionPath::circular(Point::new(50.0, 0.0), 4.0, true)),
    );

    let copies = circular_array(&mut level, &[star], 2).unwrap();
    let copy = level.get(copies[0]).unwrap();
    assert!(close(copy.position, Point::new(-100.0, 0.0)));
    assert!(close(copy.path_reference().unwrap(), Point::new(-50.0, 0.0)));
}

#[test]
fn test_invalid_counts_leave_level_alone() {
    let mut level = Level::empty("arrays", Bounds::default());
    let star = level.add(Entity::star(10.0, 10.0));

    assert_eq!(
        linear_array(&mut level, &[star], 0),
        Err(ToolError::InvalidCount { count: 0 })
    );
    assert_eq!(
        circular_array(&mut level, &[star], -3),
        Err(ToolError::InvalidCount { count: -3 })
    );
    assert_eq!(level.len(), 1);
}

#[test]
fn test_count_of_one_makes_nothing() {
    let op = ArrayOperation::circular(1);
    assert!(op.validate().is_ok());
    assert_eq!(op.copies_per_entity(), 0);
    assert!(op.copy_positions(Point::new(5.0, 5.0)).is_empty());
}
