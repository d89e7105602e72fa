use staredit_designer::{
    pick, pick_all, within, Bounds, Entity, EntityType, Level, Point, SelectionManager,
};

fn level() -> Level {
    Level::empty("selection", Bounds::default())
}

#[test]
fn test_pick_prefers_topmost() {
    let mut level = level();
    let below = level.add(Entity::planet(0.0, 0.0, 0.5, 1));
    let above = level.add(Entity::star(5.0, 0.0));

    assert_eq!(pick(&level, Point::new(5.0, 0.0)), Some(above));
    assert_eq!(pick(&level, Point::new(-20.0, 0.0)), Some(below));
    assert_eq!(pick(&level, Point::new(100.0, 100.0)), None);
    assert_eq!(pick_all(&level, Point::new(5.0, 0.0)), vec![below, above]);
}

#[test]
fn test_within_needs_whole_circle() {
    let mut level = level();
    let inside = level.add(Entity::star(0.0, 0.0));
    let tangent = level.add(Entity::star(38.0, 0.0));
    level.add(Entity::star(45.0, 0.0));

    let rect = Bounds::new(-50.0, -50.0, 50.0, 50.0);
    assert_eq!(within(&level, &rect), vec![inside, tangent]);
}

#[test]
fn test_toggle_and_symmetric_difference() {
    let mut level = level();
    let ids = level.extend([
        Entity::star(0.0, 0.0),
        Entity::star(50.0, 0.0),
        Entity::star(100.0, 0.0),
    ]);

    let mut selection = SelectionManager::new();
    selection.toggle(ids[0]);
    selection.toggle(ids[1]);
    selection.toggle(ids[0]);
    assert_eq!(selection.ids(), vec![ids[1]]);

    selection.symmetric_difference([ids[1], ids[2]]);
    assert_eq!(selection.ids(), vec![ids[2]]);
}

#[test]
fn test_select_all_with_filter() {
    let mut level = level();
    let star = level.add(Entity::star(0.0, 0.0));
    level.add(Entity::rocket(50.0, 0.0));

    let mut selection = SelectionManager::new();
    selection.select_all(&level, Some(EntityType::Star));
    assert_eq!(selection.ids(), vec![star]);

    selection.select_all(&level, None);
    assert_eq!(selection.len(), 2);
}

#[test]
fn test_retain_present_drops_removed() {
    let mut level = level();
    let ids = level.extend([Entity::star(0.0, 0.0), Entity::star(50.0, 0.0)]);
    let mut selection = SelectionManager::new();
    selection.replace(ids.clone());

    level.remove(ids[0]);
    selection.retain_present(&level);
    assert_eq!(selection.ids(), vec![ids[1]]);
}
