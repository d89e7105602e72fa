use std::sync::{Arc, Mutex};

use staredit_core::{shared, EditorEvent, EventBus, EventCategory, EventFilter};
use staredit_designer::{
    Bounds, Canvas, Clipboard, Entity, EntityType, Level, Modifiers, Point, PropertyEditor,
};

fn canvas_with(entities: Vec<Entity>) -> (Canvas, Vec<staredit_core::EntityId>, Arc<EventBus>) {
    let mut level = Level::empty("play", Bounds::new(-300.0, -300.0, 300.0, 300.0));
    let ids = level.extend(entities);
    let events = Arc::new(EventBus::new());
    (Canvas::new(shared(level), Arc::clone(&events)), ids, events)
}

fn press_drag_release(canvas: &mut Canvas, from: Point, to: Point, modifiers: Modifiers) {
    let from = canvas.world_to_view(from);
    let to = canvas.world_to_view(to);
    canvas.pointer_down(from, modifiers);
    canvas.pointer_move(to);
    canvas.pointer_up(to, modifiers);
}

#[test]
fn test_drag_snaps_front_entity_and_moves_group_equally() {
    let (mut canvas, ids, _) =
        canvas_with(vec![Entity::star(103.0, 97.0), Entity::star(-41.0, 12.0)]);
    canvas.set_selection(ids.clone());

    press_drag_release(
        &mut canvas,
        Point::new(103.0, 97.0),
        Point::new(105.0, 98.0),
        Modifiers::NONE,
    );

    let level = canvas.level();
    let level = level.borrow();
    let front = level.position_of(ids[0]).unwrap();
    let other = level.position_of(ids[1]).unwrap();
    assert!((front.x - 110.0).abs() < 1e-9 && (front.y - 100.0).abs() < 1e-9);
    assert!((other.x + 34.0).abs() < 1e-9 && (other.y - 15.0).abs() < 1e-9);
}

#[test]
fn test_drag_is_a_single_undo_step() {
    let (mut canvas, ids, _) = canvas_with(vec![Entity::star(0.0, 0.0)]);
    let start = canvas.world_to_view(Point::ORIGIN);
    canvas.pointer_down(start, Modifiers::NONE);
    for step in 1..=5 {
        let p = canvas.world_to_view(Point::new(f64::from(step) * 20.0, 0.0));
        canvas.pointer_move(p);
    }
    let end = canvas.world_to_view(Point::new(100.0, 0.0));
    canvas.pointer_up(end, Modifiers::NONE);

    assert!(canvas.undo());
    assert!(!canvas.can_undo());
    assert_eq!(canvas.level().borrow().position_of(ids[0]), Some(Point::ORIGIN));
    assert!(canvas.redo());
    assert_eq!(
        canvas.level().borrow().position_of(ids[0]),
        Some(Point::new(100.0, 0.0))
    );
}

#[test]
fn test_control_click_toggles_without_dragging() {
    let (mut canvas, ids, _) = canvas_with(vec![Entity::star(0.0, 0.0), Entity::star(100.0, 0.0)]);
    canvas.set_selection([ids[0]]);

    let second = canvas.world_to_view(Point::new(100.0, 0.0));
    canvas.pointer_down(second, Modifiers::CONTROL);
    canvas.pointer_up(second, Modifiers::CONTROL);
    assert_eq!(canvas.selected_ids(), ids);

    canvas.pointer_down(second, Modifiers::CONTROL);
    assert!(canvas.interaction_state().is_idle());
    canvas.pointer_up(second, Modifiers::CONTROL);
    assert_eq!(canvas.selected_ids(), vec![ids[0]]);
}

#[test]
fn test_double_click_requests_property_edit() {
    let (mut canvas, ids, events) = canvas_with(vec![Entity::planet(0.0, 0.0, 0.5, 3)]);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    events.subscribe(
        EventFilter::Categories(vec![EventCategory::Selection]),
        move |event| {
            if let EditorEvent::PropertyEditRequested { entities, .. } = event {
                sink.lock().unwrap().push(entities.clone());
            }
        },
    );

    let p = canvas.world_to_view(Point::ORIGIN);
    assert!(!canvas.double_click(p));
    canvas.set_selection(ids.clone());
    assert!(canvas.double_click(p));
    assert_eq!(*seen.lock().unwrap(), vec![ids]);

    let editor = canvas.property_editor().unwrap();
    assert_eq!(editor, PropertyEditor::Planet { sprite: 3, scale: 0.5 });
}

#[test]
fn test_properties_apply_to_matching_kinds_only() {
    let (mut canvas, ids, _) = canvas_with(vec![
        Entity::planet(0.0, 0.0, 0.5, 0),
        Entity::asteroid(100.0, 0.0, 0.5),
        Entity::star(-100.0, 0.0),
    ]);
    canvas.select_all(None);
    assert!(canvas.property_editor().is_none());

    canvas.set_scale(0.8).unwrap();
    canvas.set_planet_sprite(4).unwrap();
    assert!(canvas.set_scale(1.5).is_err());

    let level = canvas.level();
    let level = level.borrow();
    assert_eq!(level.get(ids[0]).unwrap().scale(), Some(0.8));
    assert_eq!(level.get(ids[0]).unwrap().sprite(), Some(4));
    assert_eq!(level.get(ids[1]).unwrap().scale(), Some(0.8));
    assert_eq!(level.get(ids[2]).unwrap().scale(), None);
}

#[test]
fn test_cut_paste_and_duplicate() {
    let (mut canvas, ids, _) = canvas_with(vec![Entity::rocket(0.0, 0.0), Entity::star(10.0, 0.0)]);
    let mut clipboard = Clipboard::new();

    canvas.set_selection([ids[1]]);
    canvas.cut(&mut clipboard);
    assert_eq!(canvas.level().borrow().count_of(EntityType::Star), 0);
    assert!(canvas.selection().is_empty());

    let pasted = canvas.paste(&clipboard);
    assert_eq!(pasted.len(), 1);
    assert_eq!(canvas.selected_ids(), pasted);

    let duplicated = canvas.duplicate(&mut clipboard);
    assert_eq!(duplicated.len(), 1);
    assert_eq!(canvas.level().borrow().count_of(EntityType::Star), 2);
}

#[test]
fn test_paste_announces_new_selection() {
    let (mut canvas, ids, events) =
        canvas_with(vec![Entity::star(10.0, 0.0), Entity::star(20.0, 0.0)]);
    let mut clipboard = Clipboard::new();
    canvas.set_selection(ids.clone());
    canvas.copy(&mut clipboard);

    let counts = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&counts);
    events.subscribe(
        EventFilter::Categories(vec![EventCategory::Selection]),
        move |event| {
            if let EditorEvent::SelectionChanged { count, .. } = event {
                sink.lock().unwrap().push(*count);
            }
        },
    );

    let pasted = canvas.paste(&clipboard);
    assert_eq!(pasted.len(), 2);
    assert_eq!(*counts.lock().unwrap(), vec![2]);
}

#[test]
fn test_array_without_copies_is_not_an_edit() {
    let (mut canvas, ids, _) = canvas_with(vec![Entity::star(0.0, 0.0)]);
    canvas.set_selection(ids);
    assert_eq!(canvas.linear_array(5).unwrap().len(), 0);
    assert_eq!(canvas.circular_array(1).unwrap().len(), 0);
    assert!(!canvas.can_undo());
}
