use staredit_core::ProjectError;
use staredit_designer::{Bounds, DesignerState, Entity, GridOptions, SurfaceDefaults, Viewport};

#[test]
fn test_canvases_follow_session_defaults() {
    let defaults = SurfaceDefaults {
        grid: GridOptions {
            minor: (25.0, 25.0),
            ..GridOptions::default()
        },
        viewport: Viewport::new(1024.0, 768.0),
        undo_limit: 2,
    };
    let mut state = DesignerState::with_defaults(defaults.clone());
    let second = state.add_level();
    let canvas = state.open_level(second).unwrap();

    assert_eq!(canvas.grid(), &defaults.grid);
    assert!((canvas.viewport().view_width() - 1024.0).abs() < 1e-9);
    assert_eq!(state.open_canvases(), 2);
    assert_eq!(state.active_level(), Some(second));
}

#[test]
fn test_opening_twice_reuses_canvas() {
    let mut state = DesignerState::new();
    let id = state.active_level().unwrap();
    state
        .open_level(id)
        .unwrap()
        .add_entity(Entity::star(5.0, 5.0));
    let canvas = state.open_level(id).unwrap();
    assert!(canvas.can_undo());
    assert_eq!(state.open_canvases(), 1);
}

#[test]
fn test_edits_are_visible_through_project() {
    let mut state = DesignerState::new();
    let id = state.active_level().unwrap();
    state
        .active_canvas_mut()
        .unwrap()
        .add_entity(Entity::star(5.0, 5.0));

    let summaries = state.level_summaries();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, id);
    assert_eq!(summaries[0].stars, 1);
    assert_eq!(state.project.level(id).unwrap().borrow().len(), 2);
}

#[test]
fn test_removing_active_level_opens_another() {
    let mut state = DesignerState::new();
    let first = state.active_level().unwrap();
    let second = state.add_level();
    let third = state.add_level();
    state.open_level(third).unwrap();

    state.remove_level(third).unwrap();
    assert_eq!(state.active_level(), Some(first));
    assert!(state.canvas(third).is_none());
    assert_eq!(state.move_level_down(first), Ok(true));
    assert_eq!(state.level_summaries()[1].id, first);
    assert_eq!(state.level_summaries()[0].id, second);
}

#[test]
fn test_metadata_on_closed_level() {
    let mut state = DesignerState::new();
    let second = state.add_level();
    state
        .set_level_metadata(second, "Belt", Bounds::new(-50.0, -50.0, 50.0, 50.0))
        .unwrap();
    assert!(state.canvas(second).is_none());
    assert_eq!(state.level_summaries()[1].name, "Belt");

    let bad = Bounds::new(10.0, 0.0, -10.0, 5.0);
    assert!(matches!(
        state.set_level_metadata(second, "Bad", bad),
        Err(ProjectError::InvalidBounds { .. })
    ));
}
