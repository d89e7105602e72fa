use staredit_core::FileFormatError;
use staredit_designer::{DesignerState, Entity, EntityType, Level, Project};

#[test]
fn test_planet_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planet.json");

    let mut level = Level::new();
    level.add(Entity::planet(50.0, 50.0, 0.5, 2));
    let project = Project::from_levels(vec![level]).unwrap();
    project.save(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"planets\":[{\"x\":50.00,\"y\":50.00,\"scale\":0.50,\"sprite\":2}]"));

    let loaded = Project::load(&path).unwrap();
    let level = loaded.level_at(0).unwrap();
    let level = level.borrow();
    let planets = level.entities_of_type(EntityType::Planet);
    assert_eq!(planets.len(), 1);
    assert_eq!(planets[0].1, &Entity::planet(50.0, 50.0, 0.5, 2));
    assert_eq!(level.count_of(EntityType::Rocket), 1);
}

#[test]
fn test_level_order_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("order.json");

    let mut project = Project::new();
    for name in ["Two", "Three"] {
        project.add_level(Level::new()).borrow_mut().name = name.to_string();
    }
    project.save(&path).unwrap();

    let loaded = Project::load(&path).unwrap();
    let names: Vec<String> = loaded.summaries().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["(Untitled)", "Two", "Three"]);
    assert_eq!(loaded.snapshot(), project.snapshot());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Project::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, FileFormatError::Io(_)));
}

#[test]
fn test_session_round_trip_clears_modified() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let mut state = DesignerState::new();
    state.add_level();
    assert!(state.is_modified());
    state.save_to_file(&path).unwrap();
    assert!(!state.is_modified());
    assert_eq!(state.window_title(), "session.json - Star Edit");

    let mut reopened = DesignerState::new();
    reopened.load_from_file(&path).unwrap();
    assert_eq!(reopened.project.len(), 2);
    assert!(!reopened.is_modified());
    assert_eq!(reopened.active_level(), reopened.level_summaries().first().map(|s| s.id));
}

#[test]
fn test_failed_session_load_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "[]").unwrap();

    let mut state = DesignerState::new();
    let err = state.load_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("empty.json"));
    assert!(matches!(
        err.downcast_ref::<FileFormatError>(),
        Some(FileFormatError::EmptyProject)
    ));
    assert_eq!(state.project.len(), 1);
}
