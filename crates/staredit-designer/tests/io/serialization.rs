use staredit_core::FileFormatError;
use staredit_designer::{
    levels_from_str, levels_to_string, Bounds, Entity, EntityType, Level, MotionPath, Point,
};

const SAMPLE: &str = r#"[
  {
    "name": "First Light",
    "bounds": [-240, -160, 240, 160],
    "entities": {
      "rockets": [{"x": 0, "y": 0}],
      "stars": [
        {"x": 50, "y": 0, "path": {"type": 1, "x": 0, "y": 0, "period": 4, "clockwise": true}},
        {"x": -50, "y": 0}
      ],
      "planets": [{"x": 100, "y": 80, "scale": 0.3, "sprite": 5}],
      "items": [{"x": -100, "y": -80, "type": 2}]
    }
  },
  {
    "name": "Drift",
    "bounds": [-400, -300, 400, 300],
    "entities": {
      "bumpers": [{"x": 10, "y": 20, "scale": 0.6,
                   "path": {"type": 2, "dx": 10, "dy": 0, "period": 3}}],
      "asteroids": [{"x": -10, "y": -20, "scale": 0.2}]
    }
  }
]"#;

#[test]
fn test_reads_every_entity_kind() {
    let levels = levels_from_str(SAMPLE).unwrap();
    assert_eq!(levels.len(), 2);

    let first = &levels[0];
    assert_eq!(first.name, "First Light");
    assert_eq!(first.count_of(EntityType::Rocket), 1);
    assert_eq!(first.count_of(EntityType::Star), 2);

    let (_, planet) = first.entities_of_type(EntityType::Planet)[0];
    assert_eq!(planet, &Entity::planet(100.0, 80.0, 0.3, 5));

    let (_, item) = first.entities_of_type(EntityType::Item)[0];
    assert_eq!(item.item_type(), Some(2));

    let second = &levels[1];
    assert_eq!(second.bounds, Bounds::new(-400.0, -300.0, 400.0, 300.0));
    let (_, bumper) = second.entities_of_type(EntityType::Bumper)[0];
    assert_eq!(bumper.path_reference(), Some(Point::new(0.0, 20.0)));
}

#[test]
fn test_written_text_reads_back_as_same_levels() {
    let levels = levels_from_str(SAMPLE).unwrap();
    let text = levels_to_string(levels.iter()).unwrap();
    let again = levels_from_str(&text).unwrap();
    assert_eq!(again, levels);
}

#[test]
fn test_legacy_paths_are_rewritten_with_reference_point() {
    let levels = levels_from_str(SAMPLE).unwrap();
    let text = levels_to_string(levels.iter()).unwrap();
    assert!(!text.contains("\"dx\""));
    assert!(text.contains("\"path\":{\"type\":2,\"x\":0.00,\"y\":20.00,\"period\":3.00}"));
}

#[test]
fn test_invalid_bounds_rejected() {
    let text = r#"[{"name": "Flat", "bounds": [0, 0, 100, 0]}]"#;
    let err = levels_from_str(text).unwrap_err();
    assert!(matches!(err, FileFormatError::InvalidBounds { ref level, .. } if level == "Flat"));
}

#[test]
fn test_empty_and_malformed_files() {
    assert!(matches!(levels_from_str("[]"), Err(FileFormatError::EmptyProject)));
    assert!(matches!(levels_from_str("{\"name\": 1}"), Err(FileFormatError::Json(_))));
    assert!(matches!(levels_from_str("not json"), Err(FileFormatError::Json(_))));
}

#[test]
fn test_paths_survive_writing() {
    let mut level = Level::empty("Orbit", Bounds::default());
    level.add(
        Entity::star(30.0, 0.0).with_path(MotionPath::circular(Point::new(10.0, 0.0), 2.5, true)),
    );
    let text = levels_to_string([&level]).unwrap();
    let loaded = levels_from_str(&text).unwrap();
    let (_, star) = loaded[0].entities().next().unwrap();
    assert_eq!(
        star.path,
        Some(MotionPath::circular(Point::new(10.0, 0.0), 2.5, true))
    );
}
