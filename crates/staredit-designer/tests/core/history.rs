use proptest::prelude::*;
use staredit_designer::{Entity, Level, UndoHistory};

#[test]
fn test_undo_redo_walks_snapshots() {
    let mut level = Level::new();
    let mut history = UndoHistory::new(&level);
    assert!(!history.can_undo());

    level.add(Entity::star(10.0, 0.0));
    history.mark(&level);
    level.add(Entity::star(20.0, 0.0));
    history.mark(&level);

    assert_eq!(history.undo().map(Level::len), Some(2));
    assert_eq!(history.undo().map(Level::len), Some(1));
    assert!(history.undo().is_none());
    assert_eq!(history.redo().map(Level::len), Some(2));
    assert!(history.can_redo());
}

#[test]
fn test_mark_discards_redo() {
    let mut level = Level::new();
    let mut history = UndoHistory::new(&level);
    level.add(Entity::star(10.0, 0.0));
    history.mark(&level);
    history.undo();

    level.add(Entity::star(30.0, 0.0));
    history.mark(&level);
    assert!(!history.can_redo());
    assert_eq!(history.len(), 2);
}

#[test]
fn test_depth_limit_drops_oldest() {
    let mut level = Level::new();
    let mut history = UndoHistory::with_depth(&level, 3);
    for i in 0..5 {
        level.add(Entity::star(f64::from(i), 0.0));
        history.mark(&level);
    }
    assert_eq!(history.len(), 3);
    assert_eq!(history.cursor(), 2);
    history.undo();
    history.undo();
    assert!(!history.can_undo());
    assert_eq!(history.current().map(Level::len), Some(4));
}

proptest! {
    #[test]
    fn prop_undo_all_restores_initial(xs in prop::collection::vec(-200.0f64..200.0, 1..12)) {
        let mut level = Level::new();
        let initial = level.copy();
        let mut history = UndoHistory::new(&level);
        for x in &xs {
            level.add(Entity::star(*x, 0.0));
            history.mark(&level);
        }
        for _ in &xs {
            prop_assert!(history.undo().is_some());
        }
        prop_assert_eq!(history.current(), Some(&initial));

        for _ in &xs {
            prop_assert!(history.redo().is_some());
        }
        prop_assert_eq!(history.current(), Some(&level));
    }
}
