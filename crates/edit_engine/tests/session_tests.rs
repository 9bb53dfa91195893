//! Integration tests for the editing session
//!
//! These drive a session the way the canvas does: import media, select,
//! drag, fit rows, and edit fields, then check the resulting geometry.

use edit_engine::{EditError, EditorSession, PositionEdit, SizeEdit, SnapSettings, WallCommand};
use layout_engine::RowFitMode;
use wall_model::{MediaSource, Tile};

const EPSILON: f64 = 1e-9;

/// Session with three tiles of widths 100, 200, 300 lined up at y = 0
fn three_tile_session(mode: RowFitMode) -> EditorSession {
    let mut session = EditorSession::new(SnapSettings::new(true, 10.0).unwrap(), mode);
    session.load_tiles(vec![
        Tile::new(MediaSource::new("/wall/a.png"), 0.0, 0.0, 100.0, 100.0),
        Tile::new(MediaSource::new("/wall/b.png"), 150.0, 0.0, 200.0, 50.0),
        Tile::new(MediaSource::new("/wall/c.mp4"), 400.0, 0.0, 300.0, 600.0),
    ]);
    session
}

fn select(session: &mut EditorSession, indices: &[usize]) {
    for &index in indices {
        session.toggle_selection(index).unwrap();
    }
}

#[test]
fn test_uniform_scale_fit_fills_canvas() {
    let mut session = three_tile_session(RowFitMode::UniformScale);
    select(&mut session, &[0, 1, 2]);
    session.fit_selected_row(1000.0).unwrap();

    let scale = (990.0 - 20.0) / 600.0;
    let tiles = session.snapshot();
    let mut expected_x = 0.0;
    for (tile, original_width) in tiles.iter().zip([100.0, 200.0, 300.0]) {
        assert!((tile.width - original_width * scale).abs() < EPSILON);
        assert!((tile.x - expected_x).abs() < EPSILON);
        assert_eq!(tile.y, 0.0);
        expected_x += tile.width + 10.0;
    }
    assert!(session.store().selection().is_empty());
}

#[test]
fn test_uniform_width_fit_equalizes_widths() {
    let mut session = three_tile_session(RowFitMode::UniformWidth);
    select(&mut session, &[0, 1, 2]);
    session.fit_selected_row(1000.0).unwrap();

    let target = (990.0 - 20.0) / 3.0;
    let tiles = session.snapshot();
    for tile in &tiles {
        assert!((tile.width - target).abs() < EPSILON);
    }
    // aspect ratios survive
    assert!((tiles[0].height - target).abs() < EPSILON);
    assert!((tiles[1].height - target / 4.0).abs() < EPSILON);
    assert!((tiles[2].height - target * 2.0).abs() < EPSILON);
    assert!(session.store().selection().is_empty());
}

#[test]
fn test_fit_follows_selection_order() {
    let mut session = three_tile_session(RowFitMode::UniformWidth);
    select(&mut session, &[2, 0]);
    session.fit_selected_row(1000.0).unwrap();

    let tiles = session.snapshot();
    // row anchored at tile 2's position, tile 0 placed after it
    assert_eq!(tiles[2].x, 400.0);
    assert!(tiles[0].x > tiles[2].x);
    // tile 1 was not selected
    assert_eq!(tiles[1].width, 200.0);
}

#[test]
fn test_rejected_fit_keeps_state() {
    let mut session = three_tile_session(RowFitMode::UniformScale);
    select(&mut session, &[2, 1]);
    let before = session.snapshot();
    // tile 2 starts at x = 400: nothing fits in a 420 wide canvas
    let result = session.fit_selected_row(420.0);
    assert!(matches!(result, Err(EditError::Layout(_))));
    assert_eq!(session.snapshot(), before);
    assert_eq!(session.store().selection().indices(), &[2, 1]);
}

#[test]
fn test_remove_then_fit_uses_reindexed_selection() {
    let mut session = three_tile_session(RowFitMode::UniformScale);
    select(&mut session, &[0, 2]);
    session.remove_tile(1).unwrap();
    assert_eq!(session.store().selection().indices(), &[0, 1]);

    session.fit_selected_row(1000.0).unwrap();
    let tiles = session.snapshot();
    assert_eq!(tiles.len(), 2);
    assert_eq!(tiles[1].media.src, "/wall/c.mp4");
    assert!((tiles[1].x - (tiles[0].width + 10.0)).abs() < EPSILON);
}

#[test]
fn test_invalid_edits_leave_geometry() {
    let mut session = three_tile_session(RowFitMode::UniformScale);
    let before = session.snapshot();

    assert!(session.edit_position(1, &PositionEdit::new("", "3")).is_err());
    assert!(session.edit_size(1, &SizeEdit::new("-4", "3")).is_err());
    assert!(session.edit_size(1, &SizeEdit::new("4", "x")).is_err());
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_drag_then_preview() {
    let mut session = three_tile_session(RowFitMode::UniformScale);
    let dropped = session.commit_drag(1, 147.0, 4.0).unwrap();
    assert_eq!((dropped.x, dropped.y), (150.0, 0.0));

    // tile 0 ends at x = 100; with a 10 margin tile 1 is pulled to 110
    let preview = session.preview_drag(1, 113.0, 0.0).unwrap();
    assert_eq!(preview.x, 110.0);
}

#[test]
fn test_script_replay() {
    let script = r#"[
        { "op": "add_media", "src": "/wall/d.gif", "width": 640, "height": 480 },
        { "op": "toggle_selection", "index": 3 },
        { "op": "toggle_selection", "index": 0 },
        { "op": "move_selected_vertically", "offset": -30 },
        { "op": "edit_position", "index": 1, "x": "5", "y": "nope" },
        { "op": "scale", "index": 2, "factor": "0.5" }
    ]"#;
    let mut session = three_tile_session(RowFitMode::UniformScale);
    let mut failures = 0;
    for command in WallCommand::list_from_json(script).unwrap() {
        if command.apply(&mut session).is_err() {
            failures += 1;
        }
    }

    assert_eq!(failures, 1);
    let tiles = session.snapshot();
    assert_eq!(tiles[3].y, 20.0);
    assert_eq!(tiles[0].y, -30.0);
    assert_eq!(tiles[1].x, 150.0);
    assert_eq!((tiles[2].width, tiles[2].height), (150.0, 300.0));
}
