use app::app_loop::{AppMode, AppState};
use app::camera::Camera;
use macroquad::prelude::KeyCode;
use tactics_core::{Pos, Scenario, Session, TurnState};

fn demo() -> (Session, AppState) {
    let session = Session::from_scenario(&Scenario::demo()).expect("demo scenario");
    (session, AppState::new(Camera::default()))
}

#[test]
fn test_select_move_and_close_actions() {
    let (mut session, mut app) = demo();
    let start = session.frame().cursor;

    app.tick(&mut session, &[KeyCode::Enter], &[]);
    assert_eq!(session.frame().turn_state, TurnState::UnitMovement);
    assert!(app.journal_dirty);

    app.tick(&mut session, &[KeyCode::D], &[]);
    app.tick(&mut session, &[KeyCode::Enter], &[]);
    let frame = session.frame();
    assert_eq!(frame.turn_state, TurnState::UnitActions);
    assert_eq!(frame.units[0].pos, Pos { y: start.y, x: start.x + 1 });
    assert!(app.last_message.as_deref().is_some_and(|message| message.contains("moved")));

    app.tick(&mut session, &[KeyCode::Enter], &[]);
    assert_eq!(session.frame().turn_state, TurnState::SelectUnit);
    assert_eq!(app.mode, AppMode::Running);
}

#[test]
fn test_undo_and_redo_keys() {
    let (mut session, mut app) = demo();
    app.tick(&mut session, &[KeyCode::Enter], &[]);
    app.tick(&mut session, &[KeyCode::S], &[]);
    app.tick(&mut session, &[KeyCode::Enter], &[]);
    let after_move = session.board().clone();

    app.tick(&mut session, &[KeyCode::C], &[]);
    assert_eq!(session.frame().history_index, 0);
    assert_eq!(app.last_message.as_deref(), Some("History 1/2"));

    app.tick(&mut session, &[KeyCode::V], &[]);
    assert_eq!(session.board(), &after_move);
}

#[test]
fn test_camera_pans_on_held_arrows_except_during_actions() {
    let (mut session, mut app) = demo();
    app.tick(&mut session, &[], &[KeyCode::Right, KeyCode::Down]);
    assert_eq!((app.camera.x0, app.camera.y0), (0.25, 0.25));
    assert!(!app.journal_dirty);

    app.tick(&mut session, &[KeyCode::Enter], &[]);
    app.tick(&mut session, &[KeyCode::D], &[]);
    app.tick(&mut session, &[KeyCode::Enter], &[]);
    assert_eq!(session.frame().turn_state, TurnState::UnitActions);

    app.tick(&mut session, &[], &[KeyCode::Right]);
    assert_eq!(app.camera.x0, 0.25, "camera is locked while the action menu is open");
}

#[test]
fn test_zoom_keys() {
    let (mut session, mut app) = demo();
    app.tick(&mut session, &[KeyCode::Z], &[]);
    assert_eq!(app.camera.scale, 4.0);
    app.tick(&mut session, &[KeyCode::X], &[]);
    app.tick(&mut session, &[KeyCode::X], &[]);
    assert_eq!(app.camera.scale, 1.0);
}

#[test]
fn test_unbound_keys_do_nothing() {
    let (mut session, mut app) = demo();
    let before = session.board().clone();
    for key in [KeyCode::U, KeyCode::PageUp, KeyCode::Space] {
        app.tick(&mut session, &[key], &[]);
        assert_eq!(session.board(), &before, "board should not change on key {:?}", key);
    }
    assert!(session.journal().inputs.is_empty());
}

#[test]
fn test_journal_dirty_is_recomputed_each_frame() {
    let (mut session, mut app) = demo();
    app.tick(&mut session, &[KeyCode::D], &[]);
    assert!(app.journal_dirty);

    app.tick(&mut session, &[], &[]);
    assert!(!app.journal_dirty);
}
