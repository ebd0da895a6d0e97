//! Session persistence across app instances.

use std::fs;

use tally_engine::{
    Action, App, AppConfig, CalcMode, Digit, MemoryOp, Operator, SessionState, TallyConfig,
};

fn digit(value: u32) -> Digit {
    Digit::new(char::from_digit(value, 10).expect("single digit")).expect("valid digit")
}

fn test_app(dir: &tempfile::TempDir) -> App {
    App::with_data_dir(&TallyConfig::default(), dir.path().to_path_buf())
}

#[test]
fn memory_history_and_mode_survive_a_restart() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut app = test_app(&dir);
    for action in [
        Action::InputDigit(digit(9)),
        Action::Memory(MemoryOp::Add),
        Action::SetOperator(Operator::Add),
        Action::InputDigit(digit(1)),
        Action::Calculate,
        Action::SetMode(CalcMode::Scientific),
    ] {
        app.apply(action);
    }
    drop(app);

    let mut restarted = test_app(&dir);
    assert_eq!(restarted.state().memory, 9.0);
    assert_eq!(restarted.state().mode, CalcMode::Scientific);
    assert_eq!(restarted.state().history.len(), 1);
    assert_eq!(restarted.state().history.entries()[0].to_string(), "9 + 1 = 10");

    restarted.apply(Action::Memory(MemoryOp::Recall));
    assert_eq!(restarted.state().display, "9");
}

#[test]
fn in_flight_entry_state_does_not_survive() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut app = test_app(&dir);
    for action in [
        Action::InputDigit(digit(5)),
        Action::SetOperator(Operator::Add),
        Action::InputDigit(digit(3)),
    ] {
        app.apply(action);
    }
    assert_eq!(app.state().display, "3");
    assert!(app.state().pending.is_some());
    drop(app);

    let restarted = test_app(&dir);
    assert_eq!(restarted.state().display, "0");
    assert!(restarted.state().pending.is_none());
    assert!(!restarted.state().awaiting_fresh_operand);
}

#[test]
fn session_file_is_valid_json() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut app = test_app(&dir);
    app.apply(Action::InputDigit(digit(4)));
    app.apply(Action::Memory(MemoryOp::Add));

    let raw = fs::read_to_string(dir.path().join(SessionState::FILENAME)).expect("session file");
    let session: SessionState = serde_json::from_str(&raw).expect("valid session json");
    assert_eq!(session.memory, 4.0);
    assert_eq!(session.version, SessionState::CURRENT_VERSION);
}

#[test]
fn corrupted_session_file_starts_fresh() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join(SessionState::FILENAME), "not json").expect("write");

    let app = test_app(&dir);
    assert_eq!(app.state().display, "0");
    assert_eq!(app.state().memory, 0.0);
    assert!(app.state().history.is_empty());
}

#[test]
fn config_start_mode_applies_only_without_a_session() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = TallyConfig {
        app: Some(AppConfig {
            mode: Some("scientific".to_owned()),
            ..Default::default()
        }),
    };

    let mut app = App::with_data_dir(&config, dir.path().to_path_buf());
    assert_eq!(app.state().mode, CalcMode::Scientific);

    // Switching back to standard persists and beats the config next time.
    app.apply(Action::SetMode(CalcMode::Standard));
    drop(app);

    let restarted = App::with_data_dir(&config, dir.path().to_path_buf());
    assert_eq!(restarted.state().mode, CalcMode::Standard);
}
