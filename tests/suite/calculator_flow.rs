//! End-to-end calculator flows through the `App` shell.

use tally_engine::{
    Action, App, CalcMode, Digit, MemoryOp, Operator, ScientificFn, TallyConfig, MAX_HISTORY,
};

fn digit(value: u32) -> Digit {
    Digit::new(char::from_digit(value, 10).expect("single digit")).expect("valid digit")
}

fn test_app(dir: &tempfile::TempDir) -> App {
    App::with_data_dir(&TallyConfig::default(), dir.path().to_path_buf())
}

#[test]
fn chained_calculation_through_the_app() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = test_app(&dir);

    for action in [
        Action::InputDigit(digit(5)),
        Action::SetOperator(Operator::Add),
        Action::InputDigit(digit(3)),
        Action::SetOperator(Operator::Multiply),
        Action::InputDigit(digit(2)),
        Action::Calculate,
    ] {
        app.apply(action);
    }

    assert_eq!(app.state().display, "16");
    let entries = app.state().history.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].to_string(), "8 × 2 = 16");
    assert_eq!(entries[1].to_string(), "5 + 3 = 8");
}

#[test]
fn division_by_zero_shows_zero_not_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = test_app(&dir);

    for action in [
        Action::InputDigit(digit(7)),
        Action::SetOperator(Operator::Divide),
        Action::InputDigit(digit(0)),
        Action::Calculate,
    ] {
        app.apply(action);
    }

    assert_eq!(app.state().display, "0");
}

#[test]
fn history_selection_follows_the_cap() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = test_app(&dir);

    for _ in 0..MAX_HISTORY + 5 {
        for action in [
            Action::InputDigit(digit(2)),
            Action::SetOperator(Operator::Add),
            Action::InputDigit(digit(2)),
            Action::Calculate,
            Action::ClearAll,
        ] {
            app.apply(action);
        }
    }

    assert_eq!(app.state().history.len(), MAX_HISTORY);

    // Selection stays in range even as old entries are evicted.
    app.toggle_history_panel();
    for _ in 0..MAX_HISTORY * 2 {
        app.history_select_next();
    }
    assert_eq!(app.history_panel().selected, MAX_HISTORY - 1);
    assert!(app.selected_history_entry().is_some());
}

#[test]
fn clear_history_leaves_arithmetic_alone() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = test_app(&dir);

    for action in [
        Action::InputDigit(digit(6)),
        Action::SetOperator(Operator::Multiply),
        Action::InputDigit(digit(7)),
        Action::Calculate,
        Action::Memory(MemoryOp::Add),
    ] {
        app.apply(action);
    }
    assert_eq!(app.state().history.len(), 1);

    app.clear_history();

    assert!(app.state().history.is_empty());
    assert_eq!(app.state().display, "42");
    assert_eq!(app.state().memory, 42.0);
}

#[test]
fn scientific_flow_in_scientific_mode() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut app = test_app(&dir);

    for action in [
        Action::SetMode(CalcMode::Scientific),
        Action::InputDigit(digit(9)),
        Action::InputDigit(digit(0)),
        Action::Scientific(ScientificFn::Sin),
        Action::SetOperator(Operator::Add),
        Action::InputDigit(digit(1)),
        Action::Calculate,
    ] {
        app.apply(action);
    }

    assert_eq!(app.state().display, "2");
    assert_eq!(app.state().mode, CalcMode::Scientific);
    assert_eq!(app.state().history.entries()[1].to_string(), "sin(90) = 1");
    assert_eq!(app.state().history.entries()[0].to_string(), "1 + 1 = 2");
}
