//! Input handling: one key event becomes at most one engine action or app
//! command.
//!
//! The engine assumes a single serialized action stream; this module is the
//! only place that produces actions, so the assumption holds by
//! construction. Unbound keys are ignored.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tally_engine::{Action, App, CalcMode, Digit, MemoryOp, Operator, ScientificFn};

const DIGIT_IDS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Poll for input and apply it to the app.
pub fn handle_events(app: &mut App, timeout: Duration) -> anyhow::Result<()> {
    if !event::poll(timeout)? {
        return Ok(());
    }
    match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        _ => {}
    }
    Ok(())
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c' | 'q'))
    {
        app.quit();
        return;
    }

    // A transient status only lives until the next keypress.
    app.clear_status();

    match key.code {
        KeyCode::Char(c @ '0'..='9') => {
            if let Ok(digit) = Digit::new(c) {
                app.flash_key(DIGIT_IDS[digit.value() as usize]);
                app.apply(Action::InputDigit(digit));
            }
        }
        KeyCode::Char('.' | ',') => {
            app.flash_key(".");
            app.apply(Action::InputDecimal);
        }

        KeyCode::Char('+') => operator(app, Operator::Add, "+"),
        KeyCode::Char('-') => operator(app, Operator::Subtract, "-"),
        KeyCode::Char('*' | 'x') => operator(app, Operator::Multiply, "*"),
        KeyCode::Char('/') => operator(app, Operator::Divide, "/"),

        KeyCode::Enter | KeyCode::Char('=') => {
            app.flash_key("=");
            app.apply(Action::Calculate);
        }

        KeyCode::Backspace | KeyCode::Char('c') => {
            app.flash_key("CE");
            app.apply(Action::Clear);
        }
        KeyCode::Esc | KeyCode::Char('C') => {
            app.flash_key("AC");
            app.apply(Action::ClearAll);
        }

        KeyCode::Char('m') => memory(app, MemoryOp::Add, "M+"),
        KeyCode::Char('M') => memory(app, MemoryOp::Subtract, "M-"),
        KeyCode::Char('r') => memory(app, MemoryOp::Recall, "MR"),
        KeyCode::Char('R') => memory(app, MemoryOp::Clear, "MC"),

        KeyCode::Tab => {
            let mode = app.state().mode.toggled();
            app.apply(Action::SetMode(mode));
            app.set_status(format!("{} keypad", mode.as_str()));
        }

        KeyCode::Char('h') => app.toggle_history_panel(),
        KeyCode::Up => {
            if app.history_panel().visible {
                app.history_select_prev();
            }
        }
        KeyCode::Down => {
            if app.history_panel().visible {
                app.history_select_next();
            }
        }
        KeyCode::Char('D') | KeyCode::Delete => {
            if app.history_panel().visible {
                app.clear_history();
            }
        }

        KeyCode::Char('y') => copy_display(app),
        KeyCode::Char('Y') => copy_history_result(app),

        KeyCode::Char('Q') => app.quit(),

        code => {
            if let Some((func, id)) = scientific_binding(code, app.state().mode) {
                app.flash_key(id);
                app.apply(Action::Scientific(func));
            }
        }
    }
}

fn operator(app: &mut App, op: Operator, id: &'static str) {
    app.flash_key(id);
    app.apply(Action::SetOperator(op));
}

fn memory(app: &mut App, op: MemoryOp, id: &'static str) {
    app.flash_key(id);
    app.apply(Action::Memory(op));
}

/// Scientific bindings are only offered in scientific mode; the keys fall
/// through to "unbound" otherwise.
fn scientific_binding(code: KeyCode, mode: CalcMode) -> Option<(ScientificFn, &'static str)> {
    if mode != CalcMode::Scientific {
        return None;
    }
    match code {
        KeyCode::Char('s') => Some((ScientificFn::Sin, "sin")),
        KeyCode::Char('o') => Some((ScientificFn::Cos, "cos")),
        KeyCode::Char('t') => Some((ScientificFn::Tan, "tan")),
        KeyCode::Char('g') => Some((ScientificFn::Log, "log")),
        KeyCode::Char('n') => Some((ScientificFn::Ln, "ln")),
        KeyCode::Char('q') => Some((ScientificFn::Sqrt, "sqrt")),
        KeyCode::Char('u') => Some((ScientificFn::Square, "sqr")),
        KeyCode::Char('b') => Some((ScientificFn::Cube, "cube")),
        KeyCode::Char('i') => Some((ScientificFn::Reciprocal, "inv")),
        KeyCode::Char('p') => Some((ScientificFn::Pi, "pi")),
        KeyCode::Char('e') => Some((ScientificFn::E, "e")),
        KeyCode::Char('%') => Some((ScientificFn::Percent, "%")),
        _ => None,
    }
}

fn copy_display(app: &mut App) {
    let text = app.state().display.clone();
    copy_text(app, text, "Copied display");
}

fn copy_history_result(app: &mut App) {
    if !app.history_panel().visible {
        return;
    }
    let Some(entry) = app.selected_history_entry() else {
        return;
    };
    let text = entry.result().to_owned();
    copy_text(app, text, "Copied result");
}

fn copy_text(app: &mut App, text: String, confirmation: &str) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
        Ok(()) => app.set_status(confirmation),
        Err(e) => {
            tracing::warn!("Clipboard unavailable: {e}");
            app.set_status("Clipboard unavailable");
        }
    }
}
