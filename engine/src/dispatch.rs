//! The action dispatcher.
//!
//! One exhaustive match over [`Action`], delegating to a small handler per
//! variant. `dispatch` is pure: it consumes the current state and returns
//! the next one, with no IO and no hidden global. History timestamps come
//! from the `now` argument; callers own the clock.

use std::time::SystemTime;

use tally_types::{
    Action, CalcMode, Digit, EngineState, MemoryOp, Operator, PendingOp, ScientificFn,
    format_number, parse_display,
};

/// Advance the engine by one action.
#[must_use]
pub fn dispatch(state: EngineState, action: Action, now: SystemTime) -> EngineState {
    tracing::trace!(?action, display = %state.display, "dispatch");
    match action {
        Action::InputDigit(digit) => input_digit(state, digit),
        Action::InputDecimal => input_decimal(state),
        Action::Clear => clear_entry(state),
        Action::ClearAll => clear_all(state),
        Action::SetOperator(operator) => set_operator(state, operator, now),
        Action::Calculate => calculate(state, now),
        Action::Memory(op) => memory(state, op),
        Action::Scientific(func) => scientific(state, func, now),
        Action::SetMode(mode) => set_mode(state, mode),
    }
}

fn input_digit(mut state: EngineState, digit: Digit) -> EngineState {
    if state.awaiting_fresh_operand {
        state.display = digit.as_char().to_string();
        state.awaiting_fresh_operand = false;
    } else if state.display == "0" {
        // Replace rather than concatenate; "0" never grows leading zeros.
        state.display = digit.as_char().to_string();
    } else {
        state.display.push(digit.as_char());
    }
    state
}

fn input_decimal(mut state: EngineState) -> EngineState {
    if state.awaiting_fresh_operand {
        state.display = "0.".to_owned();
        state.awaiting_fresh_operand = false;
    } else if !state.display.contains('.') {
        state.display.push('.');
    }
    state
}

/// Clear entry: the display resets, a pending operation survives.
fn clear_entry(mut state: EngineState) -> EngineState {
    state.display = "0".to_owned();
    state.awaiting_fresh_operand = false;
    state
}

/// Clear all: the in-flight calculation resets; memory, history, and mode
/// survive.
fn clear_all(mut state: EngineState) -> EngineState {
    state.display = "0".to_owned();
    state.pending = None;
    state.awaiting_fresh_operand = false;
    state
}

fn set_operator(mut state: EngineState, operator: Operator, now: SystemTime) -> EngineState {
    let operand = parse_display(&state.display);
    let accumulator = match state.pending.take() {
        // First operand just captured; nothing to compute yet.
        None => operand,
        // Chained evaluation: `5 + 3 ×` computes 8 immediately and carries
        // it as the accumulator for the new operator. This applies even
        // when no fresh operand was typed (`5 + ×` computes 5 + 5).
        Some(pending) => {
            let result = pending.operator.apply(pending.accumulator, operand);
            record_binary(&mut state, pending, operand, result, now);
            state.display = format_number(result);
            result
        }
    };
    state.pending = Some(PendingOp {
        accumulator,
        operator,
    });
    state.awaiting_fresh_operand = true;
    state
}

fn calculate(mut state: EngineState, now: SystemTime) -> EngineState {
    // No pending operation: equals is a no-op. Pressing it twice only
    // repeats the no-op; the last operator/operand pair is never re-applied.
    let Some(pending) = state.pending.take() else {
        return state;
    };
    let operand = parse_display(&state.display);
    let result = pending.operator.apply(pending.accumulator, operand);
    record_binary(&mut state, pending, operand, result, now);
    state.display = format_number(result);
    state.awaiting_fresh_operand = true;
    state
}

fn memory(mut state: EngineState, op: MemoryOp) -> EngineState {
    match op {
        MemoryOp::Clear => state.memory = 0.0,
        MemoryOp::Recall => {
            state.display = format_number(state.memory);
            state.awaiting_fresh_operand = true;
        }
        MemoryOp::Add => state.memory += parse_display(&state.display),
        MemoryOp::Subtract => state.memory -= parse_display(&state.display),
    }
    state
}

fn scientific(mut state: EngineState, func: ScientificFn, now: SystemTime) -> EngineState {
    let operand = parse_display(&state.display);
    let result = format_number(func.apply(operand));
    state.history.record(
        func.history_expression(&format_number(operand)),
        result.clone(),
        now,
    );
    state.display = result;
    state.awaiting_fresh_operand = true;
    state
}

fn set_mode(mut state: EngineState, mode: CalcMode) -> EngineState {
    state.mode = mode;
    state
}

fn record_binary(
    state: &mut EngineState,
    pending: PendingOp,
    operand: f64,
    result: f64,
    now: SystemTime,
) {
    let expression = format!(
        "{} {} {}",
        format_number(pending.accumulator),
        pending.operator,
        format_number(operand)
    );
    state.history.record(expression, format_number(result), now);
}
