//! The action sum type.
//!
//! This is a real sum type (not a key string + "sometimes-meaningful"
//! payload fields); the dispatcher handles it with a single exhaustive
//! match, so an unhandled action variant is a compile error.

use crate::digit::Digit;
use crate::operator::Operator;
use crate::scientific::ScientificFn;
use crate::state::CalcMode;

/// Operations on the memory register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryOp {
    /// Zero the register.
    Clear,
    /// Write the register into the display, starting a fresh operand.
    Recall,
    /// Add the display value to the register. Leaves the display alone.
    Add,
    /// Subtract the display value from the register. Leaves the display alone.
    Subtract,
}

/// One discrete user action against the calculator engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    InputDigit(Digit),
    InputDecimal,
    /// Clear entry: resets the display only.
    Clear,
    /// Resets the in-flight calculation; memory, history, and mode survive.
    ClearAll,
    SetOperator(Operator),
    /// Equals. A no-op unless an operation is pending.
    Calculate,
    Memory(MemoryOp),
    Scientific(ScientificFn),
    SetMode(CalcMode),
}
